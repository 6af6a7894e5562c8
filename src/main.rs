mod aliases;
mod cli;
mod command_handlers;
mod config;
mod console;
mod error;
mod ops;
mod platform;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    std::process::exit(command_handlers::dispatch::dispatch(cli));
}
