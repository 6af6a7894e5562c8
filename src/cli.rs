use clap::{ArgGroup, Parser};

/// Default location of the user's config file.
pub const DEFAULT_CONFIG: &str = "~/.oarc";

#[derive(Parser, Debug)]
#[command(
    version,
    name = "oa",
    about = "(o)pen (a)pplications -- launch apps from the command line",
    long_about = "Pass in the names of apps and oa will try to launch each of them. \
It succeeds if they all launch successfully.\n\n\
Alternately, you can use oa to find out where apps are on the filesystem, \
or to reveal them in a file browser, instead of launching them."
)]
#[command(group(ArgGroup::new("operation").args(["launch", "locate", "reveal"])))]
pub struct Cli {
    /// Launch each app (the default)
    #[arg(short, long, hide = true)]
    pub launch: bool,

    /// Print the filesystem paths to each app
    #[arg(short = 'd', long)]
    pub locate: bool,

    /// Reveal each app in a file browser
    #[arg(short, long)]
    pub reveal: bool,

    /// Suppress all output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config (defaults to ~/.oarc)
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: String,

    /// An application. You must provide at least one.
    #[arg(value_name = "app", required = true, num_args = 1..)]
    pub apps: Vec<String>,
}

/// What to do with every app named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Launch,
    Locate,
    Reveal,
}

impl Cli {
    pub fn operation(&self) -> Operation {
        if self.locate {
            Operation::Locate
        } else if self.reveal {
            Operation::Reveal
        } else {
            Operation::Launch
        }
    }
}
