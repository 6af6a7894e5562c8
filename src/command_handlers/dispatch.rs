use crate::aliases::{AppRequest, EffectiveAliases};
use crate::cli::Cli;
use crate::config::Config;
use crate::console::Console;
use crate::error::EXIT_CONFIG;
use crate::ops;
use crate::platform::{self, Platform};
use log::debug;

/// Run the command and return the process exit status.
pub fn dispatch(cli: Cli) -> i32 {
    let mut console = Console::stdio(cli.quiet);

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            debug!("config problem: {:?}", e.kind);
            // always complain about dotfile problems, quiet or not
            console.complain_always(&e);
            return EXIT_CONFIG;
        }
    };

    let aliases = EffectiveAliases::merge(&config, Platform::current());
    debug!("{} effective alias(es) for {}", aliases.len(), Platform::current());
    let requests: Vec<AppRequest> = cli.apps.iter().map(|a| aliases.request(a)).collect();

    let launcher = platform::launcher(&config);
    match ops::run(cli.operation(), &requests, launcher.as_ref(), &mut console) {
        Ok(()) => 0,
        Err(e) => {
            console.complain(&e);
            e.exit_code()
        }
    }
}
