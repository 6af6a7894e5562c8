use crate::aliases::AppRequest;
use crate::cli::Operation;
use crate::console::Console;
use crate::error::LauncherError;
use crate::platform::AppLauncher;
use std::io::Write;

/// Apply `operation` to every requested app, in order. The first failure
/// stops the run; apps after it are never touched.
pub fn run<O: Write, E: Write>(
    operation: Operation,
    requests: &[AppRequest],
    launcher: &dyn AppLauncher,
    console: &mut Console<O, E>,
) -> Result<(), LauncherError> {
    match operation {
        Operation::Launch => {
            for request in requests {
                let app = launcher.locate(request)?;
                console.say(format_args!("Launching {}", app.location.display()));
                launcher.launch(&app)?;
            }
        }
        Operation::Locate => {
            for request in requests {
                let app = launcher.locate(request)?;
                console.say(app.location.display());
            }
        }
        Operation::Reveal => {
            let apps = requests
                .iter()
                .map(|r| launcher.locate(r))
                .collect::<Result<Vec<_>, _>>()?;
            for app in &apps {
                console.say(format_args!("Revealing {}", app.location.display()));
            }
            launcher.reveal(&apps)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ResolvedApp;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Knows a fixed set of apps and records what it was asked to do.
    struct FakeLauncher {
        known: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
        fail_launch: Option<&'static str>,
    }

    impl FakeLauncher {
        fn new(known: &[&'static str]) -> Self {
            Self {
                known: known.to_vec(),
                calls: RefCell::new(Vec::new()),
                fail_launch: None,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl AppLauncher for FakeLauncher {
        fn locate(&self, app: &AppRequest) -> Result<ResolvedApp, LauncherError> {
            self.calls.borrow_mut().push(format!("locate {}", app.target));
            if self.known.contains(&app.target.as_str()) {
                Ok(ResolvedApp {
                    name: app.given.clone(),
                    location: PathBuf::from("/apps").join(&app.target),
                })
            } else {
                Err(LauncherError::CommandNotFound(app.target.clone()))
            }
        }

        fn launch(&self, app: &ResolvedApp) -> Result<(), LauncherError> {
            self.calls.borrow_mut().push(format!("launch {}", app.name));
            match self.fail_launch {
                Some(name) if name == app.name => Err(LauncherError::Platform {
                    code: 13,
                    message: "permission denied".into(),
                }),
                _ => Ok(()),
            }
        }

        fn reveal(&self, apps: &[ResolvedApp]) -> Result<(), LauncherError> {
            let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
            self.calls.borrow_mut().push(format!("reveal {}", names.join(",")));
            Ok(())
        }
    }

    fn requests(names: &[&str]) -> Vec<AppRequest> {
        names.iter().map(|n| AppRequest::verbatim(n)).collect()
    }

    fn console(quiet: bool) -> Console<Vec<u8>, Vec<u8>> {
        Console::new(quiet, Vec::new(), Vec::new())
    }

    fn stdout(console: Console<Vec<u8>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().0).unwrap()
    }

    #[test]
    fn launch_interleaves_resolution_and_launch() {
        let launcher = FakeLauncher::new(&["TextEdit", "Chess"]);
        let mut out = console(false);
        run(Operation::Launch, &requests(&["TextEdit", "Chess"]), &launcher, &mut out).unwrap();
        assert_eq!(
            launcher.calls(),
            ["locate TextEdit", "launch TextEdit", "locate Chess", "launch Chess"]
        );
        assert_eq!(stdout(out), "Launching /apps/TextEdit\nLaunching /apps/Chess\n");
    }

    #[test]
    fn first_failure_stops_the_run() {
        let launcher = FakeLauncher::new(&["TextEdit", "Chess"]);
        let mut out = console(false);
        let err = run(
            Operation::Launch,
            &requests(&["TextEdit", "nope", "Chess"]),
            &launcher,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, LauncherError::CommandNotFound(ref n) if n == "nope"));
        assert_eq!(launcher.calls(), ["locate TextEdit", "launch TextEdit", "locate nope"]);
    }

    #[test]
    fn launch_failure_surfaces_platform_code() {
        let mut launcher = FakeLauncher::new(&["TextEdit", "Chess"]);
        launcher.fail_launch = Some("TextEdit");
        let mut out = console(false);
        let err = run(Operation::Launch, &requests(&["TextEdit", "Chess"]), &launcher, &mut out)
            .unwrap_err();
        assert_eq!(err.exit_code(), 13);
        assert_eq!(launcher.calls(), ["locate TextEdit", "launch TextEdit"]);
    }

    #[test]
    fn locate_prints_paths_in_input_order() {
        let launcher = FakeLauncher::new(&["b", "a"]);
        let mut out = console(false);
        run(Operation::Locate, &requests(&["b", "a"]), &launcher, &mut out).unwrap();
        assert_eq!(stdout(out), "/apps/b\n/apps/a\n");
        assert!(launcher.calls().iter().all(|c| c.starts_with("locate")));
    }

    #[test]
    fn quiet_locate_prints_nothing() {
        let launcher = FakeLauncher::new(&["a"]);
        let mut out = console(true);
        run(Operation::Locate, &requests(&["a"]), &launcher, &mut out).unwrap();
        assert_eq!(stdout(out), "");
    }

    #[test]
    fn reveal_resolves_everything_then_reveals_once() {
        let launcher = FakeLauncher::new(&["a", "b"]);
        let mut out = console(false);
        run(Operation::Reveal, &requests(&["a", "b"]), &launcher, &mut out).unwrap();
        assert_eq!(launcher.calls(), ["locate a", "locate b", "reveal a,b"]);
        assert_eq!(stdout(out), "Revealing /apps/a\nRevealing /apps/b\n");
    }

    #[test]
    fn reveal_is_skipped_when_an_app_is_missing() {
        let launcher = FakeLauncher::new(&["a"]);
        let mut out = console(false);
        assert!(run(Operation::Reveal, &requests(&["a", "zz"]), &launcher, &mut out).is_err());
        assert_eq!(launcher.calls(), ["locate a", "locate zz"]);
        assert_eq!(stdout(out), "");
    }
}
