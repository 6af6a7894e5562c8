use crate::aliases::AppRequest;
use crate::config::Config;
use crate::error::LauncherError;
use crate::platform::{AppLauncher, Platform, ResolvedApp};
use log::debug;
use std::env;
use std::ffi::{OsStr, OsString};
use std::os::windows::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const DEFAULT_FILE_MANAGER: &str = "explorer";

const DETACHED_PROCESS: u32 = 0x0000_0008;

pub struct WindowsLauncher {
    search_path: OsString,
    file_manager: String,
}

impl WindowsLauncher {
    pub fn from_env(config: &Config) -> Self {
        Self {
            search_path: env::var_os("PATH").unwrap_or_default(),
            file_manager: config
                .file_manager(Platform::Windows)
                .unwrap_or(DEFAULT_FILE_MANAGER)
                .to_string(),
        }
    }

    fn spawn<I, S>(&self, program: &Path, args: I) -> Result<(), LauncherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = detached(program);
        command.args(args);
        start(&mut command, program)
    }

    fn file_manager(&self) -> Result<PathBuf, LauncherError> {
        match self.locate(&AppRequest::verbatim(&self.file_manager)) {
            Ok(found) => Ok(found.location),
            Err(LauncherError::CommandNotFound(_)) => {
                Err(LauncherError::MissingFileManager(self.file_manager.clone()))
            }
            Err(e) => Err(e),
        }
    }
}

impl AppLauncher for WindowsLauncher {
    fn locate(&self, app: &AppRequest) -> Result<ResolvedApp, LauncherError> {
        let cwd = env::current_dir().map_err(|e| LauncherError::io("could not read current directory", e))?;
        match which::which_in(&app.target, Some(&self.search_path), cwd) {
            Ok(location) => Ok(ResolvedApp {
                name: app.given.clone(),
                location,
            }),
            Err(which::Error::CannotFindBinaryPath) => {
                Err(LauncherError::CommandNotFound(app.target.clone()))
            }
            Err(e) => Err(LauncherError::Unknown(anyhow::Error::new(e))),
        }
    }

    fn launch(&self, app: &ResolvedApp) -> Result<(), LauncherError> {
        self.spawn(&app.location, std::iter::empty::<&OsStr>())
    }

    // Explorer selects a single item per window, so it gets one call per app.
    fn reveal(&self, apps: &[ResolvedApp]) -> Result<(), LauncherError> {
        let manager = self.file_manager()?;
        let is_explorer = manager
            .file_stem()
            .is_some_and(|s| s.eq_ignore_ascii_case(DEFAULT_FILE_MANAGER));
        if !is_explorer {
            return self.spawn(&manager, apps.iter().map(|a| a.location.as_os_str()));
        }
        for app in apps {
            start(&mut explorer_select(&manager, &app.location), &manager)?;
        }
        Ok(())
    }
}

fn detached(program: &Path) -> Command {
    let mut command = Command::new(program);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACHED_PROCESS);
    command
}

fn start(command: &mut Command, program: &Path) -> Result<(), LauncherError> {
    debug!("spawning {}", program.display());
    command
        .spawn()
        .map(drop)
        .map_err(|e| LauncherError::io(&format!("could not launch {}", program.display()), e))
}

// Explorer only honours `/select,` when the switch itself is unquoted.
fn explorer_select(explorer: &Path, location: &Path) -> Command {
    let mut command = detached(explorer);
    command.raw_arg(format!("/select,\"{}\"", location.display()));
    command
}
