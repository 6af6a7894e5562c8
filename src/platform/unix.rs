use crate::aliases::AppRequest;
use crate::config::Config;
use crate::error::LauncherError;
use crate::platform::{AppLauncher, Platform, ResolvedApp};
use fs_err as fs;
use log::debug;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// What file manager to use for `--reveal` when the config doesn't say.
pub const DEFAULT_FILE_MANAGER: &str = "nautilus";

/// Set by desktop sessions; its absence means we were started from a console.
const DESKTOP_SESSION_VAR: &str = "XDG_CURRENT_DESKTOP";

pub struct UnixLauncher {
    search_path: OsString,
    graphical: bool,
    file_manager: String,
}

impl UnixLauncher {
    pub fn from_env(config: &Config) -> Self {
        Self::new(
            env::var_os("PATH").unwrap_or_default(),
            env::var_os(DESKTOP_SESSION_VAR).is_some(),
            config
                .file_manager(Platform::Linux)
                .unwrap_or(DEFAULT_FILE_MANAGER),
        )
    }

    pub fn new(search_path: impl Into<OsString>, graphical: bool, file_manager: &str) -> Self {
        Self {
            search_path: search_path.into(),
            graphical,
            file_manager: file_manager.to_string(),
        }
    }

    // Graphical programs outlive us; console programs are waited for.
    fn spawn(&self, program: &Path, args: &[&OsStr]) -> Result<(), LauncherError> {
        debug!("spawning {} with {} argument(s)", program.display(), args.len());
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LauncherError::io(&format!("could not launch {}", program.display()), e))?;
        if self.graphical {
            return Ok(());
        }
        let status = child
            .wait()
            .map_err(|e| LauncherError::io(&format!("waiting for {}", program.display()), e))?;
        debug!("{} exited with {status}", program.display());
        Ok(())
    }

    fn file_manager(&self) -> Result<PathBuf, LauncherError> {
        let configured = Path::new(&self.file_manager);
        if configured.is_absolute() {
            return if configured.exists() {
                Ok(configured.to_path_buf())
            } else {
                Err(LauncherError::MissingFileManager(self.file_manager.clone()))
            };
        }
        match self.locate(&AppRequest::verbatim(&self.file_manager)) {
            Ok(found) => Ok(found.location),
            Err(LauncherError::CommandNotFound(_)) => {
                Err(LauncherError::MissingFileManager(self.file_manager.clone()))
            }
            Err(e) => Err(e),
        }
    }
}

impl AppLauncher for UnixLauncher {
    fn locate(&self, app: &AppRequest) -> Result<ResolvedApp, LauncherError> {
        match search_path(&self.search_path, &app.target)? {
            Some(location) => Ok(ResolvedApp {
                name: app.given.clone(),
                location,
            }),
            None => Err(LauncherError::CommandNotFound(app.target.clone())),
        }
    }

    fn launch(&self, app: &ResolvedApp) -> Result<(), LauncherError> {
        self.spawn(&app.location, &[])
    }

    fn reveal(&self, apps: &[ResolvedApp]) -> Result<(), LauncherError> {
        let manager = self.file_manager()?;
        let args: Vec<&OsStr> = apps.iter().map(|a| a.location.as_os_str()).collect();
        self.spawn(&manager, &args)
    }
}

/// Find the first directory on `search_path` holding an entry named exactly
/// `name`. Missing directories are skipped; unreadable ones are an error.
pub fn search_path(search_path: &OsStr, name: &str) -> Result<Option<PathBuf>, LauncherError> {
    for dir in env::split_paths(search_path) {
        if dir.as_os_str().is_empty() || !dir.exists() {
            debug!("skipping {:?}", dir);
            continue;
        }
        let entries = fs::read_dir(&dir).map_err(|e| LauncherError::io("could not search PATH", e))?;
        for entry in entries {
            let entry = entry.map_err(|e| LauncherError::io("could not search PATH", e))?;
            if entry.file_name() == OsStr::new(name) {
                return Ok(Some(dir.join(name)));
            }
        }
    }
    Ok(None)
}
