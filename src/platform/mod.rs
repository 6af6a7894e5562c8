use crate::aliases::AppRequest;
use crate::config::Config;
use crate::error::LauncherError;
use std::fmt;
use std::path::PathBuf;

/// Find, start and reveal apps the way the host operating system does it.
pub trait AppLauncher {
    /// Resolve an app name to its location on the filesystem.
    fn locate(&self, app: &AppRequest) -> Result<ResolvedApp, LauncherError>;
    /// Start the app as an independent process with no stdio attached.
    fn launch(&self, app: &ResolvedApp) -> Result<(), LauncherError>;
    /// Open a file browser with every app selected.
    fn reveal(&self, apps: &[ResolvedApp]) -> Result<(), LauncherError>;
}

/// Where an app lives, and what the user called it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApp {
    pub name: String,
    pub location: PathBuf,
}

/// The operating system families `oa` knows how to drive. Each has its own
/// section in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Non-mac Unix systems are treated as Linux.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Name of the platform's config section.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub mod launch_services;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::MacLauncher as ConcreteLauncher;

#[cfg(all(unix, not(target_os = "macos")))]
pub mod unix;
#[cfg(all(unix, not(target_os = "macos")))]
pub use unix::UnixLauncher as ConcreteLauncher;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WindowsLauncher as ConcreteLauncher;

/// The launcher for the platform this binary was built for.
pub fn launcher(config: &Config) -> Box<dyn AppLauncher> {
    log::debug!("using {} launcher", Platform::current());
    Box::new(ConcreteLauncher::from_env(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_keys_match_config_sections() {
        assert_eq!(Platform::Linux.key(), "linux");
        assert_eq!(Platform::MacOs.to_string(), "macos");
        assert_eq!(Platform::Windows.key(), "windows");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_hosts_use_the_linux_section() {
        assert_eq!(Platform::current(), Platform::Linux);
    }
}
