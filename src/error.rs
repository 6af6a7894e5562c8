use std::io;
use thiserror::Error;

/// Exit status for a malformed config file.
pub const EXIT_CONFIG: i32 = 1;
/// Exit status for launcher failures that carry no platform code.
pub const EXIT_LAUNCHER: i32 = 2;
/// Exit status for anything else.
pub const EXIT_UNKNOWN: i32 = 3;

/// Failure to find, launch or reveal an app.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// A status code returned by the operating system, with its description.
    #[error("{message}")]
    Platform { code: i32, message: String },

    #[error("file manager not found: {0} (set file_manager in your config)")]
    MissingFileManager(String),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl LauncherError {
    /// Wrap an I/O error, keeping the OS error number when there is one.
    pub fn io(context: &str, err: io::Error) -> Self {
        LauncherError::Platform {
            code: err.raw_os_error().unwrap_or(-1),
            message: format!("{context}: {err}"),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::Platform { code, .. } if survives_exit(*code) => *code,
            LauncherError::Unknown(_) => EXIT_UNKNOWN,
            _ => EXIT_LAUNCHER,
        }
    }
}

// Unix parents only see the low byte of the exit status.
fn survives_exit(code: i32) -> bool {
    if cfg!(unix) {
        code & 0xff != 0
    } else {
        code != 0
    }
}
