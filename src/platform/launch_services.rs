//! Launch Services status codes and the message shown for each.
#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

use crate::error::LauncherError;

pub type OSStatus = i32;

pub const NO_ERR: OSStatus = 0;
pub const APP_IN_TRASH: OSStatus = -10660;
pub const NOT_AN_APPLICATION: OSStatus = -10811;
pub const DATA_UNAVAILABLE: OSStatus = -10813;
pub const APPLICATION_NOT_FOUND: OSStatus = -10814;
pub const DATA_ERR: OSStatus = -10817;
pub const LAUNCH_IN_PROGRESS: OSStatus = -10818;
pub const SERVER_COMMUNICATION: OSStatus = -10822;
pub const CANNOT_SET_INFO: OSStatus = -10823;
pub const INCOMPATIBLE_SYSTEM_VERSION: OSStatus = -10825;
pub const NO_LAUNCH_PERMISSION: OSStatus = -10826;
pub const NO_EXECUTABLE: OSStatus = -10827;
pub const NO_CLASSIC_ENVIRONMENT: OSStatus = -10828;
pub const MULTIPLE_SESSIONS_NOT_SUPPORTED: OSStatus = -10829;

/// Human-readable explanation of `status` for the app the user called `app`.
pub fn describe(status: OSStatus, app: &str) -> String {
    match status {
        APP_IN_TRASH => format!("'{app}' is in the Trash."),
        NOT_AN_APPLICATION => format!("'{app}' is not an app."),
        DATA_UNAVAILABLE => "Data of the desired type is not available.".to_string(),
        APPLICATION_NOT_FOUND => format!("Unknown app '{app}'."),
        DATA_ERR => "Improper data structure.".to_string(),
        LAUNCH_IN_PROGRESS => format!("'{app}' is already being launched."),
        SERVER_COMMUNICATION => "Can't talk to the Launch Services database.".to_string(),
        CANNOT_SET_INFO => "The system can't hide the filename extension.".to_string(),
        INCOMPATIBLE_SYSTEM_VERSION => format!("'{app}' can't run on this version of macOS."),
        NO_LAUNCH_PERMISSION => format!("You don't have permission to launch '{app}'."),
        NO_EXECUTABLE => format!("'{app}' is corrupted and can't be run."),
        NO_CLASSIC_ENVIRONMENT => format!("Classic app '{app}' can no longer be run."),
        MULTIPLE_SESSIONS_NOT_SUPPORTED => format!("Another user is already running '{app}'."),
        _ => format!("An unknown error with '{app}' has occurred."),
    }
}

pub fn error(status: OSStatus, app: &str) -> LauncherError {
    LauncherError::Platform {
        code: status,
        message: describe(status, app),
    }
}
