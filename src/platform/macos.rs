//! Launch Services backed launcher.
//!
//! `LSFindApplicationForInfo` is deprecated, but no other API will tell you
//! where "Foo.app" is given just its name.

use crate::aliases::AppRequest;
use crate::config::Config;
use crate::error::LauncherError;
use crate::platform::launch_services::{self, OSStatus, NO_ERR};
use crate::platform::{AppLauncher, ResolvedApp};
use log::debug;
use objc2::rc::Retained;
use objc2_app_kit::NSWorkspace;
use objc2_foundation::{NSArray, NSString, NSURL};
use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr;

const K_LS_UNKNOWN_CREATOR: u32 = 0;

// NSString and NSURL are toll-free bridged with CFStringRef and CFURLRef.
#[link(name = "CoreServices", kind = "framework")]
extern "C" {
    fn LSFindApplicationForInfo(
        creator: u32,
        bundle_id: *const NSString,
        name: *const NSString,
        out_app_ref: *mut c_void,
        out_app_url: *mut *mut NSURL,
    ) -> OSStatus;
    fn LSOpenCFURLRef(url: *const NSURL, out_launched_url: *mut *mut NSURL) -> OSStatus;
}

fn file_url(path: &Path) -> Retained<NSURL> {
    let path = NSString::from_str(&path.to_string_lossy());
    unsafe { NSURL::fileURLWithPath(&path) }
}

pub struct MacLauncher;

impl MacLauncher {
    pub fn from_env(_config: &Config) -> Self {
        MacLauncher
    }
}

impl AppLauncher for MacLauncher {
    fn locate(&self, app: &AppRequest) -> Result<ResolvedApp, LauncherError> {
        let bundle = format!("{}.app", app.target);
        let name = NSString::from_str(&bundle);
        let mut url: *mut NSURL = ptr::null_mut();
        let status = unsafe {
            LSFindApplicationForInfo(
                K_LS_UNKNOWN_CREATOR,
                ptr::null(),
                &*name,
                ptr::null_mut(),
                &mut url,
            )
        };
        debug!("LSFindApplicationForInfo({bundle}) returned {status}");
        // The returned URL is owned by the caller.
        let Some(url) = (unsafe { Retained::from_raw(url) }) else {
            return Err(launch_services::error(status, &app.given));
        };
        let location = unsafe { url.path() }.ok_or_else(|| {
            LauncherError::Unknown(anyhow::anyhow!("{bundle} was found at a non-file URL"))
        })?;
        Ok(ResolvedApp {
            name: app.given.clone(),
            location: PathBuf::from(location.to_string()),
        })
    }

    fn launch(&self, app: &ResolvedApp) -> Result<(), LauncherError> {
        let url = file_url(&app.location);
        let status = unsafe { LSOpenCFURLRef(&*url, ptr::null_mut()) };
        if status != NO_ERR {
            return Err(launch_services::error(status, &app.name));
        }
        Ok(())
    }

    fn reveal(&self, apps: &[ResolvedApp]) -> Result<(), LauncherError> {
        let urls = NSArray::from_vec(apps.iter().map(|a| file_url(&a.location)).collect());
        debug!("selecting {} app(s) in the Finder", urls.len());
        unsafe { NSWorkspace::sharedWorkspace().activateFileViewerSelectingURLs(&urls) };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_bundles_by_name() {
        let found = MacLauncher.locate(&AppRequest::verbatim("Finder")).unwrap();
        assert_eq!(found.name, "Finder");
        assert!(found.location.ends_with("Finder.app"), "{:?}", found.location);
        assert!(found.location.is_absolute());
    }

    #[test]
    fn unknown_bundle_carries_launch_services_status() {
        let err = MacLauncher
            .locate(&AppRequest::verbatim("definitely-not-a-real-app-xyz"))
            .unwrap_err();
        assert!(
            matches!(err, LauncherError::Platform { code, .. } if code == launch_services::APPLICATION_NOT_FOUND),
            "{err:?}"
        );
    }

    #[test]
    fn file_urls_keep_long_paths_whole() {
        let mut long = PathBuf::from("/");
        for part in ["a", "b", "c", "d", "e", "f"] {
            long.push(part.repeat(200));
        }
        long.push("Long.app");
        let url = file_url(&long);
        let back = unsafe { url.path() }.unwrap().to_string();
        assert_eq!(PathBuf::from(back), long);
    }
}
