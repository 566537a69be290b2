use std::ffi::CStr;

use async_trait::async_trait;
use ck_core::ports::{CapabilityError, ForegroundAppPort};
use ck_core::TargetApp;
use cocoa::base::{id, nil, BOOL, NO};
use cocoa::foundation::{NSString, NSUInteger};
use objc::rc::autoreleasepool;
use objc::{class, msg_send, sel, sel_impl};
use tracing::debug;

use crate::blocking::run_blocking;

// NSApplicationActivateIgnoringOtherApps = 1 << 1
const ACTIVATE_IGNORING_OTHER_APPS: NSUInteger = 1 << 1;

unsafe fn ns_string(value: id) -> Option<String> {
    if value == nil {
        return None;
    }
    let utf8 = NSString::UTF8String(value);
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Frontmost application and activation through `NSWorkspace`.
#[derive(Debug, Default)]
pub struct WorkspaceForegroundApp;

impl WorkspaceForegroundApp {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ForegroundAppPort for WorkspaceForegroundApp {
    async fn frontmost(&self) -> Result<Option<TargetApp>, CapabilityError> {
        run_blocking(|| {
            Ok(autoreleasepool(|| unsafe {
                let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
                let app: id = msg_send![workspace, frontmostApplication];
                if app == nil {
                    return None;
                }

                let bundle_id: id = msg_send![app, bundleIdentifier];
                let name: id = msg_send![app, localizedName];
                let pid: i32 = msg_send![app, processIdentifier];
                Some(TargetApp::new(ns_string(bundle_id), ns_string(name), pid))
            }))
        })
        .await
    }

    async fn activate(&self, app: &TargetApp) -> Result<(), CapabilityError> {
        let pid = app.pid;
        let activated = run_blocking(move || {
            Ok(autoreleasepool(|| unsafe {
                let running: id = msg_send![
                    class!(NSRunningApplication),
                    runningApplicationWithProcessIdentifier: pid
                ];
                if running == nil {
                    return None;
                }
                let activated: BOOL = msg_send![running, activateWithOptions: ACTIVATE_IGNORING_OTHER_APPS];
                Some(activated != NO)
            }))
        })
        .await?;

        match activated {
            Some(true) => {
                debug!(pid, "Activated application");
                Ok(())
            }
            Some(false) => Err(CapabilityError::Other(anyhow::anyhow!(
                "application {pid} refused activation"
            ))),
            None => Err(CapabilityError::Other(anyhow::anyhow!(
                "application {pid} is no longer running"
            ))),
        }
    }
}
