//! Engine-thread dispatch and scripting for the main window.

use std::sync::{Mutex, PoisonError};

use tauri::{AppHandle, Manager};

use svelteshell_bridge::{InstallError, PageDispatcher, PageJob, PageScripting};

/// Label of the window hosting the page bundle.
const MAIN_WINDOW: &str = "main";

/// Tauri command invoked by the page-side logger binding.
const LOG_COMMAND: &str = "console_log";

/// Schedules page jobs onto the Tauri main thread.
///
/// The app handle is attached during setup; dispatch fails before that.
pub struct MainThreadDispatcher {
    handle: Mutex<Option<AppHandle>>,
}

impl MainThreadDispatcher {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Attaches the handle of the built Tauri app.
    ///
    /// The slot is written even when its lock is poisoned.
    pub fn attach(&self, handle: AppHandle) {
        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(handle);
    }

    fn handle(&self) -> Result<AppHandle, InstallError> {
        let slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clone()
            .ok_or_else(|| InstallError::Dispatch("app handle not attached".into()))
    }
}

impl PageDispatcher for MainThreadDispatcher {
    fn dispatch(&self, job: PageJob) -> Result<(), InstallError> {
        let handle = self.handle()?;
        let page = WebviewPage {
            handle: handle.clone(),
        };
        handle
            .run_on_main_thread(move || job(&page))
            .map_err(|e| InstallError::Dispatch(e.to_string()))
    }
}

/// Scripting surface of the main window's webview.
struct WebviewPage {
    handle: AppHandle,
}

impl PageScripting for WebviewPage {
    fn expose_logger(&self, member: &str) -> Result<(), InstallError> {
        self.eval(&logger_binding(member))
    }

    fn eval(&self, script: &str) -> Result<(), InstallError> {
        let window = self
            .handle
            .get_webview_window(MAIN_WINDOW)
            .ok_or(InstallError::PageUnavailable)?;
        window
            .eval(script)
            .map_err(|e| InstallError::Script(e.to_string()))
    }
}

/// Builds the script binding the host logger under `member`.
///
/// The bound object's `log` hands the line to the `console_log` command.
/// Both synchronous throws and promise rejections are swallowed so the
/// page never observes a bridge failure.
fn logger_binding(member: &str) -> String {
    let member_js = js_string(member);
    let command_js = js_string(LOG_COMMAND);
    format!(
        r#"window[{member_js}] = {{
  log: function(message) {{
    try {{
      window.__TAURI__.core.invoke({command_js}, {{ message: String(message) }})
        .catch(function() {{}});
    }} catch (e) {{}}
  }}
}};"#
    )
}

/// Embeds a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    #[test]
    fn binding_targets_the_log_command() {
        let script = logger_binding("hostLogger");
        assert!(script.contains("window[\"hostLogger\"]"));
        assert!(script.contains("\"console_log\""));
        assert!(script.contains("String(message)"));
    }

    #[test]
    fn binding_swallows_bridge_failures() {
        let script = logger_binding("hostLogger");
        assert!(script.contains(".catch(function() {})"));
        assert!(script.contains("} catch (e) {}"));
    }

    #[test]
    fn binding_escapes_member_names() {
        let script = logger_binding("odd\"member");
        assert!(script.contains(r#"window["odd\"member"]"#));
    }

    #[test]
    fn handle_lookup_survives_lock_poisoning() {
        let dispatcher = Arc::new(MainThreadDispatcher::new());

        let poisoner = Arc::clone(&dispatcher);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.handle.lock().unwrap();
            panic!("poison the handle slot");
        })
        .join();

        let err = dispatcher.handle().unwrap_err();
        assert_eq!(
            err.to_string(),
            "engine dispatch failed: app handle not attached"
        );
    }
}
