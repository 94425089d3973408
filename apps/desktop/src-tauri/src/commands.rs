//! Tauri commands exposed to the page.

use tauri::State;

use crate::state::DesktopState;

/// Receives one console line forwarded by the page-side bridge.
#[tauri::command]
pub fn console_log(message: String, state: State<'_, DesktopState>) {
    state.sink.log(&message);
}
