mod commands;
mod state;
mod webview;

use std::sync::Arc;

use tauri::webview::PageLoadEvent;
use tracing_subscriber::EnvFilter;

use svelteshell_bridge::{BridgeInstaller, LoadState, StdoutSink};

use state::DesktopState;
use webview::MainThreadDispatcher;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,svelteshell=debug")),
        )
        .init();

    let dispatcher = Arc::new(MainThreadDispatcher::new());
    let installer = Arc::new(BridgeInstaller::new(dispatcher.clone()));
    let installer_page = Arc::clone(&installer);
    let installer_exit = Arc::clone(&installer);

    let app = tauri::Builder::default()
        .manage(DesktopState {
            sink: Arc::new(StdoutSink),
        })
        .setup(move |app| {
            dispatcher.attach(app.handle().clone());
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "svelteshell starting");
            Ok(())
        })
        .on_page_load(move |webview, payload| {
            let state = if payload.event() == PageLoadEvent::Finished {
                LoadState::Succeeded
            } else {
                LoadState::Loading
            };
            tracing::info!(window = webview.label(), url = %payload.url(), ?state, "page load");

            // The installer spawns its retry task itself; hop into the
            // runtime since this hook runs on an engine thread.
            let installer = Arc::clone(&installer_page);
            tauri::async_runtime::spawn(async move {
                installer.on_load_state(state);
            });
        })
        .invoke_handler(tauri::generate_handler![commands::console_log])
        .build(tauri::generate_context!())
        .expect("error building tauri application");

    app.run(move |_handle, event| {
        if let tauri::RunEvent::Exit = event {
            tracing::info!("shutting down, cancelling bridge install");
            installer_exit.shutdown();
        }
    });
}
