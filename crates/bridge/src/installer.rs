//! Bridge installation driven by the page-load lifecycle.
//!
//! Each successful load spawns one background task that repeatedly hands an
//! install job to the engine-thread dispatcher. The loop always runs its
//! full attempt budget; failures are logged and the next attempt proceeds
//! unchanged.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::InstallError;
use crate::page::{LoadState, PageDispatcher, PageJob, PageScripting};
use crate::script;

/// Number of install attempts per page load.
pub const INSTALL_ATTEMPTS: u32 = 10;

/// Delay before each install attempt, including the first.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Global member name under which the host logger is bound.
pub const DEFAULT_LOGGER_MEMBER: &str = "hostLogger";

/// Configuration for the bridge install retry loop.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// How many install attempts to run per page load.
    pub attempts: u32,
    /// Delay before each attempt, including the first.
    pub retry_delay: Duration,
    /// Global member name for the host logger binding.
    pub member: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            attempts: INSTALL_ATTEMPTS,
            retry_delay: RETRY_DELAY,
            member: DEFAULT_LOGGER_MEMBER.to_string(),
        }
    }
}

/// Installs the console bridge after each successful page load.
///
/// The page's own scripts can reassign the console functions after the
/// load reports success, so a single install can be overwritten. The
/// installer retries on a fixed schedule instead and does not track
/// whether an earlier attempt already stuck.
pub struct BridgeInstaller {
    config: InstallerConfig,
    dispatcher: Arc<dyn PageDispatcher>,
    cancel: CancellationToken,
}

impl BridgeInstaller {
    /// Creates an installer with the default attempt budget.
    pub fn new(dispatcher: Arc<dyn PageDispatcher>) -> Self {
        Self::with_config(InstallerConfig::default(), dispatcher)
    }

    /// Creates an installer with a custom configuration.
    pub fn with_config(config: InstallerConfig, dispatcher: Arc<dyn PageDispatcher>) -> Self {
        Self {
            config,
            dispatcher,
            cancel: CancellationToken::new(),
        }
    }

    /// Reacts to a page load transition.
    ///
    /// Only `Succeeded` starts an install task; every other state is
    /// logged and ignored. Must be called from within a Tokio runtime.
    pub fn on_load_state(&self, state: LoadState) {
        match state {
            LoadState::Succeeded => {
                let config = self.config.clone();
                let dispatcher = Arc::clone(&self.dispatcher);
                let cancel = self.cancel.child_token();
                tokio::spawn(async move {
                    install_loop(config, dispatcher, cancel).await;
                });
                tracing::debug!("page load succeeded, bridge install scheduled");
            }
            LoadState::Failed => {
                tracing::warn!("page load failed, console bridge not installed");
            }
            LoadState::NotStarted | LoadState::Loading => {
                tracing::trace!(?state, "page load in progress");
            }
        }
    }

    /// Cancels all outstanding install tasks.
    ///
    /// Terminal: loads reported after shutdown no longer install.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

/// Runs the full attempt budget for one page load.
async fn install_loop(
    config: InstallerConfig,
    dispatcher: Arc<dyn PageDispatcher>,
    cancel: CancellationToken,
) {
    for attempt in 1..=config.attempts {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(attempt, "bridge install cancelled");
                return;
            }
            _ = tokio::time::sleep(config.retry_delay) => {}
        }

        let member = config.member.clone();
        let job: PageJob = Box::new(move |page| match install_once(page, &member) {
            Ok(()) => tracing::debug!(attempt, "console bridge installed"),
            Err(e) => tracing::warn!(attempt, error = %e, "console bridge install failed"),
        });

        // The dispatch is not awaited; queued jobs may still be pending
        // when the next delay starts.
        if let Err(e) = dispatcher.dispatch(job) {
            tracing::warn!(attempt, error = %e, "bridge install dispatch failed");
        }
    }

    tracing::debug!(
        attempts = config.attempts,
        "bridge install attempt budget exhausted"
    );
}

/// One install attempt, executed on the engine thread.
fn install_once(page: &dyn PageScripting, member: &str) -> Result<(), InstallError> {
    page.expose_logger(member)?;
    page.eval(&script::console_patch(member))?;
    Ok(())
}
