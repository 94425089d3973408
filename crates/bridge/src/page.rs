//! Seams to the embedded browser engine.
//!
//! The engine owns a single thread on which all scripting calls must run.
//! [`PageDispatcher`] marshals work onto that thread; [`PageScripting`] is
//! the synchronous surface a job sees once it runs there.

use crate::error::InstallError;

/// Load lifecycle of the document inside the embedded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has begun.
    NotStarted,
    /// A load is in progress.
    Loading,
    /// The document finished loading.
    Succeeded,
    /// The load failed.
    Failed,
}

/// Synchronous scripting surface of the page, valid only on the engine
/// thread.
pub trait PageScripting {
    /// Binds the host logger under `member` on the page's global object.
    fn expose_logger(&self, member: &str) -> Result<(), InstallError>;

    /// Runs a script in the page context.
    fn eval(&self, script: &str) -> Result<(), InstallError>;
}

/// A unit of work to run on the engine thread.
pub type PageJob = Box<dyn FnOnce(&dyn PageScripting) + Send + 'static>;

/// Schedules jobs onto the engine-owner thread.
///
/// Scheduling is fire-and-forget: a successful return means the job was
/// queued, not that it ran.
pub trait PageDispatcher: Send + Sync {
    fn dispatch(&self, job: PageJob) -> Result<(), InstallError>;
}
