//! Console bridge between an embedded web page and the host process.
//!
//! After a page load succeeds, an install task repeatedly binds a host-side
//! logger into the page's global scope and patches the page's console so
//! every logged line is forwarded to a [`LogSink`]. Attempts run on a fixed
//! schedule and never report failure to a caller; the page keeps its own
//! logging even when forwarding breaks.

mod error;
mod installer;
mod page;
mod script;
mod sink;

pub use error::InstallError;
pub use installer::{
    BridgeInstaller, DEFAULT_LOGGER_MEMBER, INSTALL_ATTEMPTS, InstallerConfig, RETRY_DELAY,
};
pub use page::{LoadState, PageDispatcher, PageJob, PageScripting};
pub use script::{INSTALL_NOTICE, WRAPPED_METHODS, console_patch};
pub use sink::{FORWARD_PREFIX, LogSink, StdoutSink, forwarded_line};
