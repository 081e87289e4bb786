//! Native Notify
//!
//! A handle over one platform notification: permission and rendering are
//! driven in the background, and `seen`, `timeout`, `error` and `close`
//! events are delivered to listeners.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod logger;
pub mod notify;

pub use error::{AppError, AppResult, HostError};
pub use host::{HeadlessHost, NotificationHost, Permission, callback_permission};
pub use notify::{EventKind, Notify, NotifyBuilder, NotifyEvent, NotifyOptions, NotifyState};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
