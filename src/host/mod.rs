//! Host collaborators for native notifications.
//!
//! The notification handle never talks to a platform API directly. Everything
//! it needs from the environment (capability detection, permission state,
//! rendering and window focus) goes through the `NotificationHost` trait, so
//! supported and unsupported environments are just different hosts.

mod headless;
mod permission;
mod provider;

#[cfg(all(feature = "desktop", target_os = "linux"))]
mod desktop;

#[cfg(test)]
pub(crate) mod mock;

pub use headless::HeadlessHost;
pub use permission::{PermissionCallback, callback_permission};
pub use provider::{NativeEvent, NativeEvents, NativeNotification, NotificationHost, Permission};

#[cfg(all(feature = "desktop", target_os = "linux"))]
pub use desktop::DesktopHost;

use std::sync::Arc;

use crate::config::settings::{HostBackend, HostSettings};

/// Builds the host selected by configuration.
///
/// The desktop backend falls back to the headless host on platforms where
/// it is not compiled in.
pub fn host_from_settings(settings: &HostSettings) -> Arc<dyn NotificationHost> {
    match settings.backend {
        HostBackend::Headless => Arc::new(HeadlessHost::new()),
        HostBackend::Desktop => desktop_host(settings),
    }
}

#[cfg(all(feature = "desktop", target_os = "linux"))]
fn desktop_host(settings: &HostSettings) -> Arc<dyn NotificationHost> {
    Arc::new(DesktopHost::new(settings.app_name.clone()))
}

#[cfg(not(all(feature = "desktop", target_os = "linux")))]
fn desktop_host(_settings: &HostSettings) -> Arc<dyn NotificationHost> {
    tracing::warn!("Desktop notifications are not available in this build, using headless host");
    Arc::new(HeadlessHost::new())
}
