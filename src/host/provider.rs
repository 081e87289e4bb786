//! Core host trait and types.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::HostError;
use crate::notify::NotifyOptions;

/// Host-tracked user consent for showing notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    /// The user has not decided yet
    #[default]
    Default,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Granted => "granted",
            Permission::Denied => "denied",
            Permission::Default => "default",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something a displayed notification reported back to its handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEvent {
    Click,
    /// Removed from screen by the platform (expired or dismissed)
    Dismissed,
    Error(HostError),
}

/// Sink the host uses to report clicks and errors for one notification.
///
/// Cloneable so the host can move copies into whatever callback machinery
/// the platform offers. Reports sent after the handle has finished are
/// dropped silently.
#[derive(Debug, Clone)]
pub struct NativeEvents {
    tx: mpsc::UnboundedSender<NativeEvent>,
}

impl NativeEvents {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<NativeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// The user clicked the notification
    pub fn click(&self) {
        let _ = self.tx.send(NativeEvent::Click);
    }

    /// The platform removed the notification without a click
    pub fn dismissed(&self) {
        let _ = self.tx.send(NativeEvent::Dismissed);
    }

    /// The notification failed after it was shown
    pub fn error(&self, error: HostError) {
        let _ = self.tx.send(NativeEvent::Error(error));
    }
}

/// A notification currently displayed by the host
pub trait NativeNotification: Send + Sync {
    /// Removes the notification from screen
    fn close(&self) -> Result<(), HostError>;
}

/// Trait for notification hosts (desktop daemon, browser bridge, headless...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All hosts must be Send + Sync because handles drive them from spawned tasks.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct TrayHost;
///
/// #[async_trait]
/// impl NotificationHost for TrayHost {
///     fn name(&self) -> &'static str {
///         "tray"
///     }
///
///     fn is_supported(&self) -> bool {
///         true
///     }
///
///     fn permission(&self) -> Permission {
///         Permission::Granted
///     }
///
///     async fn show(
///         &self,
///         title: &str,
///         options: &NotifyOptions,
///         events: NativeEvents,
///     ) -> Result<Box<dyn NativeNotification>, HostError> {
///         // Implementation here
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationHost: Send + Sync {
    /// Returns the host name for logging/debugging
    fn name(&self) -> &'static str;

    /// Whether native notifications are available at all
    fn is_supported(&self) -> bool;

    /// Current permission state
    fn permission(&self) -> Permission;

    /// Asks the user for permission
    ///
    /// Hosts that never prompt can keep the default, which reports the
    /// current state unchanged.
    async fn request_permission(&self) -> Result<Permission, HostError> {
        Ok(self.permission())
    }

    /// Displays a notification
    ///
    /// # Arguments
    /// * `title` - Notification title
    /// * `options` - Options including the opaque pass-through fields
    /// * `events` - Sink for click and error reports of this notification
    async fn show(
        &self,
        title: &str,
        options: &NotifyOptions,
        events: NativeEvents,
    ) -> Result<Box<dyn NativeNotification>, HostError>;

    /// Brings the application window to the foreground
    fn focus(&self) {}
}
