//! Freedesktop notification daemon host.
//!
//! Renders through `notify-rust`. The daemon has no permission model and a
//! command line process has no window to focus, so those parts of the host
//! contract are trivial here.
//!
//! Clicks and daemon-side closes arrive as D-Bus signals. A detached thread
//! per notification listens for them by notification id, which leaves the
//! `NotificationHandle` free for `close`.

use std::sync::Mutex;
use std::thread;

use async_trait::async_trait;
use notify_rust::{ActionResponse, Hint, Notification, NotificationHandle, Timeout};

use super::provider::{NativeEvents, NativeNotification, NotificationHost, Permission};
use crate::error::HostError;
use crate::notify::NotifyOptions;

/// Host backed by the session notification daemon
#[derive(Debug, Clone)]
pub struct DesktopHost {
    app_name: String,
}

impl DesktopHost {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Builds the daemon request from title and options
    fn build_notification(&self, title: &str, options: &NotifyOptions) -> Notification {
        let mut notification = Notification::new();
        notification
            .summary(title)
            .appname(&self.app_name)
            .hint(Hint::SuppressSound(options.silent));

        if let Some(body) = options.get_body() {
            notification.body(body);
        }

        if let Some(icon) = options.get_icon() {
            notification.icon(icon);
        }

        // The daemon expires the popup on its own as well, in case this
        // process exits before the handle closes it.
        if let Some(timeout) = options.timeout {
            let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            notification.timeout(Timeout::Milliseconds(millis));
        }

        notification
    }
}

/// Displayed daemon notification
///
/// `NotificationHandle::close` consumes the handle, so it is taken out of
/// the slot on the first close and later closes report an error.
struct DesktopNotification {
    handle: Mutex<Option<NotificationHandle>>,
}

impl NativeNotification for DesktopNotification {
    fn close(&self) -> Result<(), HostError> {
        let handle = self
            .handle
            .lock()
            .map_err(|_| HostError::close("notification handle poisoned"))?
            .take()
            .ok_or_else(|| HostError::close("notification already closed"))?;

        // CloseNotification is a blocking D-Bus round trip
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn_blocking(move || handle.close());
            }
            Err(_) => handle.close(),
        }
        Ok(())
    }
}

/// Action key the daemon reports for a click on the notification body
const DEFAULT_ACTION: &str = "default";

/// Forwards one daemon response to the owning handle
fn report_action(response: &ActionResponse<'_>, events: &NativeEvents) {
    match response {
        ActionResponse::Custom(action) if *action == DEFAULT_ACTION => events.click(),
        ActionResponse::Custom(action) => {
            tracing::debug!(action = *action, "Ignoring notification action");
        }
        ActionResponse::Closed(reason) => {
            tracing::debug!(?reason, "Notification closed by the daemon");
            events.dismissed();
        }
    }
}

/// Blocks until the daemon reports an action or a close for `id`
fn watch_actions(id: u32, events: NativeEvents) {
    let result = notify_rust::handle_action(id, |response: &ActionResponse<'_>| {
        report_action(response, &events)
    });

    if let Err(err) = result {
        events.error(HostError::native(err.to_string()));
    }
}

#[async_trait]
impl NotificationHost for DesktopHost {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        Permission::Granted
    }

    async fn show(
        &self,
        title: &str,
        options: &NotifyOptions,
        events: NativeEvents,
    ) -> Result<Box<dyn NativeNotification>, HostError> {
        let notification = self.build_notification(title, options);

        // The daemon call is a blocking D-Bus round trip
        let handle = tokio::task::spawn_blocking(move || notification.show())
            .await
            .map_err(|e| HostError::render(e.to_string()))?
            .map_err(|e| HostError::render(e.to_string()))?;

        let id = handle.id();
        tracing::debug!(id, "Desktop notification shown");

        // Detached: the listener may outlive the runtime and ends with the
        // notification's close signal
        if let Err(err) = thread::Builder::new()
            .name(format!("notify-actions-{id}"))
            .spawn(move || watch_actions(id, events))
        {
            tracing::warn!(error = %err, "Failed to listen for notification clicks");
        }

        Ok(Box::new(DesktopNotification {
            handle: Mutex::new(Some(handle)),
        }))
    }

    fn focus(&self) {
        tracing::debug!("Desktop host has no window to focus");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NativeEvent;
    use notify_rust::CloseReason;
    use std::time::Duration;

    #[test]
    fn test_build_notification_maps_options() {
        let host = DesktopHost::new("native-notify");
        let options = NotifyOptions::new()
            .timeout(Duration::from_millis(2500))
            .body("Tests passed");

        let notification = host.build_notification("Build finished", &options);
        assert_eq!(notification.summary, "Build finished");
        assert_eq!(notification.body, "Tests passed");
        assert_eq!(notification.appname, "native-notify");
        assert_eq!(notification.timeout, Timeout::Milliseconds(2500));
    }

    #[test]
    fn test_default_action_reports_click() {
        let (events, mut rx) = NativeEvents::channel();
        report_action(&ActionResponse::Custom("default"), &events);
        assert_eq!(rx.try_recv(), Ok(NativeEvent::Click));
    }

    #[test]
    fn test_daemon_close_reports_dismissed() {
        let (events, mut rx) = NativeEvents::channel();
        report_action(&ActionResponse::Closed(CloseReason::Expired), &events);
        report_action(&ActionResponse::Closed(CloseReason::Dismissed), &events);
        assert_eq!(rx.try_recv(), Ok(NativeEvent::Dismissed));
        assert_eq!(rx.try_recv(), Ok(NativeEvent::Dismissed));
    }

    #[test]
    fn test_other_actions_are_ignored() {
        let (events, mut rx) = NativeEvents::channel();
        report_action(&ActionResponse::Custom("snooze"), &events);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_build_notification_without_timeout_uses_daemon_default() {
        let host = DesktopHost::new("native-notify");
        let notification = host.build_notification("Hello", &NotifyOptions::new());
        assert_eq!(notification.timeout, Timeout::Default);
    }
}
