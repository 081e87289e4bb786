//! Scriptable host for handle tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::provider::{NativeEvents, NativeNotification, NotificationHost, Permission};
use crate::error::HostError;
use crate::notify::NotifyOptions;

#[derive(Default)]
struct Counters {
    shows: AtomicUsize,
    closes: AtomicUsize,
    focuses: AtomicUsize,
    requests: AtomicUsize,
}

/// Host whose answers are fixed up front and whose calls are counted
pub(crate) struct MockHost {
    supported: bool,
    permission: Permission,
    request_result: Result<Permission, HostError>,
    request_delay: Option<Duration>,
    show_error: Option<HostError>,
    close_error: Option<HostError>,
    counters: Arc<Counters>,
    events: Mutex<Option<NativeEvents>>,
    shown: Mutex<Option<(String, NotifyOptions)>>,
}

impl MockHost {
    pub(crate) fn granted() -> Self {
        Self {
            supported: true,
            permission: Permission::Granted,
            request_result: Ok(Permission::Granted),
            request_delay: None,
            show_error: None,
            close_error: None,
            counters: Arc::new(Counters::default()),
            events: Mutex::new(None),
            shown: Mutex::new(None),
        }
    }

    pub(crate) fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::granted()
        }
    }

    pub(crate) fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }

    pub(crate) fn with_request_result(mut self, result: Result<Permission, HostError>) -> Self {
        self.request_result = result;
        self
    }

    /// Makes `request_permission` take this long before answering
    pub(crate) fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = Some(delay);
        self
    }

    pub(crate) fn with_show_error(mut self, error: HostError) -> Self {
        self.show_error = Some(error);
        self
    }

    pub(crate) fn with_close_error(mut self, error: HostError) -> Self {
        self.close_error = Some(error);
        self
    }

    pub(crate) fn shows(&self) -> usize {
        self.counters.shows.load(Ordering::SeqCst)
    }

    pub(crate) fn closes(&self) -> usize {
        self.counters.closes.load(Ordering::SeqCst)
    }

    pub(crate) fn focuses(&self) -> usize {
        self.counters.focuses.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> usize {
        self.counters.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn shown(&self) -> Option<(String, NotifyOptions)> {
        self.shown.lock().unwrap().clone()
    }

    /// Simulates the user clicking the displayed notification
    pub(crate) fn click(&self) {
        if let Some(events) = self.events.lock().unwrap().as_ref() {
            events.click();
        }
    }

    /// Simulates the platform expiring or dismissing the notification
    pub(crate) fn dismiss(&self) {
        if let Some(events) = self.events.lock().unwrap().as_ref() {
            events.dismissed();
        }
    }

    /// Simulates the platform reporting a failure
    pub(crate) fn fail(&self, error: HostError) {
        if let Some(events) = self.events.lock().unwrap().as_ref() {
            events.error(error);
        }
    }
}

struct MockNotification {
    counters: Arc<Counters>,
    close_error: Option<HostError>,
}

impl NativeNotification for MockNotification {
    fn close(&self) -> Result<(), HostError> {
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
        match &self.close_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NotificationHost for MockHost {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn permission(&self) -> Permission {
        self.permission
    }

    async fn request_permission(&self) -> Result<Permission, HostError> {
        self.counters.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.request_delay {
            tokio::time::sleep(delay).await;
        }
        self.request_result.clone()
    }

    async fn show(
        &self,
        title: &str,
        options: &NotifyOptions,
        events: NativeEvents,
    ) -> Result<Box<dyn NativeNotification>, HostError> {
        self.counters.shows.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.show_error {
            return Err(err.clone());
        }

        *self.shown.lock().unwrap() = Some((title.to_string(), options.clone()));
        *self.events.lock().unwrap() = Some(events);

        Ok(Box::new(MockNotification {
            counters: self.counters.clone(),
            close_error: self.close_error.clone(),
        }))
    }

    fn focus(&self) {
        self.counters.focuses.fetch_add(1, Ordering::SeqCst);
    }
}
