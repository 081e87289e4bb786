//! Notification handle and the task that drives its lifecycle.

use std::future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::Instrument;

use super::emitter::EventEmitter;
use super::event::{EventKind, NotifyEvent, NotifyState};
use super::options::NotifyOptions;
use crate::error::HostError;
use crate::host::{NativeEvent, NativeEvents, NativeNotification, NotificationHost, Permission};

/// Handle over a single native notification
///
/// Construction spawns a driver task on the current Tokio runtime. The
/// driver yields once before doing anything, so listeners registered right
/// after construction, before the caller next awaits, see every event on a
/// current-thread runtime. Use [`Notify::builder`] to register listeners
/// before the driver exists, which holds on any runtime flavor.
///
/// Clones share one notification. Dropping the last clone without calling
/// [`Notify::destroy`] stops the driver and closes the native notification,
/// but emits nothing and leaves listeners attached until the task exits.
/// Listeners that capture a clone of the handle keep it alive, so such
/// handles must be destroyed explicitly.
///
/// ```ignore
/// let notify = Notify::new("Build finished", NotifyOptions::new().timeout(secs(5)), host);
/// notify.on(EventKind::Close, |event| println!("closed: {:?}", event.error()));
/// notify.closed().await;
/// ```
#[derive(Clone)]
pub struct Notify {
    inner: Arc<Inner>,
    /// Stops the driver once every clone is gone
    _stop_on_drop: Arc<DropGuard>,
}

/// Collects listeners before the driver task is spawned
pub struct NotifyBuilder {
    title: String,
    options: NotifyOptions,
    emitter: EventEmitter,
}

impl NotifyBuilder {
    pub fn options(mut self, options: NotifyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn on<F>(self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&NotifyEvent) + Send + Sync + 'static,
    {
        self.emitter.on(kind, listener);
        self
    }

    pub fn once<F>(self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&NotifyEvent) + Send + Sync + 'static,
    {
        self.emitter.once(kind, listener);
        self
    }

    /// Creates the handle and starts its driver
    ///
    /// # Panics
    /// Panics when called outside of a Tokio runtime.
    pub fn spawn(self, host: Arc<dyn NotificationHost>) -> Notify {
        let inner = Arc::new(Inner {
            host,
            core: Mutex::new(Core {
                state: NotifyState::Constructed,
                title: Some(self.title.clone()),
                options: Some(self.options),
                native: None,
            }),
            emitter: self.emitter,
            cancel: CancellationToken::new(),
            closed: CancellationToken::new(),
        });

        let span = tracing::info_span!(
            "notification",
            title = %self.title,
            host = inner.host.name()
        );
        tokio::spawn(inner.clone().run().instrument(span));

        Notify {
            _stop_on_drop: Arc::new(inner.cancel.clone().drop_guard()),
            inner,
        }
    }
}

impl Notify {
    /// Creates a handle and starts its driver
    ///
    /// # Panics
    /// Panics when called outside of a Tokio runtime.
    pub fn new(
        title: impl Into<String>,
        options: NotifyOptions,
        host: Arc<dyn NotificationHost>,
    ) -> Self {
        Self::builder(title).options(options).spawn(host)
    }

    pub fn builder(title: impl Into<String>) -> NotifyBuilder {
        NotifyBuilder {
            title: title.into(),
            options: NotifyOptions::default(),
            emitter: EventEmitter::new(),
        }
    }

    pub fn on<F>(&self, kind: EventKind, listener: F)
    where
        F: Fn(&NotifyEvent) + Send + Sync + 'static,
    {
        self.inner.emitter.on(kind, listener);
    }

    pub fn once<F>(&self, kind: EventKind, listener: F)
    where
        F: Fn(&NotifyEvent) + Send + Sync + 'static,
    {
        self.inner.emitter.once(kind, listener);
    }

    pub fn remove_all_listeners(&self) {
        self.inner.emitter.remove_all_listeners();
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner.emitter.listener_count(kind)
    }

    /// Title, or `None` once destroyed
    pub fn title(&self) -> Option<String> {
        self.inner.core().title.clone()
    }

    /// Options, or `None` once destroyed
    pub fn options(&self) -> Option<NotifyOptions> {
        self.inner.core().options.clone()
    }

    pub fn state(&self) -> NotifyState {
        self.inner.core().state
    }

    pub fn is_destroyed(&self) -> bool {
        self.state() == NotifyState::Destroyed
    }

    /// Whether a native notification is currently held
    pub fn has_native(&self) -> bool {
        self.inner.core().native.is_some()
    }

    /// Resolves once `close` has been emitted or the handle was destroyed
    pub async fn closed(&self) {
        self.inner.closed.cancelled().await;
    }

    /// Tears the handle down
    ///
    /// Closes the native notification if one is live, detaches every
    /// listener, stops the driver and clears title and options. Safe to call
    /// any number of times, before or after the notification closed.
    pub fn destroy(&self) {
        let (was, native) = {
            let mut core = self.inner.core();
            let was = core.state;
            core.state = NotifyState::Destroyed;
            core.title = None;
            core.options = None;
            (was, core.native.take())
        };

        if let Some(native) = native {
            close_quietly(native.as_ref());
        }

        self.inner.emitter.remove_all_listeners();
        self.inner.cancel.cancel();
        self.inner.closed.cancel();

        if was != NotifyState::Destroyed {
            tracing::debug!(previous = ?was, "Notification destroyed");
        }
    }
}

struct Core {
    state: NotifyState,
    title: Option<String>,
    options: Option<NotifyOptions>,
    native: Option<Box<dyn NativeNotification>>,
}

struct Inner {
    host: Arc<dyn NotificationHost>,
    core: Mutex<Core>,
    emitter: EventEmitter,
    /// Cancelled by `destroy` or by dropping every handle
    cancel: CancellationToken,
    /// Cancelled when `close` is emitted or the handle is destroyed
    closed: CancellationToken,
}

impl Inner {
    fn core(&self) -> MutexGuard<'_, Core> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves to `next` unless the handle already reached a final state.
    ///
    /// Returns false when the transition was refused.
    fn advance(&self, next: NotifyState) -> bool {
        let mut core = self.core();
        let allowed = match next {
            NotifyState::Initializing => core.state == NotifyState::Constructed,
            NotifyState::Seen | NotifyState::TimedOut => core.state == NotifyState::Rendered,
            NotifyState::Errored => matches!(
                core.state,
                NotifyState::Initializing | NotifyState::Rendered
            ),
            NotifyState::Closed => !core.state.is_terminal(),
            // Rendered is entered by `render` together with storing the native
            NotifyState::Constructed | NotifyState::Rendered | NotifyState::Destroyed => false,
        };

        if allowed {
            tracing::trace!(from = ?core.state, to = ?next, "State transition");
            core.state = next;
        }
        allowed
    }

    fn snapshot(&self) -> Option<(String, NotifyOptions)> {
        let core = self.core();
        if core.state == NotifyState::Destroyed {
            return None;
        }
        match (&core.title, &core.options) {
            (Some(title), Some(options)) => Some((title.clone(), options.clone())),
            _ => None,
        }
    }

    async fn run(self: Arc<Self>) {
        // Give the caller a chance to attach listeners first
        tokio::task::yield_now().await;

        if !self.advance(NotifyState::Initializing) {
            return;
        }

        let supported = self.host.is_supported();
        if supported {
            match self.host.permission() {
                Permission::Granted => {}
                Permission::Denied => {
                    tracing::debug!("Notification permission denied");
                    self.close(None);
                    return;
                }
                Permission::Default => {
                    let outcome = tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => return,
                        outcome = self.host.request_permission() => outcome,
                    };

                    match outcome {
                        Ok(Permission::Granted) => {}
                        Ok(permission) => {
                            tracing::debug!(%permission, "Notification permission not granted");
                            self.close(None);
                            return;
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Notification permission request failed");
                            self.close(None);
                            return;
                        }
                    }
                }
            }
        }

        let Some((events, timeout)) = self.render(supported).await else {
            return;
        };
        self.wait(events, timeout).await;
    }

    /// Shows the notification, or closes right away without capability.
    ///
    /// Returns the event stream of the shown notification and its timeout.
    async fn render(
        &self,
        supported: bool,
    ) -> Option<(mpsc::UnboundedReceiver<NativeEvent>, Option<Duration>)> {
        // Destroyed before we could render
        let (title, options) = self.snapshot()?;

        if !supported {
            tracing::debug!("Native notifications unsupported, closing without rendering");
            self.close(None);
            return None;
        }

        let (events, rx) = NativeEvents::channel();
        let native = match self.host.show(&title, &options, events).await {
            Ok(native) => native,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to show notification");
                self.fail(err);
                return None;
            }
        };

        {
            let mut core = self.core();
            if core.state == NotifyState::Initializing {
                core.native = Some(native);
                core.state = NotifyState::Rendered;
                tracing::debug!(timeout = ?options.timeout, "Notification rendered");
                return Some((rx, options.timeout));
            }
        }

        // Destroyed while the host was still rendering
        close_quietly(native.as_ref());
        None
    }

    async fn wait(&self, mut events: mpsc::UnboundedReceiver<NativeEvent>, timeout: Option<Duration>) {
        let timer = async move {
            match timeout {
                Some(duration) => tokio::time::sleep(duration).await,
                None => future::pending().await,
            }
        };
        tokio::pin!(timer);

        let mut host_open = true;
        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    // Still held only when the handles were dropped
                    self.release_native();
                    return;
                }
                event = events.recv(), if host_open => match event {
                    Some(NativeEvent::Click) => {
                        // Returning drops the timer, so no timeout follows
                        self.seen();
                        return;
                    }
                    Some(NativeEvent::Dismissed) => {
                        self.dismissed();
                        return;
                    }
                    Some(NativeEvent::Error(err)) => {
                        self.fail(err);
                        return;
                    }
                    None => host_open = false,
                },
                _ = &mut timer => {
                    self.time_out();
                    return;
                }
            }
        }
    }

    fn seen(&self) {
        if !self.advance(NotifyState::Seen) {
            return;
        }
        tracing::debug!("Notification seen");
        self.emitter.emit(&NotifyEvent::Seen);

        if self.close(None) {
            self.host.focus();
        }
    }

    /// The platform already removed the notification, so it is dropped
    /// without closing it again
    fn dismissed(&self) {
        tracing::debug!("Notification dismissed by the host");
        let native = self.core().native.take();
        drop(native);
        self.close(None);
    }

    fn time_out(&self) {
        if !self.advance(NotifyState::TimedOut) {
            return;
        }
        tracing::debug!("Notification timed out");
        self.emitter.emit(&NotifyEvent::Timeout);
        self.release_native();
        self.close(None);
    }

    fn fail(&self, err: HostError) {
        if !self.advance(NotifyState::Errored) {
            return;
        }
        self.emitter.emit(&NotifyEvent::Error(err.clone()));
        self.release_native();
        self.close(Some(err));
    }

    /// Closes and drops the native notification, discarding close errors
    fn release_native(&self) {
        let native = self.core().native.take();
        if let Some(native) = native {
            close_quietly(native.as_ref());
        }
    }

    /// Emits `close` once. Returns false if the handle was already finished.
    fn close(&self, err: Option<HostError>) -> bool {
        if !self.advance(NotifyState::Closed) {
            return false;
        }
        self.emitter.emit(&NotifyEvent::Close(err));
        self.closed.cancel();
        true
    }
}

/// Best-effort cleanup: closing an already closed or unsupported native
/// notification is expected to fail and is never reported.
fn close_quietly(native: &dyn NativeNotification) {
    if let Err(err) = native.close() {
        tracing::debug!(error = %err, "Ignoring failure while closing notification");
    }
}
