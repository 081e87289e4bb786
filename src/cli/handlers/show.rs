//! Show command handler
//!
//! Shows one notification and blocks until its handle closes.

use std::sync::{Arc, Mutex};

use crate::cli::parser::ShowArgs;
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult, HostError};
use crate::host::{NotificationHost, host_from_settings};
use crate::notify::{EventKind, Notify, NotifyEvent, NotifyOptions};

/// How a shown notification ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowOutcome {
    /// Clicked by the user
    Seen,
    /// Closed by its timeout
    TimedOut,
    /// Closed without being seen: unsupported host or no permission
    Dismissed,
    /// The host reported an error
    Failed(HostError),
    /// Interrupted before the notification closed
    Interrupted,
}

/// Handler for the show command
pub struct ShowCommandHandler {
    config: Settings,
    host: Arc<dyn NotificationHost>,
}

impl ShowCommandHandler {
    /// Create a handler using the host selected by configuration
    pub fn new(config: Settings) -> Self {
        let host = host_from_settings(&config.host);
        Self::with_host(config, host)
    }

    pub fn with_host(config: Settings, host: Arc<dyn NotificationHost>) -> Self {
        Self { config, host }
    }

    /// Options from configured defaults plus the pass-through fields given on the command line
    pub fn build_options(&self, args: &ShowArgs) -> NotifyOptions {
        let mut options = NotifyOptions::from_defaults(&self.config.notification);

        if let Some(body) = &args.body {
            options = options.body(body.clone());
        }
        if let Some(icon) = &args.icon {
            options = options.icon(icon.clone());
        }
        if let Some(tag) = &args.tag {
            options = options.tag(tag.clone());
        }

        options
    }

    /// Show the notification and wait for it to close
    ///
    /// Ctrl-C destroys the notification and reports `Interrupted`.
    pub async fn execute(&self, args: &ShowArgs) -> AppResult<ShowOutcome> {
        let outcome = self
            .run(args, async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await;

        match &outcome {
            ShowOutcome::Seen => println!("✓ Notification seen"),
            ShowOutcome::TimedOut => println!("✓ Notification timed out"),
            ShowOutcome::Dismissed => println!("✓ Notification closed without being shown"),
            ShowOutcome::Interrupted => println!("✗ Interrupted, notification removed"),
            ShowOutcome::Failed(err) => {
                return Err(AppError::Notification {
                    message: err.to_string(),
                });
            }
        }

        Ok(outcome)
    }

    /// Drives one notification until it closes or `interrupt` resolves
    pub(crate) async fn run<F>(&self, args: &ShowArgs, interrupt: F) -> ShowOutcome
    where
        F: std::future::Future<Output = ()>,
    {
        let outcome = Arc::new(Mutex::new(ShowOutcome::Dismissed));

        let seen = outcome.clone();
        let timed_out = outcome.clone();
        let closed = outcome.clone();
        let notify = Notify::builder(args.title.clone())
            .options(self.build_options(args))
            .on(EventKind::Seen, move |_| {
                tracing::info!("Notification seen");
                set(&seen, ShowOutcome::Seen);
            })
            .on(EventKind::Timeout, move |_| {
                tracing::info!("Notification timed out");
                set(&timed_out, ShowOutcome::TimedOut);
            })
            .on(EventKind::Error, |event| {
                if let Some(err) = event.error() {
                    tracing::error!(error = %err, "Notification failed");
                }
            })
            .on(EventKind::Close, move |event: &NotifyEvent| {
                tracing::debug!("Notification closed");
                if let Some(err) = event.error() {
                    set(&closed, ShowOutcome::Failed(err.clone()));
                }
            })
            .spawn(self.host.clone());

        tokio::select! {
            _ = notify.closed() => {}
            _ = interrupt => {
                notify.destroy();
                set(&outcome, ShowOutcome::Interrupted);
            }
        }

        outcome
            .lock()
            .map(|o| o.clone())
            .unwrap_or(ShowOutcome::Dismissed)
    }
}

fn set(slot: &Mutex<ShowOutcome>, value: ShowOutcome) {
    if let Ok(mut outcome) = slot.lock() {
        *outcome = value;
    }
}
