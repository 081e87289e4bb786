//! Events and lifecycle states of a notification handle.

use std::fmt;

use crate::error::HostError;

/// Event delivered to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyEvent {
    /// The visible lifecycle ended, optionally because of a native failure
    Close(Option<HostError>),
    /// The user acknowledged the notification
    Seen,
    /// The configured timeout elapsed before the notification was seen
    Timeout,
    /// The native notification failed
    Error(HostError),
}

impl NotifyEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            NotifyEvent::Close(_) => EventKind::Close,
            NotifyEvent::Seen => EventKind::Seen,
            NotifyEvent::Timeout => EventKind::Timeout,
            NotifyEvent::Error(_) => EventKind::Error,
        }
    }

    /// Error carried by `Error` and by `Close` after a failure
    pub fn error(&self) -> Option<&HostError> {
        match self {
            NotifyEvent::Close(err) => err.as_ref(),
            NotifyEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Event name used for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Close,
    Seen,
    Timeout,
    Error,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Close => "close",
            EventKind::Seen => "seen",
            EventKind::Timeout => "timeout",
            EventKind::Error => "error",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a notification handle
///
/// ```text
/// Constructed -> Initializing -> Rendered -> Seen | TimedOut | Errored -> Closed
///                             \-> Closed
/// any state -> Destroyed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyState {
    Constructed,
    Initializing,
    Rendered,
    Seen,
    TimedOut,
    Errored,
    Closed,
    Destroyed,
}

impl NotifyState {
    /// No further events can be emitted from this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, NotifyState::Closed | NotifyState::Destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        assert_eq!(NotifyEvent::Close(None).kind().to_string(), "close");
        assert_eq!(NotifyEvent::Seen.kind().as_str(), "seen");
        assert_eq!(NotifyEvent::Timeout.kind().as_str(), "timeout");
        assert_eq!(NotifyEvent::Error(HostError::Unsupported).kind().as_str(), "error");
    }

    #[test]
    fn test_event_error_payload() {
        let err = HostError::native("gone");
        assert_eq!(NotifyEvent::Close(Some(err.clone())).error(), Some(&err));
        assert_eq!(NotifyEvent::Error(err.clone()).error(), Some(&err));
        assert!(NotifyEvent::Close(None).error().is_none());
        assert!(NotifyEvent::Seen.error().is_none());
    }

    #[test]
    fn test_terminal_states() {
        assert!(NotifyState::Closed.is_terminal());
        assert!(NotifyState::Destroyed.is_terminal());
        assert!(!NotifyState::Rendered.is_terminal());
        assert!(!NotifyState::Seen.is_terminal());
    }
}
