//! Event-driven handle over a single native notification.
//!
//! A [`Notify`] asks its host for permission, renders the notification (or
//! degrades to an immediate close when the host has no capability), and then
//! reports what happened through events:
//! - `seen`: the user clicked the notification; followed by `close`
//! - `timeout`: the configured timeout elapsed first; followed by `close`
//! - `error`: the host reported a failure; followed by `close` carrying it
//! - `close`: the visible lifecycle is over
//!
//! Failures never come back as `Err` from the public API; they only travel
//! through `error` and `close`.

mod emitter;
mod event;
mod handle;
mod options;


pub use emitter::{EventEmitter, Listener};
pub use event::{EventKind, NotifyEvent, NotifyState};
pub use handle::{Notify, NotifyBuilder};
pub use options::NotifyOptions;
