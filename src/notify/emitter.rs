//! Listener registry embedded in every notification handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::event::{EventKind, NotifyEvent};

/// Listener callback
pub type Listener = Arc<dyn Fn(&NotifyEvent) + Send + Sync>;

struct Entry {
    kind: EventKind,
    once: bool,
    listener: Listener,
}

/// Event emitter owned by a handle
///
/// Listeners run in registration order. Emission works on a snapshot taken
/// under the lock, so listeners may register, remove or emit without
/// deadlocking; changes apply from the next emission on.
#[derive(Default)]
pub struct EventEmitter {
    entries: Mutex<Vec<Entry>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn on<F>(&self, kind: EventKind, listener: F)
    where
        F: Fn(&NotifyEvent) + Send + Sync + 'static,
    {
        self.push(kind, false, Arc::new(listener));
    }

    /// Registers a listener that is removed before its first call
    pub fn once<F>(&self, kind: EventKind, listener: F)
    where
        F: Fn(&NotifyEvent) + Send + Sync + 'static,
    {
        self.push(kind, true, Arc::new(listener));
    }

    fn push(&self, kind: EventKind, once: bool, listener: Listener) {
        self.entries().push(Entry {
            kind,
            once,
            listener,
        });
    }

    pub fn remove_all_listeners(&self) {
        self.entries().clear();
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.entries().iter().filter(|e| e.kind == kind).count()
    }

    /// Calls every listener for the event's kind
    ///
    /// Returns whether any listener was called.
    pub fn emit(&self, event: &NotifyEvent) -> bool {
        let kind = event.kind();
        let listeners: Vec<Listener> = {
            let mut entries = self.entries();
            let matching = entries
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| e.listener.clone())
                .collect();
            entries.retain(|e| !(e.once && e.kind == kind));
            matching
        };

        for listener in &listeners {
            listener(event);
        }

        !listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_listeners_run_in_registration_order() {
        let emitter = EventEmitter::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            emitter.on(EventKind::Seen, move |_| order.lock().unwrap().push(i));
        }

        assert!(emitter.emit(&NotifyEvent::Seen));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_once_listener_fires_once() {
        let emitter = EventEmitter::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        emitter.once(EventKind::Timeout, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        emitter.emit(&NotifyEvent::Timeout);
        emitter.emit(&NotifyEvent::Timeout);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(emitter.listener_count(EventKind::Timeout), 0);
    }

    #[test]
    fn test_emit_only_reaches_matching_kind() {
        let emitter = EventEmitter::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        emitter.on(EventKind::Close, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!emitter.emit(&NotifyEvent::Seen));
        assert!(emitter.emit(&NotifyEvent::Close(None)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_all_listeners() {
        let emitter = EventEmitter::new();
        emitter.on(EventKind::Close, |_| {});
        emitter.once(EventKind::Error, |_| {});
        emitter.remove_all_listeners();

        assert_eq!(emitter.listener_count(EventKind::Close), 0);
        assert_eq!(emitter.listener_count(EventKind::Error), 0);
        assert!(!emitter.emit(&NotifyEvent::Close(None)));
    }

    #[test]
    fn test_listener_may_reenter_emitter() {
        let emitter = Arc::new(EventEmitter::new());
        let inner = emitter.clone();
        emitter.on(EventKind::Seen, move |_| inner.remove_all_listeners());

        assert!(emitter.emit(&NotifyEvent::Seen));
        assert_eq!(emitter.listener_count(EventKind::Seen), 0);
    }
}
