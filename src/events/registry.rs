//! Bounded listener registry.
//!
//! Holds up to [`MAX_EVENT_LISTENERS`] listener handles behind one lock.
//! Registration performs no de-duplication: the same handle registered
//! twice occupies two slots and is notified twice.

use super::listener::{WifiEvent, WifiEventListener};
use log::error;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

/// Capacity of the listener table.
pub const MAX_EVENT_LISTENERS: usize = 10;

/// Bounded, thread-safe set of event listeners.
///
/// Constructed by the service that performs dispatch, typically through
/// [`EventBroadcast`](super::EventBroadcast); standalone use works for
/// synchronous delivery.
pub struct EventRegistry {
    listeners: Mutex<Vec<Arc<dyn WifiEventListener>>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Register a listener handle.
    ///
    /// Fails once the table holds [`MAX_EVENT_LISTENERS`] entries. The
    /// same handle may be registered more than once and then occupies one
    /// slot per registration.
    pub fn register(&self, listener: Arc<dyn WifiEventListener>) -> Result<(), EventRegistryError> {
        let mut listeners = self.listeners.lock().unwrap();
        if listeners.len() >= MAX_EVENT_LISTENERS {
            return Err(EventRegistryError::Full {
                max: MAX_EVENT_LISTENERS,
            });
        }
        listeners.push(listener);
        Ok(())
    }

    /// Remove the first slot holding the same allocation as `listener`.
    pub fn unregister(
        &self,
        listener: &Arc<dyn WifiEventListener>,
    ) -> Result<(), EventRegistryError> {
        let mut listeners = self.listeners.lock().unwrap();
        match listeners.iter().position(|slot| Arc::ptr_eq(slot, listener)) {
            Some(index) => {
                listeners.remove(index);
                Ok(())
            }
            None => Err(EventRegistryError::NotFound),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every registered listener in registration order.
    ///
    /// The listener list is snapshotted under the lock and invoked outside
    /// it, so listeners may register or unregister from their callbacks. A
    /// panicking listener is logged and skipped; later listeners still
    /// run.
    pub fn notify(&self, event: &WifiEvent) {
        let snapshot: Vec<Arc<dyn WifiEventListener>> = self.listeners.lock().unwrap().clone();
        for (slot, listener) in snapshot.iter().enumerate() {
            let outcome = catch_unwind(AssertUnwindSafe(|| event.deliver(listener.as_ref())));
            if let Err(payload) = outcome {
                error!(
                    "listener in slot {} panicked during {} dispatch: {}",
                    slot,
                    event.kind(),
                    panic_message(&payload)
                );
            }
        }
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Errors from listener registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRegistryError {
    /// The listener table is at capacity.
    Full { max: usize },
    /// No slot holds the given handle.
    NotFound,
}

impl fmt::Display for EventRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full { max } => write!(f, "listener table full (max {})", max),
            Self::NotFound => write!(f, "listener not registered"),
        }
    }
}

impl std::error::Error for EventRegistryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspot::{ApState, StationInfo};
    use crate::scan::ScanState;
    use crate::station::{ConnectionState, WifiLinkedInfo};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingListener {
        connection_events: AtomicUsize,
        scan_events: AtomicUsize,
        hotspot_events: AtomicUsize,
        join_events: AtomicUsize,
        leave_events: AtomicUsize,
    }

    impl WifiEventListener for CountingListener {
        fn on_connection_changed(&self, _state: ConnectionState, _info: &WifiLinkedInfo) {
            self.connection_events.fetch_add(1, Ordering::SeqCst);
        }

        fn on_scan_state_changed(&self, _state: ScanState, _result_count: usize) {
            self.scan_events.fetch_add(1, Ordering::SeqCst);
        }

        fn on_hotspot_state_changed(&self, _state: ApState) {
            self.hotspot_events.fetch_add(1, Ordering::SeqCst);
        }

        fn on_station_joined(&self, _info: &StationInfo) {
            self.join_events.fetch_add(1, Ordering::SeqCst);
        }

        fn on_station_left(&self, _info: &StationInfo) {
            self.leave_events.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn connection_event() -> WifiEvent {
        WifiEvent::ConnectionChanged {
            state: ConnectionState::ApConnected,
            info: WifiLinkedInfo::default(),
        }
    }

    // ==================== Registration Tests ====================

    #[test]
    fn test_register_up_to_capacity() {
        let registry = EventRegistry::new();
        for _ in 0..MAX_EVENT_LISTENERS {
            registry
                .register(Arc::new(CountingListener::default()))
                .unwrap();
        }
        assert_eq!(registry.len(), MAX_EVENT_LISTENERS);

        let overflow = registry.register(Arc::new(CountingListener::default()));
        assert_eq!(
            overflow,
            Err(EventRegistryError::Full {
                max: MAX_EVENT_LISTENERS
            })
        );
    }

    #[test]
    fn test_unregister_frees_a_slot() {
        let registry = EventRegistry::new();
        let first: Arc<dyn WifiEventListener> = Arc::new(CountingListener::default());
        registry.register(first.clone()).unwrap();
        for _ in 1..MAX_EVENT_LISTENERS {
            registry
                .register(Arc::new(CountingListener::default()))
                .unwrap();
        }
        assert!(matches!(
            registry.register(Arc::new(CountingListener::default())),
            Err(EventRegistryError::Full { .. })
        ));

        registry.unregister(&first).unwrap();
        registry
            .register(Arc::new(CountingListener::default()))
            .unwrap();
        assert_eq!(registry.len(), MAX_EVENT_LISTENERS);
    }

    #[test]
    fn test_unregister_unknown_listener() {
        let registry = EventRegistry::new();
        let never_registered: Arc<dyn WifiEventListener> = Arc::new(CountingListener::default());
        assert_eq!(
            registry.unregister(&never_registered),
            Err(EventRegistryError::NotFound)
        );
    }

    #[test]
    fn test_duplicate_registration_uses_two_slots() {
        let registry = EventRegistry::new();
        let listener = Arc::new(CountingListener::default());
        let handle: Arc<dyn WifiEventListener> = listener.clone();
        registry.register(handle.clone()).unwrap();
        registry.register(handle.clone()).unwrap();
        assert_eq!(registry.len(), 2);

        registry.notify(&connection_event());
        assert_eq!(listener.connection_events.load(Ordering::SeqCst), 2);

        // One unregister removes one slot only
        registry.unregister(&handle).unwrap();
        assert_eq!(registry.len(), 1);
    }

    // ==================== Dispatch Tests ====================

    #[test]
    fn test_notify_routes_by_event_kind() {
        let registry = EventRegistry::new();
        let listener = Arc::new(CountingListener::default());
        registry.register(listener.clone()).unwrap();

        registry.notify(&connection_event());
        registry.notify(&WifiEvent::ScanStateChanged {
            state: ScanState::Available,
            result_count: 7,
        });
        registry.notify(&WifiEvent::HotspotStateChanged {
            state: ApState::Started,
        });
        registry.notify(&WifiEvent::StationJoined {
            info: StationInfo::default(),
        });
        registry.notify(&WifiEvent::StationLeft {
            info: StationInfo::default(),
        });

        assert_eq!(listener.connection_events.load(Ordering::SeqCst), 1);
        assert_eq!(listener.scan_events.load(Ordering::SeqCst), 1);
        assert_eq!(listener.hotspot_events.load(Ordering::SeqCst), 1);
        assert_eq!(listener.join_events.load(Ordering::SeqCst), 1);
        assert_eq!(listener.leave_events.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_registration_order_preserved() {
        struct OrderListener {
            id: usize,
            order: Arc<Mutex<Vec<usize>>>,
        }

        impl WifiEventListener for OrderListener {
            fn on_hotspot_state_changed(&self, _state: ApState) {
                self.order.lock().unwrap().push(self.id);
            }
        }

        let registry = EventRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..5 {
            registry
                .register(Arc::new(OrderListener {
                    id,
                    order: order.clone(),
                }))
                .unwrap();
        }
        registry.notify(&WifiEvent::HotspotStateChanged {
            state: ApState::Starting,
        });
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_panicking_listener_is_isolated() {
        struct PanickingListener;

        impl WifiEventListener for PanickingListener {
            fn on_hotspot_state_changed(&self, _state: ApState) {
                panic!("listener bug");
            }
        }

        let registry = EventRegistry::new();
        let before = Arc::new(CountingListener::default());
        let after = Arc::new(CountingListener::default());
        registry.register(before.clone()).unwrap();
        registry.register(Arc::new(PanickingListener)).unwrap();
        registry.register(after.clone()).unwrap();

        registry.notify(&WifiEvent::HotspotStateChanged {
            state: ApState::Closed,
        });

        assert_eq!(before.hotspot_events.load(Ordering::SeqCst), 1);
        assert_eq!(after.hotspot_events.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_uninterested_listener_skipped_others_invoked() {
        struct ScanOnly {
            scans: AtomicUsize,
        }

        impl WifiEventListener for ScanOnly {
            fn on_scan_state_changed(&self, _state: ScanState, _result_count: usize) {
                self.scans.fetch_add(1, Ordering::SeqCst);
            }
        }

        let registry = EventRegistry::new();
        let scan_only = Arc::new(ScanOnly {
            scans: AtomicUsize::new(0),
        });
        let all_events = Arc::new(CountingListener::default());
        registry.register(scan_only.clone()).unwrap();
        registry.register(all_events.clone()).unwrap();

        registry.notify(&connection_event());

        assert_eq!(scan_only.scans.load(Ordering::SeqCst), 0);
        assert_eq!(all_events.connection_events.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_registry_notify_is_harmless() {
        let registry = EventRegistry::new();
        assert!(registry.is_empty());
        registry.notify(&connection_event());
    }
}
