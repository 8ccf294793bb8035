//! Queue-backed event broadcast service.
//!
//! Owns the listener registry and a worker thread that drains posted
//! events, so event sources never run listener code on their own threads.
//!
//! # Example
//!
//! ```
//! use wifimgr_core::events::{EventBroadcast, WifiEvent};
//! use wifimgr_core::hotspot::ApState;
//!
//! let mut broadcast = EventBroadcast::new();
//! broadcast.post(WifiEvent::HotspotStateChanged {
//!     state: ApState::Started,
//! });
//! broadcast.shutdown();
//! ```

use super::listener::WifiEvent;
use super::registry::EventRegistry;
use log::{info, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Messages understood by the broadcast worker.
enum Command {
    /// Deliver an event to the registry.
    Broadcast(WifiEvent),
    /// Stop after handling everything already queued.
    Shutdown,
}

/// Background event dispatcher with its own listener registry.
///
/// Dropping the service shuts the worker down after draining the queue.
pub struct EventBroadcast {
    registry: Arc<EventRegistry>,
    sender: Sender<Command>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EventBroadcast {
    /// Start the broadcast worker with an empty registry.
    pub fn new() -> Self {
        let registry = Arc::new(EventRegistry::new());
        let (sender, receiver) = mpsc::channel();
        let worker_registry = registry.clone();
        let worker = thread::spawn(move || Self::run(receiver, worker_registry));
        Self {
            registry,
            sender,
            worker: Some(worker),
        }
    }

    /// The registry listeners are registered with.
    pub fn registry(&self) -> &Arc<EventRegistry> {
        &self.registry
    }

    /// Queue an event for delivery; never blocks on listeners.
    ///
    /// Events posted after [`shutdown`](Self::shutdown) are dropped with a
    /// warning.
    pub fn post(&self, event: WifiEvent) {
        let kind = event.kind();
        if self.sender.send(Command::Broadcast(event)).is_err() {
            warn!("{} event dropped: broadcast worker is not running", kind);
        }
    }

    /// Stop the worker after it drains everything already queued.
    ///
    /// Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.sender.send(Command::Shutdown);
            let _ = worker.join();
        }
    }

    fn run(receiver: Receiver<Command>, registry: Arc<EventRegistry>) {
        info!("event broadcast worker started");
        while let Ok(command) = receiver.recv() {
            match command {
                Command::Broadcast(event) => registry.notify(&event),
                Command::Shutdown => break,
            }
        }
        info!("event broadcast worker stopped");
    }
}

impl Default for EventBroadcast {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventBroadcast {
    fn drop(&mut self) {
        self.shutdown();
    }
}
