//! Wi-Fi event notification.
//!
//! This module provides:
//! - [`WifiEventListener`]: trait with a no-op default method per event kind
//! - [`EventRegistry`]: bounded listener table with isolated dispatch
//! - [`EventBroadcast`]: worker thread that drains a queue of posted events

mod broadcast;
mod listener;
mod registry;

pub use broadcast::EventBroadcast;
pub use listener::{WifiEvent, WifiEventListener};
pub use registry::{EventRegistry, EventRegistryError, MAX_EVENT_LISTENERS};
