//! Wi-Fi hotspot configuration validation and event notification core.
//!
//! Validates soft-AP configuration requests (SSID, pre-shared key,
//! security type, band and channel) before they reach the radio, converts
//! scan frequencies to regulatory channel numbers, evaluates scan policy,
//! and delivers state-change events to a bounded set of typed listeners.
//!
//! Radio control and IPC transport live elsewhere; this crate only
//! prepares their inputs and fans out their notifications.

pub mod events;
pub mod hotspot;
pub mod scan;
pub mod spectrum;
pub mod station;
pub mod util;

// Re-export commonly used items
pub use events::{EventBroadcast, EventRegistry, EventRegistryError, WifiEvent, WifiEventListener};
pub use hotspot::{
    corrected_band_channel, validate_against, ApState, HotspotConfig, HotspotConfigError,
    SecurityType, StationInfo,
};
pub use scan::{is_scan_anytime_allowed, ScanControlInfo, ScanState};
pub use spectrum::{frequencies_to_channels, Band, ChannelsTable};
pub use station::{ConnectionState, OperateResState, WifiLinkedInfo};
