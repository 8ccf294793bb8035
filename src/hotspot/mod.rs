//! Hotspot (soft-AP) configuration and validation.
//!
//! This module provides:
//! - [`HotspotConfig`]: soft-AP configuration with intrinsic validation
//! - [`validate_against`]: checks against the authoritative center configuration
//! - [`corrected_band_channel`]: apply-time fallback to the safe default

mod config;
mod validate;

pub use config::{
    ApState, HotspotConfig, HotspotConfigError, SecurityType, StationInfo, AP_CHANNEL_DEFAULT,
    DEFAULT_MAX_CONN, MAX_PSK_LEN, MAX_SSID_LEN, MIN_PSK_LEN, MIN_SSID_LEN, RANDOM_SUFFIX_LEN,
};
pub use validate::{corrected_band_channel, validate_against};
