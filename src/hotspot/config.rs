//! Hotspot configuration data structures.
//!
//! Soft-AP configuration with intrinsic validation of SSID, pre-shared key
//! and security type. Checks against the authoritative center
//! configuration live in [`validate_against`](crate::hotspot::validate_against).
//!
//! # Example
//!
//! ```
//! use wifimgr_core::hotspot::{HotspotConfig, SecurityType};
//! use wifimgr_core::spectrum::Band;
//!
//! let config = HotspotConfig::new(
//!     "MyHotspot",
//!     "password123",
//!     SecurityType::Wpa2Psk,
//!     Band::Band2G,
//!     6,
//! )
//! .unwrap();
//! assert!(config.validate().is_ok());
//! ```

use crate::spectrum::Band;
use crate::util::random_alphanumeric;
use std::fmt;
use zeroize::Zeroize;

/// Minimum SSID length in bytes per IEEE 802.11.
pub const MIN_SSID_LEN: usize = 1;

/// Maximum SSID length in bytes per IEEE 802.11.
pub const MAX_SSID_LEN: usize = 32;

/// Minimum WPA/WPA2 pre-shared key length in bytes.
pub const MIN_PSK_LEN: usize = 8;

/// Maximum WPA/WPA2 pre-shared key length in bytes.
pub const MAX_PSK_LEN: usize = 63;

/// Channel used when falling back to the safe 2.4 GHz default.
pub const AP_CHANNEL_DEFAULT: u32 = 6;

/// Length of the random suffix appended to generated SSIDs.
pub const RANDOM_SUFFIX_LEN: usize = 6;

/// Default cap on concurrently associated stations.
pub const DEFAULT_MAX_CONN: u32 = 32;

/// Authentication mode of the hotspot.
///
/// Only [`Open`](Self::Open), [`WpaPsk`](Self::WpaPsk) and
/// [`Wpa2Psk`](Self::Wpa2Psk) pass validation; other modes are declared
/// for completeness but are not accepted for soft-AP use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityType {
    /// No authentication.
    Open,
    /// WPA personal with a pre-shared key.
    WpaPsk,
    /// WPA2 personal with a pre-shared key.
    Wpa2Psk,
    /// WPA3 simultaneous authentication of equals.
    Sae,
}

impl SecurityType {
    /// Short lowercase label used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::WpaPsk => "wpa-psk",
            Self::Wpa2Psk => "wpa2-psk",
            Self::Sae => "sae",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of the soft-AP, as reported through hotspot events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApState {
    /// Not started.
    Idle,
    /// Start requested, bringing the radio up.
    Starting,
    /// Accepting stations.
    Started,
    /// Stop requested, tearing down.
    Closing,
    /// Fully stopped.
    Closed,
}

/// Identity of a station that joined or left the hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationInfo {
    /// Station-reported device name.
    pub device_name: String,
    /// Station MAC address.
    pub bssid: String,
    /// Address assigned to the station.
    pub ip_addr: String,
}

/// Soft-AP configuration.
///
/// Mutated only through setters so the previous pre-shared key can be
/// zeroed when replaced; the key is also zeroed on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotConfig {
    /// Network name (1-32 bytes).
    ssid: String,
    /// Pre-shared key (8-63 bytes, empty for open hotspots).
    preshared_key: String,
    /// Authentication mode.
    security: SecurityType,
    /// Operating band.
    band: Band,
    /// Operating channel within the band.
    channel: u32,
    /// Maximum number of concurrently associated stations.
    max_conn: u32,
}

impl HotspotConfig {
    /// Create a configuration and validate it.
    pub fn new(
        ssid: impl Into<String>,
        preshared_key: impl Into<String>,
        security: SecurityType,
        band: Band,
        channel: u32,
    ) -> Result<Self, HotspotConfigError> {
        let config = Self {
            ssid: ssid.into(),
            preshared_key: preshared_key.into(),
            security,
            band,
            channel,
            max_conn: DEFAULT_MAX_CONN,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a WPA2 configuration with a random SSID suffix and key.
    ///
    /// Used when no stored configuration exists yet.
    pub fn randomized() -> Self {
        Self {
            ssid: format!("HOTSPOT_{}", random_alphanumeric(RANDOM_SUFFIX_LEN)),
            preshared_key: random_alphanumeric(MIN_PSK_LEN),
            security: SecurityType::Wpa2Psk,
            band: Band::Band2G,
            channel: AP_CHANNEL_DEFAULT,
            max_conn: DEFAULT_MAX_CONN,
        }
    }

    /// Network name.
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Pre-shared key.
    pub fn preshared_key(&self) -> &str {
        &self.preshared_key
    }

    /// Authentication mode.
    pub fn security(&self) -> SecurityType {
        self.security
    }

    /// Operating band.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Operating channel.
    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Station cap.
    pub fn max_conn(&self) -> u32 {
        self.max_conn
    }

    /// Replace the network name.
    pub fn set_ssid(&mut self, ssid: impl Into<String>) {
        self.ssid = ssid.into();
    }

    /// Replace the pre-shared key, zeroing the previous one.
    pub fn set_preshared_key(&mut self, key: impl Into<String>) {
        self.preshared_key.zeroize();
        self.preshared_key = key.into();
    }

    /// Replace the authentication mode.
    pub fn set_security(&mut self, security: SecurityType) {
        self.security = security;
    }

    /// Replace the operating band.
    pub fn set_band(&mut self, band: Band) {
        self.band = band;
    }

    /// Replace the operating channel.
    pub fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }

    /// Replace the station cap.
    pub fn set_max_conn(&mut self, max_conn: u32) {
        self.max_conn = max_conn;
    }

    /// Validate SSID, security type and pre-shared key.
    ///
    /// Checks run in a fixed order and stop at the first violation: SSID
    /// length, then security/key coherence.
    pub fn validate(&self) -> Result<(), HotspotConfigError> {
        // Validate SSID
        if self.ssid.len() < MIN_SSID_LEN {
            return Err(HotspotConfigError::SsidEmpty);
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(HotspotConfigError::SsidTooLong {
                len: self.ssid.len(),
                max: MAX_SSID_LEN,
            });
        }

        // Validate security type and pre-shared key coherence
        match self.security {
            SecurityType::Open => {
                if !self.preshared_key.is_empty() {
                    return Err(HotspotConfigError::PskNotEmpty);
                }
            }
            SecurityType::WpaPsk | SecurityType::Wpa2Psk => {
                if self.preshared_key.len() < MIN_PSK_LEN {
                    return Err(HotspotConfigError::PskTooShort {
                        len: self.preshared_key.len(),
                        min: MIN_PSK_LEN,
                    });
                }
                if self.preshared_key.len() > MAX_PSK_LEN {
                    return Err(HotspotConfigError::PskTooLong {
                        len: self.preshared_key.len(),
                        max: MAX_PSK_LEN,
                    });
                }
            }
            other => return Err(HotspotConfigError::UnsupportedSecurity(other)),
        }

        Ok(())
    }

    /// Whether this is an open (unsecured) hotspot.
    pub fn is_open(&self) -> bool {
        self.security == SecurityType::Open
    }
}

impl Default for HotspotConfig {
    /// Open placeholder configuration on the 2.4 GHz default channel.
    fn default() -> Self {
        Self {
            ssid: "HOTSPOT".to_string(),
            preshared_key: String::new(),
            security: SecurityType::Open,
            band: Band::Band2G,
            channel: AP_CHANNEL_DEFAULT,
            max_conn: DEFAULT_MAX_CONN,
        }
    }
}

impl Drop for HotspotConfig {
    fn drop(&mut self) {
        self.preshared_key.zeroize();
    }
}

/// Errors from hotspot configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotspotConfigError {
    /// SSID is empty.
    SsidEmpty,
    /// SSID exceeds maximum length.
    SsidTooLong { len: usize, max: usize },
    /// Open hotspots must not carry a pre-shared key.
    PskNotEmpty,
    /// Pre-shared key is too short.
    PskTooShort { len: usize, min: usize },
    /// Pre-shared key exceeds maximum length.
    PskTooLong { len: usize, max: usize },
    /// Security type is not accepted for soft-AP use.
    UnsupportedSecurity(SecurityType),
    /// Requested band is not permitted by the current configuration.
    BandNotAllowed(Band),
    /// Requested channel is not legal on the requested band.
    ChannelNotAllowed { channel: u32, band: Band },
}

impl fmt::Display for HotspotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SsidEmpty => write!(f, "SSID cannot be empty"),
            Self::SsidTooLong { len, max } => {
                write!(f, "SSID too long: {} bytes (max {})", len, max)
            }
            Self::PskNotEmpty => write!(f, "open hotspot must not set a pre-shared key"),
            Self::PskTooShort { len, min } => {
                write!(f, "pre-shared key too short: {} bytes (min {})", len, min)
            }
            Self::PskTooLong { len, max } => {
                write!(f, "pre-shared key too long: {} bytes (max {})", len, max)
            }
            Self::UnsupportedSecurity(security) => {
                write!(f, "unsupported security type: {}", security)
            }
            Self::BandNotAllowed(band) => write!(f, "band not allowed: {}", band),
            Self::ChannelNotAllowed { channel, band } => {
                write!(f, "channel {} not legal on {}", channel, band)
            }
        }
    }
}

impl std::error::Error for HotspotConfigError {}
