//! Wireless frequency and band arithmetic.
//!
//! Converts scan-result frequencies (MHz) into regulatory channel numbers
//! and classifies frequencies into the 2.4 GHz and 5 GHz bands. All
//! functions are pure; frequencies with no channel mapping are dropped with
//! a warning rather than treated as errors.
//!
//! # Example
//!
//! ```
//! use wifimgr_core::spectrum::{frequencies_to_channels, Band};
//!
//! let channels = frequencies_to_channels(&[2412, 2484, 5180]);
//! assert_eq!(channels, vec![1, 14, 36]);
//! assert_eq!(Band::from_frequency(2437), Some(Band::Band2G));
//! ```

use log::warn;
use std::collections::HashMap;
use std::fmt;

/// First 2.4 GHz center frequency on the regular channel grid.
pub const FREQ_2G_MIN: u32 = 2412;

/// Last 2.4 GHz center frequency on the regular channel grid.
pub const FREQ_2G_MAX: u32 = 2472;

/// First mapped 5 GHz center frequency.
pub const FREQ_5G_MIN: u32 = 5170;

/// Last mapped 5 GHz center frequency.
pub const FREQ_5G_MAX: u32 = 5825;

/// Center frequency of channel 14, offset from the rest of the 2.4 GHz grid.
pub const CHANNEL_14_FREQ: u32 = 2484;

/// Channel number for the 2484 MHz special case.
pub const CHANNEL_14: u32 = 14;

/// Spacing between adjacent center frequencies in MHz.
const CHANNEL_STEP: u32 = 5;

/// Channel number mapped to `FREQ_2G_MIN`.
const CHANNEL_2G_MIN: u32 = 1;

/// Channel number mapped to `FREQ_5G_MIN`.
const CHANNEL_5G_MIN: u32 = 34;

/// Wireless frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// The 2.4 GHz ISM band.
    Band2G,
    /// The 5 GHz band.
    Band5G,
}

impl Band {
    /// Classify a frequency in MHz into its band.
    ///
    /// Returns `None` for frequencies outside both bands.
    pub fn from_frequency(freq: u32) -> Option<Self> {
        if is_valid_24ghz(freq) {
            Some(Self::Band2G)
        } else if is_valid_5ghz(freq) {
            Some(Self::Band5G)
        } else {
            None
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Band2G => write!(f, "2.4 GHz"),
            Self::Band5G => write!(f, "5 GHz"),
        }
    }
}

/// Legal channel numbers per band for the current regulatory domain.
///
/// Supplied by the configuration authority; this crate only reads it.
pub type ChannelsTable = HashMap<Band, Vec<u32>>;

/// Map a single center frequency in MHz to its channel number.
///
/// Returns `None` for frequencies outside the mapped ranges, including the
/// gap between the end of the 2.4 GHz grid and channel 14.
pub fn frequency_to_channel(freq: u32) -> Option<u32> {
    if (FREQ_2G_MIN..=FREQ_2G_MAX).contains(&freq) {
        Some((freq - FREQ_2G_MIN) / CHANNEL_STEP + CHANNEL_2G_MIN)
    } else if freq == CHANNEL_14_FREQ {
        Some(CHANNEL_14)
    } else if (FREQ_5G_MIN..=FREQ_5G_MAX).contains(&freq) {
        Some((freq - FREQ_5G_MIN) / CHANNEL_STEP + CHANNEL_5G_MIN)
    } else {
        None
    }
}

/// Map scan-result frequencies to channel numbers, preserving order.
///
/// Frequencies with no channel mapping are logged and dropped, so the
/// output may be shorter than the input.
pub fn frequencies_to_channels(freqs: &[u32]) -> Vec<u32> {
    let mut channels = Vec::with_capacity(freqs.len());
    for &freq in freqs {
        match frequency_to_channel(freq) {
            Some(channel) => channels.push(channel),
            None => warn!("Invalid frequency: {} MHz", freq),
        }
    }
    channels
}

/// Check whether a frequency lies strictly inside the 2.4 GHz band.
pub fn is_valid_24ghz(freq: u32) -> bool {
    freq > 2400 && freq < 2500
}

/// Check whether a frequency lies strictly inside the 5 GHz band.
pub fn is_valid_5ghz(freq: u32) -> bool {
    freq > 4900 && freq < 5900
}
