//! Validation against the authoritative center configuration.
//!
//! A proposed configuration is accepted only as a whole: the first failed
//! check rejects it and nothing is applied. The apply-time
//! [`corrected_band_channel`] never fails and instead falls back to the
//! safe 2.4 GHz default.

use super::config::{HotspotConfig, HotspotConfigError, AP_CHANNEL_DEFAULT};
use crate::spectrum::{Band, ChannelsTable};
use log::warn;

/// Validate a proposed configuration against the center configuration and
/// the permitted band/channel tables.
///
/// Checks run in a fixed order and stop at the first violation: intrinsic
/// SSID and security checks, then band membership when the band differs
/// from the center's, then channel legality when the channel differs from
/// the center's. Fields equal to the center's are not re-checked.
pub fn validate_against(
    cfg: &HotspotConfig,
    center: &HotspotConfig,
    allowed_bands: &[Band],
    channels: &ChannelsTable,
) -> Result<(), HotspotConfigError> {
    cfg.validate()?;

    if cfg.band() != center.band() && !allowed_bands.contains(&cfg.band()) {
        return Err(HotspotConfigError::BandNotAllowed(cfg.band()));
    }

    if cfg.channel() != center.channel() && !channel_is_legal(cfg, channels) {
        return Err(HotspotConfigError::ChannelNotAllowed {
            channel: cfg.channel(),
            band: cfg.band(),
        });
    }

    Ok(())
}

/// Return `cfg` with an illegal band/channel pair replaced by the safe
/// default (2.4 GHz, channel 6).
///
/// Never fails. The caller decides whether to keep the returned value.
#[must_use]
pub fn corrected_band_channel(cfg: &HotspotConfig, channels: &ChannelsTable) -> HotspotConfig {
    if channel_is_legal(cfg, channels) {
        return cfg.clone();
    }
    warn!(
        "channel {} not legal on {}, using the 2.4 GHz default channel {}",
        cfg.channel(),
        cfg.band(),
        AP_CHANNEL_DEFAULT
    );
    let mut corrected = cfg.clone();
    corrected.set_band(Band::Band2G);
    corrected.set_channel(AP_CHANNEL_DEFAULT);
    corrected
}

fn channel_is_legal(cfg: &HotspotConfig, channels: &ChannelsTable) -> bool {
    channels
        .get(&cfg.band())
        .map_or(false, |list| list.contains(&cfg.channel()))
}
