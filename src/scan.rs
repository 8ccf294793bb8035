//! Scan policy evaluation.
//!
//! Decides whether "scan anytime" is currently permitted from a snapshot
//! of the scan-control table owned by the scan scheduler. Only the
//! wildcard scene is consulted; per-scene rules are the scheduler's
//! business.

use std::collections::HashMap;

/// Scan trigger classes that forbid rules can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Scans requested by a foreground application.
    AppForeground,
    /// Scans requested by a background application.
    AppBackground,
    /// Periodic scans driven by the system timer.
    SystemTimer,
    /// Preferred-network-offload scans.
    Pno,
    /// Unrestricted "scan anytime" requests.
    Anytime,
}

/// Scenes a forbid rule can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanScene {
    /// Station is connected.
    Connected,
    /// Station is disconnected.
    Disconnected,
    /// Station is associating or obtaining an address.
    Connecting,
    /// Wildcard: applies in every scene.
    All,
}

/// A single forbidden-scan rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanForbidRule {
    /// The scan class this rule forbids.
    pub scan_mode: ScanMode,
}

/// Snapshot of the scan-control table.
///
/// Owned and mutated by the scan scheduler; read-only here.
#[derive(Debug, Clone, Default)]
pub struct ScanControlInfo {
    /// Forbid rules grouped by the scene they apply to.
    pub forbid_rules: HashMap<ScanScene, Vec<ScanForbidRule>>,
}

/// Whether scan results are available to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Scanning failed or results are stale.
    Unavailable,
    /// Fresh scan results are available.
    Available,
}

/// Check whether "scan anytime" is currently allowed.
///
/// Conservative: only rules under [`ScanScene::All`] are inspected. Any
/// wildcard rule with [`ScanMode::Anytime`] disables the feature.
pub fn is_scan_anytime_allowed(info: &ScanControlInfo) -> bool {
    match info.forbid_rules.get(&ScanScene::All) {
        Some(rules) => rules.iter().all(|rule| rule.scan_mode != ScanMode::Anytime),
        None => true,
    }
}
