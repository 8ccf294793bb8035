//! Typed Wi-Fi event listeners.
//!
//! Integrators implement [`WifiEventListener`] and override only the
//! methods they care about; every method has a no-op default body, so an
//! unoverridden method means no interest in that event kind.

use crate::hotspot::{ApState, StationInfo};
use crate::scan::ScanState;
use crate::station::{ConnectionState, WifiLinkedInfo};

/// Receiver for Wi-Fi state-change events.
///
/// Implementations must be `Send + Sync`: events are delivered from the
/// broadcast worker thread while registration happens on callers' threads.
pub trait WifiEventListener: Send + Sync {
    /// Station connection state changed.
    fn on_connection_changed(&self, _state: ConnectionState, _info: &WifiLinkedInfo) {}

    /// Scan result availability changed; `result_count` is the number of
    /// fresh results.
    fn on_scan_state_changed(&self, _state: ScanState, _result_count: usize) {}

    /// Hotspot lifecycle state changed.
    fn on_hotspot_state_changed(&self, _state: ApState) {}

    /// A station joined the hotspot.
    fn on_station_joined(&self, _info: &StationInfo) {}

    /// A station left the hotspot.
    fn on_station_left(&self, _info: &StationInfo) {}
}

/// A Wi-Fi state-change event with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    /// Station connection state changed.
    ConnectionChanged {
        state: ConnectionState,
        info: WifiLinkedInfo,
    },
    /// Scan result availability changed.
    ScanStateChanged {
        state: ScanState,
        result_count: usize,
    },
    /// Hotspot lifecycle state changed.
    HotspotStateChanged { state: ApState },
    /// A station joined the hotspot.
    StationJoined { info: StationInfo },
    /// A station left the hotspot.
    StationLeft { info: StationInfo },
}

impl WifiEvent {
    /// Short label for the event kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConnectionChanged { .. } => "connection-changed",
            Self::ScanStateChanged { .. } => "scan-state-changed",
            Self::HotspotStateChanged { .. } => "hotspot-state-changed",
            Self::StationJoined { .. } => "station-joined",
            Self::StationLeft { .. } => "station-left",
        }
    }

    /// Deliver this event to one listener.
    pub(crate) fn deliver(&self, listener: &dyn WifiEventListener) {
        match self {
            Self::ConnectionChanged { state, info } => listener.on_connection_changed(*state, info),
            Self::ScanStateChanged {
                state,
                result_count,
            } => listener.on_scan_state_changed(*state, *result_count),
            Self::HotspotStateChanged { state } => listener.on_hotspot_state_changed(*state),
            Self::StationJoined { info } => listener.on_station_joined(info),
            Self::StationLeft { info } => listener.on_station_left(info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl WifiEventListener for Silent {}

    #[test]
    fn test_default_methods_are_noops() {
        let listener = Silent;
        WifiEvent::ConnectionChanged {
            state: ConnectionState::ApConnected,
            info: WifiLinkedInfo::default(),
        }
        .deliver(&listener);
        WifiEvent::ScanStateChanged {
            state: ScanState::Available,
            result_count: 3,
        }
        .deliver(&listener);
        WifiEvent::HotspotStateChanged {
            state: ApState::Started,
        }
        .deliver(&listener);
        WifiEvent::StationJoined {
            info: StationInfo::default(),
        }
        .deliver(&listener);
        WifiEvent::StationLeft {
            info: StationInfo::default(),
        }
        .deliver(&listener);
    }

    #[test]
    fn test_kind_labels() {
        let event = WifiEvent::HotspotStateChanged {
            state: ApState::Idle,
        };
        assert_eq!(event.kind(), "hotspot-state-changed");
        let event = WifiEvent::StationLeft {
            info: StationInfo::default(),
        };
        assert_eq!(event.kind(), "station-left");
    }
}
