//! Station-side connection state model.
//!
//! The connection state machine reports fine-grained operation results
//! internally; event consumers see the smaller public [`ConnectionState`].
//! The mapping between the two lives here, together with the link snapshot
//! passed through connection-change events.

/// Fine-grained result of a station connection operation.
///
/// Produced by the internal connection state machine; not handed to event
/// consumers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperateResState {
    /// Connection attempt started.
    Connecting,
    /// Associated and authenticated with the access point.
    ApConnected,
    /// Probing for a captive portal.
    CheckPortal,
    /// Network validated and enabled for traffic.
    NetworkEnabled,
    /// Network failed validation.
    NetworkDisabled,
    /// Disconnect in progress.
    Disconnecting,
    /// Disconnect request failed.
    DisconnectFailed,
    /// Fully disconnected.
    Disconnected,
    /// Authentication failed on a wrong password.
    PasswordWrong,
    /// Connection attempt timed out.
    ConnectingTimeout,
    /// Address assignment in progress.
    ObtainingIp,
    /// Address assignment failed.
    ObtainingIpFailed,
    /// 802.11 association in progress.
    Associating,
    /// 802.11 association completed.
    Associated,
}

/// Public connection state reported through events.
///
/// Members mirror [`OperateResState`], plus [`Unknown`](Self::Unknown) for
/// anything the mapper does not classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    Connecting,
    ApConnected,
    CheckPortal,
    NetworkEnabled,
    NetworkDisabled,
    Disconnecting,
    DisconnectFailed,
    Disconnected,
    PasswordWrong,
    ConnectingTimeout,
    ObtainingIp,
    ObtainingIpFailed,
    Associating,
    Associated,
    /// State not otherwise classified.
    #[default]
    Unknown,
}

impl From<OperateResState> for ConnectionState {
    fn from(state: OperateResState) -> Self {
        match state {
            OperateResState::Connecting => Self::Connecting,
            OperateResState::ApConnected => Self::ApConnected,
            OperateResState::CheckPortal => Self::CheckPortal,
            OperateResState::NetworkEnabled => Self::NetworkEnabled,
            OperateResState::NetworkDisabled => Self::NetworkDisabled,
            OperateResState::Disconnecting => Self::Disconnecting,
            OperateResState::DisconnectFailed => Self::DisconnectFailed,
            OperateResState::Disconnected => Self::Disconnected,
            OperateResState::PasswordWrong => Self::PasswordWrong,
            OperateResState::ConnectingTimeout => Self::ConnectingTimeout,
            OperateResState::ObtainingIp => Self::ObtainingIp,
            OperateResState::ObtainingIpFailed => Self::ObtainingIpFailed,
            OperateResState::Associating => Self::Associating,
            OperateResState::Associated => Self::Associated,
        }
    }
}

/// Snapshot of the current link, passed through connection-change events.
///
/// Fields are carried for event consumers; this crate does not interpret
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiLinkedInfo {
    /// Saved-network id, -1 when the link matches no saved network.
    pub network_id: i32,
    /// Network name.
    pub ssid: String,
    /// Access point MAC address.
    pub bssid: String,
    /// Signal strength in dBm.
    pub rssi: i32,
    /// Link center frequency in MHz.
    pub frequency: u32,
    /// Negotiated link speed in Mbps.
    pub link_speed: u32,
    /// Local interface MAC address.
    pub mac_address: String,
    /// Coarse connection state of the link.
    pub conn_state: ConnectionState,
}

impl Default for WifiLinkedInfo {
    fn default() -> Self {
        Self {
            network_id: -1,
            ssid: String::new(),
            bssid: String::new(),
            rssi: 0,
            frequency: 0,
            link_speed: 0,
            mac_address: String::new(),
            conn_state: ConnectionState::Unknown,
        }
    }
}
