//! Utilities

pub mod constants;

use crate::utils::constants::{
    CONNECT_BUTTON_ID, NETWORK_INFO_ID, NETWORK_INFO_PREFIX, WALLET_ADDRESS_ID, WALLET_INFO_ID,
};
use shared::chain::Network;

/// Element ids the connect page binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub connect_button_id: String,
    pub wallet_address_id: String,
    pub wallet_info_id: String,
    pub network_info_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            connect_button_id: CONNECT_BUTTON_ID.to_string(),
            wallet_address_id: WALLET_ADDRESS_ID.to_string(),
            wallet_info_id: WALLET_INFO_ID.to_string(),
            network_info_id: NETWORK_INFO_ID.to_string(),
        }
    }
}

/// Text written into the network element, e.g. `Detected Network: Polygon Mainnet`.
pub fn network_info_text(network: Network) -> String {
    format!("{}{}", NETWORK_INFO_PREFIX, network.label())
}
