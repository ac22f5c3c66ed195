//! Wallet state management

use shared::chain::{ChainId, Network};
use shared::dto::provider::ConnectionResult;
use shared::utils::truncate_address;
use std::cell::RefCell;
use std::rc::Rc;

/// Connection state of the page. `Connected` is terminal: there is no disconnect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected {
        address: String,
        chain_id: ChainId,
        network: Network,
    },
}

impl ConnectionState {
    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address, .. } => Some(address),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn network(&self) -> Option<Network> {
        match self {
            ConnectionState::Connected { network, .. } => Some(*network),
            ConnectionState::Disconnected => None,
        }
    }

    /// Short description for log lines, e.g. `0x5aAe...eAed on Polygon Mainnet`.
    pub fn summary(&self) -> Option<String> {
        let address = self.address()?;
        let network = self.network()?;
        Some(format!("{} on {}", truncate_address(address), network))
    }
}

/// Page-wide wallet context, shared between click handlers.
#[derive(Clone, Debug, Default)]
pub struct WalletContext {
    state: Rc<RefCell<ConnectionState>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    /// Record a successful connection. Results without an account are ignored.
    pub fn set_connected(&self, result: &ConnectionResult) {
        let Some(address) = result.active_account() else {
            return;
        };
        *self.state.borrow_mut() = ConnectionState::Connected {
            address: address.to_string(),
            chain_id: result.chain_id.clone(),
            network: result.network(),
        };
    }
}
