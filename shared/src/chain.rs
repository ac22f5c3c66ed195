//! # Chains and Networks
//!
//! A [`ChainId`] is the hex-prefixed string an EIP-1193 provider returns from
//! `eth_chainId`. [`Network`] is the fixed lookup from chain id to the label shown
//! to the user.
//!
//! Lookup is by exact string: `"0x1"` is Ethereum Mainnet, `"0x01"` is not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chain id returned by `eth_chainId` for Ethereum Mainnet.
pub const ETHEREUM_MAINNET_CHAIN_ID: &str = "0x1";

/// Chain id returned by `eth_chainId` for Polygon Mainnet.
pub const POLYGON_MAINNET_CHAIN_ID: &str = "0x89";

/// Errors produced while parsing a chain id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainIdError {
    #[error("chain id is empty")]
    Empty,

    #[error("chain id {0:?} is missing the 0x prefix")]
    MissingPrefix(String),

    #[error("chain id {0:?} has no hex digits")]
    NoDigits(String),

    #[error("chain id {0:?} contains non-hex characters")]
    InvalidHex(String),
}

/// Hex-prefixed chain identifier (e.g. `"0x1"`).
///
/// The original string is kept verbatim so that lookups compare exactly what the
/// wallet returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChainId {
    type Error = ChainIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ChainIdError::Empty);
        }

        let digits = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            Some(digits) => digits,
            None => return Err(ChainIdError::MissingPrefix(value)),
        };

        if digits.is_empty() {
            return Err(ChainIdError::NoDigits(value));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChainIdError::InvalidHex(value));
        }

        Ok(Self(value))
    }
}

impl FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<ChainId> for String {
    fn from(chain_id: ChainId) -> Self {
        chain_id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Networks the page knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    PolygonMainnet,
    EthereumMainnet,
    Other,
}

impl Network {
    /// Look up the network for a validated chain id.
    pub fn from_chain_id(chain_id: &ChainId) -> Self {
        Self::from_raw(chain_id.as_str())
    }

    /// Look up the network for a raw chain id string. Unknown ids map to [`Network::Other`].
    pub fn from_raw(chain_id: &str) -> Self {
        match chain_id {
            POLYGON_MAINNET_CHAIN_ID => Network::PolygonMainnet,
            ETHEREUM_MAINNET_CHAIN_ID => Network::EthereumMainnet,
            _ => Network::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::PolygonMainnet => "Polygon Mainnet",
            Network::EthereumMainnet => "Ethereum Mainnet",
            Network::Other => "Other Network",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable label for a raw chain id string.
pub fn network_label(chain_id: &str) -> &'static str {
    Network::from_raw(chain_id).label()
}
