//! # Wallet Provider DTOs
//!
//! Request and response shapes for the EIP-1193 `request({ method })` call exposed by
//! injected wallets. Each supported method is a type implementing [`RpcMethod`], so the
//! caller gets a typed response instead of an untyped JSON value.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chain::{ChainId, Network};

/// EIP-1193 error code: the user rejected the request.
pub const USER_REJECTED_REQUEST: i64 = 4001;
/// EIP-1193 error code: the provider does not support the method.
pub const UNSUPPORTED_METHOD: i64 = 4200;

/// Provider methods this crate issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderMethod {
    #[serde(rename = "eth_requestAccounts")]
    RequestAccounts,
    #[serde(rename = "eth_chainId")]
    ChainId,
}

impl ProviderMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMethod::RequestAccounts => "eth_requestAccounts",
            ProviderMethod::ChainId => "eth_chainId",
        }
    }
}

impl fmt::Display for ProviderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument object passed to `provider.request(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: ProviderMethod,
}

/// A provider method with a typed response.
pub trait RpcMethod {
    const METHOD: ProviderMethod;
    type Response: DeserializeOwned + 'static;

    fn arguments(&self) -> RequestArguments {
        RequestArguments {
            method: Self::METHOD,
        }
    }
}

/// `eth_requestAccounts`: prompt for account access, returns the ordered account list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestAccounts;

impl RpcMethod for RequestAccounts {
    const METHOD: ProviderMethod = ProviderMethod::RequestAccounts;
    type Response = Vec<String>;
}

/// `eth_chainId`: the chain the wallet is currently connected to.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetChainId;

impl RpcMethod for GetChainId {
    const METHOD: ProviderMethod = ProviderMethod::ChainId;
    type Response = ChainId;
}

/// Error object a provider rejects with (EIP-1193 `ProviderRpcError`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ProviderRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_REQUEST
    }
}

impl fmt::Display for ProviderRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for ProviderRpcError {}

/// Outcome of a successful connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResult {
    /// Accounts in the order the wallet returned them; the first is the active one.
    pub accounts: Vec<String>,
    pub chain_id: ChainId,
}

impl ConnectionResult {
    pub fn active_account(&self) -> Option<&str> {
        self.accounts.first().map(String::as_str)
    }

    pub fn network(&self) -> Network {
        Network::from_chain_id(&self.chain_id)
    }
}
