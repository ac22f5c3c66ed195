//! Injected Wallet Provider via wasm-bindgen
//!
//! Wallet extensions (MetaMask, Coinbase Wallet, Brave Wallet, ...) inject an EIP-1193
//! provider as `window.ethereum`. This module binds its `request({ method })` call and
//! exposes it through the [`WalletProvider`] trait so the connection flow can run against
//! any implementation.

use async_trait::async_trait;
use js_sys::Reflect;
use shared::dto::provider::{ProviderRpcError, RpcMethod};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::ProviderError;
use crate::utils::constants::PROVIDER_GLOBAL;

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Anything that can answer typed EIP-1193 requests.
#[async_trait(?Send)]
pub trait WalletProvider {
    async fn request<M: RpcMethod>(&self, method: M) -> Result<M::Response, ProviderError>;
}

/// Wallet families that mark their injected provider with an `is*` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletKind {
    MetaMask,
    CoinbaseWallet,
    BraveWallet,
    Unknown,
}

impl WalletKind {
    pub fn name(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "MetaMask",
            WalletKind::CoinbaseWallet => "Coinbase Wallet",
            WalletKind::BraveWallet => "Brave Wallet",
            WalletKind::Unknown => "Unknown wallet",
        }
    }

    /// Brave also sets `isMetaMask`, so its own flag wins.
    pub fn from_flags(is_metamask: bool, is_coinbase_wallet: bool, is_brave_wallet: bool) -> Self {
        if is_brave_wallet {
            WalletKind::BraveWallet
        } else if is_coinbase_wallet {
            WalletKind::CoinbaseWallet
        } else if is_metamask {
            WalletKind::MetaMask
        } else {
            WalletKind::Unknown
        }
    }
}

// ============================================================================
// BROWSER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen]
extern "C" {
    /// The object found at `window.ethereum`
    #[derive(Clone, Debug)]
    pub type Eip1193Provider;

    /// `provider.request(args)`; rejects with a `ProviderRpcError` or anything thrown
    #[wasm_bindgen(method, catch, js_name = request)]
    async fn request_raw(this: &Eip1193Provider, args: &JsValue) -> Result<JsValue, JsValue>;
}

/// Provider injected into the page by a wallet extension.
#[derive(Clone, Debug)]
pub struct InjectedProvider {
    inner: Eip1193Provider,
    kind: WalletKind,
}

impl InjectedProvider {
    pub fn new(value: JsValue) -> Self {
        let kind = WalletKind::from_flags(
            flag(&value, "isMetaMask"),
            flag(&value, "isCoinbaseWallet"),
            flag(&value, "isBraveWallet"),
        );
        Self {
            inner: value.unchecked_into(),
            kind,
        }
    }

    pub fn kind(&self) -> WalletKind {
        self.kind
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn request<M: RpcMethod>(&self, method: M) -> Result<M::Response, ProviderError> {
        let args = serde_wasm_bindgen::to_value(&method.arguments())
            .map_err(|e| ProviderError::Thrown(format!("could not encode request: {}", e)))?;

        log::debug!("provider.request({})", M::METHOD);
        let value = self
            .inner
            .request_raw(&args)
            .await
            .map_err(provider_error_from_js)?;

        serde_wasm_bindgen::from_value(value).map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

/// Look up the injected provider. Only an undefined global counts as missing.
pub fn detect_provider() -> Option<InjectedProvider> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(PROVIDER_GLOBAL)).ok()?;
    if value.is_undefined() {
        return None;
    }

    let provider = InjectedProvider::new(value);
    log::info!("Detected injected provider: {}", provider.kind().name());
    Some(provider)
}

fn flag(value: &JsValue, name: &str) -> bool {
    Reflect::get(value, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn provider_error_from_js(err: JsValue) -> ProviderError {
    if let Ok(rpc) = serde_wasm_bindgen::from_value::<ProviderRpcError>(err.clone()) {
        return ProviderError::Rpc(rpc);
    }
    if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        return ProviderError::Thrown(String::from(js_err.message()));
    }
    match err.as_string() {
        Some(message) => ProviderError::Thrown(message),
        None => ProviderError::Thrown(format!("{:?}", err)),
    }
}
