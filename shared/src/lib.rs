//! # Shared Wallet Types
//!
//! Target-independent types used by the browser crate (`wallet-web`) and its tests.
//! Nothing in here touches the DOM or `wasm-bindgen`, so it builds and tests natively.
//!
//! ## Structure
//!
//! - **[`chain`]**: Chain identifiers and the chain-id → network label lookup
//! - **[`dto`]**: Wire types exchanged with the injected wallet provider
//!   - **[`dto::provider`]**: EIP-1193 method catalogue, request arguments, RPC errors
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Provider requests serialize to the EIP-1193 shape `{ "method": "eth_chainId" }`.
//! Responses are deserialized into the typed response of each method:
//!
//! | Method                | Response                    |
//! |-----------------------|-----------------------------|
//! | `eth_requestAccounts` | `Vec<String>`               |
//! | `eth_chainId`         | [`chain::ChainId`] (`"0x1"`) |
//!
//! ## Usage
//!
//! ```rust
//! use shared::chain::{ChainId, Network};
//!
//! let chain_id: ChainId = "0x89".parse().unwrap();
//! assert_eq!(Network::from_chain_id(&chain_id).label(), "Polygon Mainnet");
//! ```

pub mod chain;
pub mod dto;
pub mod utils;

pub use chain::*;
pub use dto::*;
pub use utils::*;
