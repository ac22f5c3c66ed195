//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the injected wallet provider.
//!
//! ## Module Organization
//!
//! - [`provider`] - EIP-1193 method catalogue, request arguments, provider errors,
//!   and the [`ConnectionResult`](provider::ConnectionResult) of a connection attempt
//!
//! ## Serialization Format
//!
//! - **Method names**: the exact EIP-1193 strings (`eth_requestAccounts`, `eth_chainId`)
//! - **Chain ids**: hex-prefixed strings, validated on deserialization
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//!
//! ## Example Exchange
//!
//! ```text
//! request:  { "method": "eth_requestAccounts" }
//! response: ["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"]
//!
//! request:  { "method": "eth_chainId" }
//! response: "0x89"
//!
//! rejection: { "code": 4001, "message": "User rejected the request." }
//! ```

pub mod provider;

pub use provider::*;
