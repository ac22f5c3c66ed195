//! # Wallet Page Server
//!
//! Local static file server for the `wallet-web` page. The wallet extension only injects
//! `window.ethereum` into pages served over http(s), so the built page needs a server
//! rather than a `file://` URL.

pub mod config;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::{create_router, init_tracing, start_server};
