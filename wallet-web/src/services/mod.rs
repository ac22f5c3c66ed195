//! Wallet services: provider interop, output handles, and the connection flow

pub mod connect;
pub mod display;
pub mod wallet;
