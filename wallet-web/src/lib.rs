//! Browser Wallet Connect
//!
//! Asks the injected Web3 wallet (`window.ethereum`) for account access, shows the
//! active address, and names the network the wallet is on.

use wasm_bindgen::prelude::*;

pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use pages::ConnectPage;
use state::wallet::WalletContext;
use utils::PageConfig;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet connect page starting...");

    if let Err(e) = ConnectPage::mount(&PageConfig::default(), WalletContext::new()) {
        log::error!("Failed to mount connect page: {}", e);
    }
}
