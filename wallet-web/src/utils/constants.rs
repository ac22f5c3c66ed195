//! Application constants

// Element ids the page must provide
pub const CONNECT_BUTTON_ID: &str = "connectBtn";
pub const WALLET_ADDRESS_ID: &str = "walletAddress";
pub const WALLET_INFO_ID: &str = "walletInfo";
pub const NETWORK_INFO_ID: &str = "networkInfo";

/// Class that keeps the info panel out of view until a wallet connects.
pub const HIDDEN_CLASS: &str = "hidden";

// User-facing text
pub const MISSING_PROVIDER_ALERT: &str =
    "Please install MetaMask or another Web3 wallet extension.";
pub const NETWORK_INFO_PREFIX: &str = "Detected Network: ";

/// Global the wallet extension injects its provider under.
pub const PROVIDER_GLOBAL: &str = "ethereum";
