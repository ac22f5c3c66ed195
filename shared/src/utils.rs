//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting hex account addresses for display and logs:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the usual `0x1234...abcd` widths
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! assert_eq!(format_address(address, 6, 4), "0x5aAe...eAed");
//! ```

/// Prefix width used by [`truncate_address`], `0x` included.
pub const ADDRESS_PREFIX_LEN: usize = 6;
/// Suffix width used by [`truncate_address`].
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses that are too short to shorten, or that are not ASCII, are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 6, 4), "0x5aAe...eAed");
/// assert_eq!(format_address(addr, 4, 4), "0x5a...eAed");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii() || address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x1234...abcd`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(truncate_address(addr), "0x5aAe...eAed");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}
