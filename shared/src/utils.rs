//! # Shared Utility Functions
//!
//! Address formatting used by the wallet facade and anything that renders
//! an account.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the display defaults (6 + 4)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! assert_eq!(truncate_address(address), "0x71C7...976F");
//! ```

/// Characters kept at the start of a truncated address (includes `0x`).
pub const ADDRESS_PREFIX_LEN: usize = 6;

/// Characters kept at the end of a truncated address.
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses shorter than `prefix_len + suffix_len` are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(format_address(addr, 6, 4), "0x71C7...976F");
/// assert_eq!(format_address(addr, 4, 4), "0x71...976F");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();

    if chars.len() < prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an address for display: first 6, `...`, last 4.
///
/// Strings shorter than 10 characters come back unchanged.
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}

/// Check the `0x` + 40 hex digits account shape.
pub fn is_hex_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}
