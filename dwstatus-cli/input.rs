//! Register value input parsing
//!
//! Values arrive as text, typically copied out of a log or a debugger, and
//! must carry the `0x` prefix. Parsed values are 64-bit, wide enough for
//! every supported register.

use crate::error::{DwStatusError, Result};

/// Parse a `0x`-prefixed hexadecimal register value
///
/// Fails with [`DwStatusError::InvalidFormat`] when the prefix is missing,
/// no digits follow it, a non-hex digit appears, or the value does not fit
/// in 64 bits.
pub fn parse_register_value(input: &str) -> Result<u64> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| DwStatusError::InvalidFormat(format!("\"{input}\" must start with '0x'")))?;

    if digits.is_empty() {
        return Err(DwStatusError::InvalidFormat(format!(
            "\"{input}\" has no digits after the '0x' prefix"
        )));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DwStatusError::InvalidFormat(format!(
            "\"{input}\" contains a non-hexadecimal digit '{bad}'"
        )));
    }

    // Digits are known valid here, so the only remaining failure is overflow
    u64::from_str_radix(digits, 16).map_err(|_| {
        DwStatusError::InvalidFormat(format!("\"{input}\" does not fit in 64 bits"))
    })
}
