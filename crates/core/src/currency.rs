//! Currency code validation and pair keys.
//!
//! Currencies are plain ISO-4217-style codes: exactly three ASCII uppercase
//! letters. The set is open; the stores accept any well-formed code.

use crate::errors::{Error, Result};

/// Returns true if `code` is a well-formed currency code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

/// Validates a currency code, surfacing `Error::UnsupportedCurrency` otherwise.
pub fn validate_code(code: &str) -> Result<()> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(Error::UnsupportedCurrency(code.to_string()))
    }
}

/// Builds the identity key for an ordered currency pair.
/// Returns format: "UAH/USD".
pub fn make_pair_key(from: &str, to: &str) -> String {
    format!("{}/{}", from, to)
}

/// Parses a pair key back into (from, to). Returns None if the key is not
/// of the "FROM/TO" form.
pub fn parse_pair_key(key: &str) -> Option<(String, String)> {
    key.split_once('/')
        .map(|(from, to)| (from.to_string(), to.to_string()))
}
