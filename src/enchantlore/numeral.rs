//! Level numerals.
//!
//! Levels 1 through 10 are rendered with the ten Roman numeral tokens `I`..`X`.
//! Everything else (0, negatives, 11 and above) falls back to plain decimal.
//! There is no extended Roman notation: `11` is always `"11"`, never `"XI"`.

use crate::error::{EnchantError, Result};

const NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Renders a level as the suffix used in lore lines.
///
/// ```
/// use enchantlore::numeral::to_numeral;
///
/// assert_eq!(to_numeral(4), "IV");
/// assert_eq!(to_numeral(10), "X");
/// assert_eq!(to_numeral(11), "11");
/// ```
pub fn to_numeral(level: i32) -> String {
    match level {
        1..=10 => NUMERALS[(level - 1) as usize].to_string(),
        _ => level.to_string(),
    }
}

/// Parses a lore suffix back into a level.
///
/// Accepts one of the ten numeral tokens or a decimal integer.
///
/// ```
/// use enchantlore::numeral::from_numeral;
///
/// assert_eq!(from_numeral("IV").unwrap(), 4);
/// assert_eq!(from_numeral("7").unwrap(), 7);
/// assert!(from_numeral("XI").is_err());
/// ```
pub fn from_numeral(token: &str) -> Result<i32> {
    if let Some(pos) = NUMERALS.iter().position(|n| *n == token) {
        return Ok(pos as i32 + 1);
    }
    token
        .parse::<i32>()
        .map_err(|source| EnchantError::MalformedLevel {
            token: token.to_string(),
            source,
        })
}
