//! Enchant name validation.
//!
//! Valid names:
//! - Are not empty
//! - Do not start or end with whitespace
//! - Do not contain two spaces in a row
//! - Contain no control characters

/// Validates an enchant name.
///
/// # Examples
/// ```
/// use enchantlore::enchants::validation::validate_enchant_name;
///
/// assert!(validate_enchant_name("Lifesteal").is_ok());
/// assert!(validate_enchant_name("Frost Walker").is_ok());
///
/// assert!(validate_enchant_name("").is_err());
/// assert!(validate_enchant_name(" Lifesteal").is_err());
/// assert!(validate_enchant_name("Frost  Walker").is_err());
/// ```
pub fn validate_enchant_name(name: &str) -> Result<(), NameValidationError> {
    let (Some(first), Some(last)) = (name.chars().next(), name.chars().last()) else {
        return Err(NameValidationError::Empty);
    };

    if first.is_whitespace() || last.is_whitespace() {
        return Err(NameValidationError::SurroundingWhitespace);
    }

    let mut prev_was_space = false;
    for ch in name.chars() {
        if ch.is_control() {
            return Err(NameValidationError::ControlCharacter(ch));
        }

        if ch == ' ' {
            if prev_was_space {
                return Err(NameValidationError::ConsecutiveSpaces);
            }
            prev_was_space = true;
        } else {
            prev_was_space = false;
        }
    }

    Ok(())
}

/// Derives the stable id of an enchant from its name.
///
/// ```
/// use enchantlore::enchants::validation::enchant_id;
///
/// assert_eq!(enchant_id("Frost Walker"), "frost_walker");
/// ```
pub fn enchant_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Error type for enchant name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    /// Name is empty
    Empty,
    /// Name starts or ends with whitespace
    SurroundingWhitespace,
    /// Name contains two spaces in a row
    ConsecutiveSpaces,
    /// Name contains a control character
    ControlCharacter(char),
}

impl std::fmt::Display for NameValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameValidationError::Empty => write!(f, "enchant name cannot be empty"),
            NameValidationError::SurroundingWhitespace => {
                write!(f, "enchant name cannot start or end with whitespace")
            }
            NameValidationError::ConsecutiveSpaces => {
                write!(f, "enchant name cannot contain consecutive spaces")
            }
            NameValidationError::ControlCharacter(ch) => {
                write!(f, "enchant name contains control character {:?}", ch)
            }
        }
    }
}

impl std::error::Error for NameValidationError {}
