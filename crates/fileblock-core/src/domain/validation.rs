//! Custom Extension Name Validation
//!
//! Runs before any network call on the add path.

use crate::error::ValidationError;

/// Longest accepted custom extension name
pub const MAX_EXTENSION_NAME_LEN: usize = 20;

/// Capacity shown next to the custom count. Enforced by the server only.
pub const MAX_CUSTOM_EXTENSIONS: u32 = 200;

/// Check a name against `^[A-Za-z0-9]{1,20}$`
pub fn validate_custom_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }
    if name.chars().count() > MAX_EXTENSION_NAME_LEN
        || !name.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_alphanumeric() {
        assert_eq!(validate_custom_name("zip"), Ok(()));
        assert_eq!(validate_custom_name("Mp4"), Ok(()));
        assert_eq!(validate_custom_name(&"a".repeat(20)), Ok(()));
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_custom_name("").unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert_eq!(err.to_string(), "enter an extension name.");
    }

    #[test]
    fn test_rejects_bad_format() {
        for name in ["tar.gz", ".zip", "my ext", "한글", "a_b", " ", &"a".repeat(21)] {
            let err = validate_custom_name(name).unwrap_err();
            assert_eq!(err, ValidationError::InvalidFormat, "name: {name:?}");
            assert_eq!(err.to_string(), "max 20 chars, alphanumeric only.");
        }
    }
}
