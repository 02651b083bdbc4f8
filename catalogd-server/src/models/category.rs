//! Category name validation

use super::ValidationError;

/// Maximum length for category names
const MAX_CATEGORY_NAME_LEN: usize = 256;

/// Validated category name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new category name, trimming surrounding whitespace.
    ///
    /// Same rules as item names: non-empty after trimming, max 256
    /// characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "category name",
            });
        }

        if s.len() > MAX_CATEGORY_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "category name",
                max: MAX_CATEGORY_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the category name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
