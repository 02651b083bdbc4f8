//! Item name validation

use super::ValidationError;

/// Maximum length for item names
const MAX_ITEM_NAME_LEN: usize = 256;

/// Validated item name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name, trimming surrounding whitespace.
    ///
    /// # Rules
    /// - Must be non-empty after trimming
    /// - Max 256 characters
    ///
    /// # Example
    /// ```
    /// use catalogd_server::models::ItemName;
    ///
    /// assert!(ItemName::new("Widget").is_ok());
    /// assert!(ItemName::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ValidationError::Empty { field: "item name" });
        }

        if s.len() > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "item name",
                max: MAX_ITEM_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the item name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ItemName::new("Widget").is_ok());
        assert!(ItemName::new("a").is_ok());
        assert!(ItemName::new("Widget Mk. II").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let name = ItemName::new("  Widget  ").unwrap();
        assert_eq!(name.as_str(), "Widget");
    }

    #[test]
    fn rejects_empty() {
        let err = ItemName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = ItemName::new(" \t ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        let name_256 = "a".repeat(256);
        assert!(ItemName::new(&name_256).is_ok());

        let name_257 = "a".repeat(257);
        let err = ItemName::new(&name_257).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 256, .. }));
    }
}
