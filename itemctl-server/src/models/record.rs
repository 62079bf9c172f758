//! Record name validation
//!
//! Items and collections share the same shape, so both use [`RecordName`].

use super::ValidationError;

/// Maximum length for names, matching the `VARCHAR(255)` column
const MAX_NAME_LEN: usize = 255;

/// Validated item/collection name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordName(String);

impl RecordName {
    /// Create a new name.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 255 characters
    ///
    /// Surrounding whitespace is kept as given; only the empty string is rejected.
    ///
    /// # Example
    /// ```
    /// use itemctl_server::models::RecordName;
    ///
    /// assert!(RecordName::new("groceries").is_ok());
    /// assert!(RecordName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
