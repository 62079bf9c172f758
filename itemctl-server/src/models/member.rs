//! Membership item id validation

use super::ValidationError;

/// Item id supplied in a membership request; zero means "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::MissingId { field: "item_id" });
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}
