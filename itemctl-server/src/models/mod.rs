//! Request models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod member;
pub mod record;
pub mod validation;

pub use member::MemberId;
pub use record::RecordName;
pub use validation::ValidationError;
