//! Repository implementations for MariaDB access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool; no connection state of its own
//! - Handles duplicates via ON DUPLICATE KEY (no check-then-insert)
//! - Uses a transaction for the one multi-statement operation

pub mod memberships;
pub mod records;

pub use memberships::MembershipRepo;
pub use records::RecordRepo;
