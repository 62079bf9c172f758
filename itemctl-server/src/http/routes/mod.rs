//! Route handlers organized by resource

pub mod collections;
pub mod health;
pub mod items;
