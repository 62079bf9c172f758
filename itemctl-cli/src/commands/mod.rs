//! Command modules for itemctl CLI

pub mod serve;
