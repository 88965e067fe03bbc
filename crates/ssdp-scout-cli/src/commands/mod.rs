//! Command implementations.

pub mod discover;

pub use discover::run_discover;
