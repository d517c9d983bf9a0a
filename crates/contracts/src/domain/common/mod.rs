//! Common types and traits for all admin resources

pub mod address;
pub mod resource;

// Re-exports
pub use address::Address;
pub use resource::{active_label, Endpoints, Resource, WriteMode, ACTIVE_OPTIONS};
