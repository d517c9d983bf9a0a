pub mod aggregate;

pub use aggregate::{fields, Role, PERMISSION_KEYS};
