pub mod aggregate;

pub use aggregate::{fields, Category};
