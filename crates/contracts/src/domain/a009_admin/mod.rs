pub mod aggregate;

pub use aggregate::{fields, Admin, MIN_PASSWORD_LEN};
