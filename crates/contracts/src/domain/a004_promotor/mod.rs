pub mod aggregate;

pub use aggregate::{fields, is_ifsc, BankDetails, Promotor, PromotorStatusUpdate};
