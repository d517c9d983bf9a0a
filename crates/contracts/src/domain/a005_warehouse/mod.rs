pub mod aggregate;

pub use aggregate::{fields, Warehouse, WarehouseManager};
