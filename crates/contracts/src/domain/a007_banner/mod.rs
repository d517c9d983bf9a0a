pub mod aggregate;

pub use aggregate::{fields, Banner, BannerStatusUpdate, BANNER_POSITIONS};
