pub mod a001_product;
pub mod a002_category;
pub mod a003_order;
pub mod a004_promotor;
pub mod a005_warehouse;
pub mod a006_driver;
pub mod a007_banner;
pub mod a008_discount;
pub mod a009_admin;
pub mod a010_role;
pub mod a011_payout;
