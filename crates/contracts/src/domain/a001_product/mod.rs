pub mod aggregate;
pub mod variants;

pub use aggregate::{fields, Product, IMAGES_PART, MAX_PRODUCT_IMAGES};
pub use variants::{OptionField, VariantGroup, VariantGroupDraft, VariantOption, VariantOptionDraft};
