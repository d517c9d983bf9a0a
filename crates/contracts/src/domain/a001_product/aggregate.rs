use super::variants::{self, VariantGroup, VariantGroupDraft};
use crate::domain::common::{active_label, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound on product gallery images.
pub const MAX_PRODUCT_IMAGES: usize = 5;

/// Multipart part carrying new gallery images.
pub const IMAGES_PART: &str = "images";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub description: String,

    /// Category id; the backend may send the populated category instead.
    #[serde(deserialize_with = "lenient::reference_id")]
    pub category: String,

    #[serde(deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub mrp: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub stock: Option<u32>,
    #[serde(deserialize_with = "lenient::string")]
    pub unit: String,

    pub images: Vec<String>,
    pub variants: Vec<VariantGroup>,

    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const DESCRIPTION: Field<String> = Field::new(&["description"]);
    pub const CATEGORY: Field<String> = Field::new(&["category"]);
    pub const PRICE: Field<String> = Field::new(&["price"]);
    pub const MRP: Field<String> = Field::new(&["mrp"]);
    pub const STOCK: Field<String> = Field::new(&["stock"]);
    pub const UNIT: Field<String> = Field::new(&["unit"]);
    pub const IMAGES: Field<Vec<String>> = Field::new(&["images"]);
    pub const VARIANTS: Field<Vec<VariantGroupDraft>> = Field::new(&["variants"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);
}

impl Resource for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "category" => Some(self.category.clone()),
            "status" => Some(active_label(self.is_active).to_string()),
            _ => None,
        }
    }

    fn resource_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_key() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/products",
            item: Some("/api/products/{id}"),
            create: Some("/api/products"),
            update: Some("/api/products/{id}"),
            delete: Some("/api/products/{id}"),
            status: None,
        }
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.images.retain(|url| !url.trim().is_empty());
        self.variants = variants::prune(std::mem::take(&mut self.variants));
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        p.required(&self.category, "Category");
        p.required_number(self.price, "Price");
        p.non_negative(self.price, "Price");
        p.non_negative(self.mrp, "MRP");
        if let (Some(price), Some(mrp)) = (self.price, self.mrp) {
            if price > mrp {
                p.push("Price cannot be higher than MRP");
            }
        }
        p.max_items(&self.images, MAX_PRODUCT_IMAGES, "Images");
        for group in &self.variants {
            if group.options.is_empty() {
                p.push(format!("Variant \"{}\" needs at least one option", group.name));
            }
            for option in &group.options {
                p.non_negative(option.price, &format!("{} / {} price", group.name, option.value));
            }
        }
        p
    }

    fn validate_uploads(&self, pending: &dyn Fn(&str) -> usize) -> Problems {
        let mut p = Problems::new();
        p.max_count(self.images.len() + pending(IMAGES_PART), MAX_PRODUCT_IMAGES, "Images");
        p
    }

    fn empty_form() -> Value {
        Product {
            is_active: true,
            ..Default::default()
        }
        .to_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::field_path::{get_path, set_path};
    use serde_json::json;

    #[test]
    fn declared_fields_exist_in_the_empty_form() {
        let form = Product::empty_form();
        for path in [
            fields::NAME.path(),
            fields::DESCRIPTION.path(),
            fields::CATEGORY.path(),
            fields::PRICE.path(),
            fields::MRP.path(),
            fields::STOCK.path(),
            fields::UNIT.path(),
            fields::IMAGES.path(),
            fields::VARIANTS.path(),
            fields::IS_ACTIVE.path(),
        ] {
            assert!(get_path(&form, &path).is_some(), "missing {path}");
        }
        assert_eq!(form["isActive"], json!(true));
    }

    #[test]
    fn decodes_populated_category_and_mongo_id() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Basmati Rice",
            "category": { "_id": "c9", "name": "Grains" },
            "price": 120,
            "images": ["https://cdn/x.png"],
            "isActive": true,
            "__v": 0
        }))
        .unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.category, "c9");
        assert_eq!(product.filter_value("category").as_deref(), Some("c9"));
    }

    #[test]
    fn form_text_is_parsed_and_validated() {
        let mut form = Product::empty_form();
        form = set_path(&form, &fields::NAME.path(), json!("Rice"));
        form = set_path(&form, &fields::CATEGORY.path(), json!("c1"));
        form = set_path(&form, &fields::PRICE.path(), json!("99.5"));
        form = set_path(&form, &fields::STOCK.path(), json!(""));
        form = set_path(
            &form,
            &fields::VARIANTS.path(),
            json!([{ "name": "", "options": [] }, { "name": "Pack", "options": [{ "value": "1kg", "price": "" }] }]),
        );

        let product = Product::from_form(&form, WriteMode::Create).unwrap();
        assert_eq!(product.price, Some(99.5));
        assert_eq!(product.stock, None);
        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].options[0].price, None);
    }

    #[test]
    fn validation_reports_all_problems() {
        let form = set_path(&Product::empty_form(), &fields::MRP.path(), json!("10"));
        let form = set_path(&form, &fields::PRICE.path(), json!("20"));
        let problems = Product::from_form(&form, WriteMode::Create).unwrap_err();
        assert_eq!(
            problems,
            vec![
                "Name is required".to_string(),
                "Category is required".to_string(),
                "Price cannot be higher than MRP".to_string(),
            ]
        );
    }

    #[test]
    fn too_many_images_is_a_problem() {
        let product = Product {
            name: "x".into(),
            category: "c".into(),
            price: Some(1.0),
            images: vec!["a".into(); MAX_PRODUCT_IMAGES + 1],
            ..Default::default()
        };
        assert_eq!(
            product.validate(WriteMode::Edit).messages(),
            ["Images: at most 5 allowed, got 6"]
        );
    }

    #[test]
    fn staged_uploads_count_towards_the_image_limit() {
        let product = Product {
            images: vec!["https://cdn/a.png".into(); 2],
            ..Default::default()
        };
        fn staged(n: usize) -> impl Fn(&str) -> usize {
            move |part| if part == IMAGES_PART { n } else { 0 }
        }

        assert!(product.validate_uploads(&staged(3)).is_empty());
        assert_eq!(
            product.validate_uploads(&staged(4)).messages(),
            ["Images: at most 5 allowed, got 6"]
        );
        assert!(product.validate_uploads(&|_: &str| 0).is_empty());
    }
}
