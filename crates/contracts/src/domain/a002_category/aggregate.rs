use crate::domain::common::{active_label, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image URL; a new upload replaces it through the multipart `image` part.
    #[serde(deserialize_with = "lenient::string")]
    pub image: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const DESCRIPTION: Field<String> = Field::new(&["description"]);
    pub const IMAGE: Field<String> = Field::new(&["image"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);
}

impl Resource for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        (key == "status").then(|| active_label(self.is_active).to_string())
    }

    fn resource_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_key() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/categories",
            item: Some("/api/categories/{id}"),
            create: Some("/api/categories"),
            update: Some("/api/categories/{id}"),
            delete: Some("/api/categories/{id}"),
            status: None,
        }
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        p
    }

    fn empty_form() -> Value {
        Category {
            is_active: true,
            ..Default::default()
        }
        .to_form()
    }
}
