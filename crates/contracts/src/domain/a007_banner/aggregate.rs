use crate::domain::common::{active_label, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BANNER_POSITIONS: &[(&str, &str)] = &[
    ("home_top", "Home top"),
    ("home_middle", "Home middle"),
    ("category", "Category page"),
    ("offers", "Offers"),
];

// ============================================================================
// Aggregate Root
// ============================================================================

/// Promotional banner shown in the customer app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub image: String,
    pub link: String,
    pub position: String,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub sort_order: Option<u32>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `PUT /api/banners/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerStatusUpdate {
    pub is_active: bool,
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const TITLE: Field<String> = Field::new(&["title"]);
    pub const IMAGE: Field<String> = Field::new(&["image"]);
    pub const LINK: Field<String> = Field::new(&["link"]);
    pub const POSITION: Field<String> = Field::new(&["position"]);
    pub const SORT_ORDER: Field<String> = Field::new(&["sortOrder"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);
}

impl Resource for Banner {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "position" => Some(self.position.clone()),
            "status" => Some(active_label(self.is_active).to_string()),
            _ => None,
        }
    }

    fn resource_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "banners"
    }

    fn element_key() -> &'static str {
        "banner"
    }

    fn element_name() -> &'static str {
        "Banner"
    }

    fn list_name() -> &'static str {
        "Banners"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/banners",
            item: Some("/api/banners/{id}"),
            create: Some("/api/banners"),
            update: Some("/api/banners/{id}"),
            delete: Some("/api/banners/{id}"),
            status: Some("/api/banners/{id}/status"),
        }
    }

    fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.link = self.link.trim().to_string();
    }

    fn validate(&self, mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.title, "Title");
        p.required(&self.position, "Position");
        // The image may arrive as an upload part instead of a URL on create.
        if mode == WriteMode::Edit {
            p.required(&self.image, "Image");
        }
        if !self.link.is_empty() && !(self.link.starts_with('/') || self.link.contains("://")) {
            p.push("Link must be an app path or a full URL");
        }
        p
    }

    fn empty_form() -> Value {
        Banner {
            position: "home_top".to_string(),
            is_active: true,
            ..Default::default()
        }
        .to_form()
    }
}
