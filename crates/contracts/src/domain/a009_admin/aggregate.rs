use crate::domain::common::{active_label, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_PASSWORD_LEN: usize = 8;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Dashboard user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Only sent when set: required on create, blank on edit keeps the current one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Role id; may arrive populated.
    #[serde(deserialize_with = "lenient::reference_id")]
    pub role: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const EMAIL: Field<String> = Field::new(&["email"]);
    pub const PASSWORD: Field<String> = Field::new(&["password"]);
    pub const ROLE: Field<String> = Field::new(&["role"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);
}

impl Resource for Admin {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "role" => Some(self.role.clone()),
            "status" => Some(active_label(self.is_active).to_string()),
            _ => None,
        }
    }

    fn resource_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "admins"
    }

    fn element_key() -> &'static str {
        "admin"
    }

    fn element_name() -> &'static str {
        "Admin"
    }

    fn list_name() -> &'static str {
        "Admins"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/admins",
            item: Some("/api/admins/{id}"),
            create: Some("/api/admins"),
            update: Some("/api/admins/{id}"),
            delete: Some("/api/admins/{id}"),
            status: None,
        }
    }

    fn normalize(&mut self) {
        self.email = self.email.trim().to_lowercase();
    }

    fn validate(&self, mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        p.required(&self.email, "Email");
        p.email(&self.email, "Email");
        p.required(&self.role, "Role");
        if mode == WriteMode::Create {
            p.required(&self.password, "Password");
        }
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            p.push(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
        }
        p
    }

    fn to_form(&self) -> Value {
        let mut form = serde_json::to_value(self).unwrap_or_default();
        // Password input starts blank even when editing.
        if let Value::Object(map) = &mut form {
            map.insert("password".to_string(), Value::String(String::new()));
        }
        form
    }

    fn empty_form() -> Value {
        Admin {
            is_active: true,
            ..Default::default()
        }
        .to_form()
    }
}
