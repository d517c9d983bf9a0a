use crate::domain::common::{Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};

/// Permission catalog: key sent to the backend and its checkbox label.
pub const PERMISSION_KEYS: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("products", "Products"),
    ("categories", "Categories"),
    ("orders", "Orders"),
    ("promotors", "Promotors"),
    ("warehouses", "Warehouses"),
    ("drivers", "Drivers"),
    ("banners", "Banners"),
    ("discounts", "Discounts"),
    ("payouts", "Payouts"),
    ("admins", "Admins"),
    ("roles", "Roles"),
];

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl Role {
    pub fn has(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Permissions with `key` switched on or off; catalog order is kept.
    pub fn toggled(permissions: &[String], key: &str, on: bool) -> Vec<String> {
        PERMISSION_KEYS
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| if *k == key { on } else { permissions.iter().any(|p| p == k) })
            .map(str::to_string)
            .collect()
    }
}

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const DESCRIPTION: Field<String> = Field::new(&["description"]);
    pub const PERMISSIONS: Field<Vec<String>> = Field::new(&["permissions"]);
}

impl Resource for Role {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn resource_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "roles"
    }

    fn element_key() -> &'static str {
        "role"
    }

    fn element_name() -> &'static str {
        "Role"
    }

    fn list_name() -> &'static str {
        "Roles"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/roles",
            item: Some("/api/roles/{id}"),
            create: Some("/api/roles"),
            update: Some("/api/roles/{id}"),
            delete: Some("/api/roles/{id}"),
            status: None,
        }
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.permissions.retain(|p| PERMISSION_KEYS.iter().any(|(k, _)| k == p));
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        if self.permissions.is_empty() {
            p.push("Select at least one permission");
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::field_path::get_path;
    use serde_json::json;

    #[test]
    fn declared_fields_exist_in_the_empty_form() {
        let form = Role::empty_form();
        for path in [fields::NAME.path(), fields::DESCRIPTION.path(), fields::PERMISSIONS.path()] {
            assert!(get_path(&form, &path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn toggling_keeps_catalog_order() {
        let perms = vec!["orders".to_string()];
        let perms = Role::toggled(&perms, "products", true);
        assert_eq!(perms, vec!["products", "orders"]);
        let perms = Role::toggled(&perms, "orders", false);
        assert_eq!(perms, vec!["products"]);
    }

    #[test]
    fn unknown_permissions_are_dropped() {
        let form = json!({ "name": "Ops", "permissions": ["orders", "root"] });
        let role = Role::from_form(&form, WriteMode::Create).unwrap();
        assert_eq!(role.permissions, vec!["orders"]);
        assert!(role.has("orders"));
    }

    #[test]
    fn empty_role_reports_both_problems() {
        assert_eq!(
            Role::from_form(&Role::empty_form(), WriteMode::Create).unwrap_err(),
            vec!["Name is required".to_string(), "Select at least one permission".to_string()]
        );
    }
}
