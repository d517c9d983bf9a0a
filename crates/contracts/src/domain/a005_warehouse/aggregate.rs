use crate::domain::common::{active_label, Address, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::{is_pincode, Problems};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Dark store / warehouse serving a set of delivery pincodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub manager: WarehouseManager,
    pub address: Address,
    pub delivery_pincodes: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub capacity: Option<u32>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarehouseManager {
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const CODE: Field<String> = Field::new(&["code"]);
    pub const CAPACITY: Field<String> = Field::new(&["capacity"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);
    pub const MANAGER_NAME: Field<String> = Field::new(&["manager", "name"]);
    pub const MANAGER_PHONE: Field<String> = Field::new(&["manager", "phone"]);
    pub const STREET: Field<String> = Field::new(&["address", "street"]);
    pub const CITY: Field<String> = Field::new(&["address", "city"]);
    pub const STATE: Field<String> = Field::new(&["address", "state"]);
    pub const PIN_CODE: Field<String> = Field::new(&["address", "pinCode"]);
    pub const DELIVERY_PINCODES: Field<Vec<String>> = Field::new(&["deliveryPincodes"]);
}

impl Resource for Warehouse {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str(), self.address.city.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        (key == "status").then(|| active_label(self.is_active).to_string())
    }

    fn resource_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "warehouses"
    }

    fn element_key() -> &'static str {
        "warehouse"
    }

    fn element_name() -> &'static str {
        "Warehouse"
    }

    fn list_name() -> &'static str {
        "Warehouses"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/warehouse/getall",
            item: Some("/api/warehouse/{id}"),
            create: Some("/api/warehouse/create"),
            update: Some("/api/warehouse/update/{id}"),
            delete: Some("/api/warehouse/delete/{id}"),
            status: None,
        }
    }

    fn normalize(&mut self) {
        self.code = self.code.trim().to_uppercase();
        self.delivery_pincodes.dedup();
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        p.required(&self.code, "Code");
        p.required(&self.address.city, "City");
        p.phone(&self.manager.phone, "Manager phone");
        self.address.check("Address", &mut p);
        if self.delivery_pincodes.is_empty() {
            p.push("Add at least one delivery pincode");
        }
        for pincode in self.delivery_pincodes.iter().filter(|p| !is_pincode(p)) {
            p.push(format!("Delivery pincode {pincode} is not valid"));
        }
        p
    }

    fn empty_form() -> Value {
        Warehouse {
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
    use crate::shared::list_editors::add_pincode;
    use serde_json::json;

    #[test]
    fn declared_fields_exist_in_the_empty_form() {
        let form = Warehouse::empty_form();
        for path in [
            fields::NAME.path(),
            fields::CODE.path(),
            fields::CAPACITY.path(),
            fields::IS_ACTIVE.path(),
            fields::MANAGER_NAME.path(),
            fields::MANAGER_PHONE.path(),
            fields::STREET.path(),
            fields::CITY.path(),
            fields::STATE.path(),
            fields::PIN_CODE.path(),
            fields::DELIVERY_PINCODES.path(),
        ] {
            assert!(get_path(&form, &path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn delivery_area_comes_from_the_pincode_editor() {
        let pincodes = add_pincode(&[], "560034").unwrap();
        let pincodes = add_pincode(&pincodes, "560095").unwrap();

        let mut form = Warehouse::empty_form();
        for (field, value) in [
            (fields::NAME, "Koramangala"),
            (fields::CODE, "blr-01"),
            (fields::CITY, "Bengaluru"),
        ] {
            form = set_path(&form, &field.path(), json!(value));
        }
        form = set_path(&form, &fields::DELIVERY_PINCODES.path(), json!(pincodes));

        let warehouse = Warehouse::from_form(&form, WriteMode::Create).unwrap();
        assert_eq!(warehouse.code, "BLR-01");
        assert_eq!(warehouse.delivery_pincodes, vec!["560034", "560095"]);
    }

    #[test]
    fn empty_delivery_area_is_rejected() {
        let form = json!({ "name": "A", "code": "A1", "address": { "city": "Pune" } });
        let problems = Warehouse::from_form(&form, WriteMode::Create).unwrap_err();
        assert_eq!(problems, vec!["Add at least one delivery pincode".to_string()]);
    }
}
