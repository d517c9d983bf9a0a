use crate::domain::common::{Address, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DRIVER_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("suspended", "Suspended"),
];

pub const VEHICLE_TYPES: &[(&str, &str)] = &[
    ("bike", "Bike"),
    ("scooter", "Scooter"),
    ("bicycle", "Bicycle"),
    ("van", "Van"),
];

// ============================================================================
// Aggregate Root
// ============================================================================

/// Delivery driver, edited on a dedicated page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Driver {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    pub email: String,
    pub vehicle: Vehicle,
    pub address: DriverAddress,
    pub documents: DriverDocuments,
    pub status: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_available: bool,
    /// Warehouse id; may arrive populated.
    #[serde(deserialize_with = "lenient::reference_id")]
    pub warehouse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriverAddress {
    pub current_address: Address,
    pub permanent_address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriverDocuments {
    pub aadhar_card: AadharCard,
    pub driving_license: DrivingLicense,
    pub pan_card: PanCard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AadharCard {
    #[serde(deserialize_with = "lenient::string")]
    pub number: String,
    pub front_image: String,
    pub back_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrivingLicense {
    pub number: String,
    /// `YYYY-MM-DD`, or a full timestamp from the backend.
    pub expiry_date: String,
    pub front_image: String,
    pub back_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanCard {
    pub number: String,
    pub image: String,
}

impl DrivingLicense {
    pub fn expiry(&self) -> Option<NaiveDate> {
        let date = self.expiry_date.get(..10)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

fn is_aadhar(value: &str) -> bool {
    value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit())
}

/// `ABCDE1234F`
fn is_pan(value: &str) -> bool {
    let b = value.as_bytes();
    b.len() == 10
        && b[..5].iter().all(u8::is_ascii_uppercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase()
}

/// Body of `PUT /api/drivers/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStatusUpdate {
    pub status: String,
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const PHONE: Field<String> = Field::new(&["phone"]);
    pub const EMAIL: Field<String> = Field::new(&["email"]);
    pub const STATUS: Field<String> = Field::new(&["status"]);
    pub const IS_AVAILABLE: Field<bool> = Field::new(&["isAvailable"]);
    pub const WAREHOUSE: Field<String> = Field::new(&["warehouse"]);

    pub const VEHICLE_TYPE: Field<String> = Field::new(&["vehicle", "type"]);
    pub const VEHICLE_NUMBER: Field<String> = Field::new(&["vehicle", "number"]);

    pub const CURRENT_STREET: Field<String> = Field::new(&["address", "currentAddress", "street"]);
    pub const CURRENT_CITY: Field<String> = Field::new(&["address", "currentAddress", "city"]);
    pub const CURRENT_STATE: Field<String> = Field::new(&["address", "currentAddress", "state"]);
    pub const CURRENT_PIN_CODE: Field<String> = Field::new(&["address", "currentAddress", "pinCode"]);
    pub const PERMANENT_STREET: Field<String> =
        Field::new(&["address", "permanentAddress", "street"]);
    pub const PERMANENT_CITY: Field<String> = Field::new(&["address", "permanentAddress", "city"]);
    pub const PERMANENT_STATE: Field<String> =
        Field::new(&["address", "permanentAddress", "state"]);
    pub const PERMANENT_PIN_CODE: Field<String> =
        Field::new(&["address", "permanentAddress", "pinCode"]);

    pub const AADHAR_NUMBER: Field<String> = Field::new(&["documents", "aadharCard", "number"]);
    pub const AADHAR_FRONT: Field<String> = Field::new(&["documents", "aadharCard", "frontImage"]);
    pub const AADHAR_BACK: Field<String> = Field::new(&["documents", "aadharCard", "backImage"]);
    pub const LICENSE_NUMBER: Field<String> =
        Field::new(&["documents", "drivingLicense", "number"]);
    pub const LICENSE_EXPIRY: Field<String> =
        Field::new(&["documents", "drivingLicense", "expiryDate"]);
    pub const LICENSE_FRONT: Field<String> =
        Field::new(&["documents", "drivingLicense", "frontImage"]);
    pub const LICENSE_BACK: Field<String> =
        Field::new(&["documents", "drivingLicense", "backImage"]);
    pub const PAN_NUMBER: Field<String> = Field::new(&["documents", "panCard", "number"]);
    pub const PAN_IMAGE: Field<String> = Field::new(&["documents", "panCard", "image"]);
}

impl Resource for Driver {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.phone.as_str(), self.vehicle.number.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        (key == "status").then(|| self.status.clone())
    }

    fn resource_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "drivers"
    }

    fn element_key() -> &'static str {
        "driver"
    }

    fn element_name() -> &'static str {
        "Driver"
    }

    fn list_name() -> &'static str {
        "Drivers"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/drivers",
            item: Some("/api/drivers/{id}"),
            create: Some("/api/drivers"),
            update: Some("/api/drivers/{id}"),
            delete: Some("/api/drivers/{id}"),
            status: Some("/api/drivers/{id}/status"),
        }
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.vehicle.number = self.vehicle.number.trim().to_uppercase();
        let pan = &mut self.documents.pan_card.number;
        *pan = pan.trim().to_uppercase();
        if self.status.is_empty() {
            self.status = "pending".to_string();
        }
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        p.required(&self.phone, "Phone");
        p.phone(&self.phone, "Phone");
        p.email(&self.email, "Email");
        p.required(&self.vehicle.number, "Vehicle number");
        self.address.current_address.check("Current address", &mut p);
        self.address.permanent_address.check("Permanent address", &mut p);

        let docs = &self.documents;
        let aadhar = docs.aadhar_card.number.trim();
        if !aadhar.is_empty() && !is_aadhar(aadhar) {
            p.push("Aadhar number must be 12 digits");
        }
        let pan = docs.pan_card.number.as_str();
        if !pan.is_empty() && !is_pan(pan) {
            p.push("PAN number is not valid");
        }
        if !docs.driving_license.expiry_date.is_empty() && docs.driving_license.expiry().is_none() {
            p.push("Driving license expiry date is not a valid date");
        }
        p
    }

    fn empty_form() -> Value {
        Driver {
            status: "pending".to_string(),
            is_available: true,
            ..Default::default()
        }
        .to_form()
    }
}
