use crate::domain::common::{active_label, Address, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Sales promotor earning commission on referred orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Promotor {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    pub referral_code: String,
    /// Commission in percent of order value.
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub commission_rate: Option<f64>,
    pub bank_details: BankDetails,
    pub address: Address,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
}

/// Body of `PUT /api/promotor/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotorStatusUpdate {
    pub is_active: bool,
}

/// IFSC: four letters, a zero, then six letters or digits.
pub fn is_ifsc(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4] == b'0'
        && bytes[5..].iter().all(u8::is_ascii_alphanumeric)
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const NAME: Field<String> = Field::new(&["name"]);
    pub const EMAIL: Field<String> = Field::new(&["email"]);
    pub const PHONE: Field<String> = Field::new(&["phone"]);
    pub const REFERRAL_CODE: Field<String> = Field::new(&["referralCode"]);
    pub const COMMISSION_RATE: Field<String> = Field::new(&["commissionRate"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);

    pub const BANK_HOLDER: Field<String> = Field::new(&["bankDetails", "accountHolderName"]);
    pub const BANK_ACCOUNT: Field<String> = Field::new(&["bankDetails", "accountNumber"]);
    pub const BANK_IFSC: Field<String> = Field::new(&["bankDetails", "ifscCode"]);
    pub const BANK_NAME: Field<String> = Field::new(&["bankDetails", "bankName"]);

    pub const STREET: Field<String> = Field::new(&["address", "street"]);
    pub const CITY: Field<String> = Field::new(&["address", "city"]);
    pub const STATE: Field<String> = Field::new(&["address", "state"]);
    pub const PIN_CODE: Field<String> = Field::new(&["address", "pinCode"]);
}

impl Resource for Promotor {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.referral_code.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(active_label(self.is_active).to_string()),
            "city" => Some(self.address.city.clone()),
            _ => None,
        }
    }

    fn resource_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "promotors"
    }

    fn element_key() -> &'static str {
        "promotor"
    }

    fn element_name() -> &'static str {
        "Promotor"
    }

    fn list_name() -> &'static str {
        "Promotors"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/promotor/getall",
            item: Some("/api/promotor/{id}"),
            create: Some("/api/promotor/create"),
            update: Some("/api/promotor/update/{id}"),
            delete: Some("/api/promotor/delete/{id}"),
            status: Some("/api/promotor/{id}/status"),
        }
    }

    fn normalize(&mut self) {
        self.referral_code = self.referral_code.trim().to_uppercase();
        self.bank_details.ifsc_code = self.bank_details.ifsc_code.trim().to_uppercase();
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.name, "Name");
        p.required(&self.phone, "Phone");
        p.phone(&self.phone, "Phone");
        p.email(&self.email, "Email");
        p.percentage(self.commission_rate, "Commission rate");
        let ifsc = &self.bank_details.ifsc_code;
        if !ifsc.is_empty() && !is_ifsc(ifsc) {
            p.push("IFSC code is not valid");
        }
        let account = &self.bank_details.account_number;
        if !account.is_empty() && !account.bytes().all(|b| b.is_ascii_digit()) {
            p.push("Account number must contain digits only");
        }
        self.address.check("Address", &mut p);
        p
    }

    fn empty_form() -> Value {
        Promotor {
            is_active: true,
            ..Default::default()
        }
        .to_form()
    }
}
