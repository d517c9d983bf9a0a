use crate::domain::common::{active_label, Endpoints, Resource, WriteMode};
use crate::shared::field_path::Field;
use crate::shared::lenient;
use crate::shared::validation::Problems;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Percentage coupon code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub code: String,
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub percentage: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub max_discount: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub min_order_value: Option<f64>,
    pub valid_from: String,
    pub valid_to: String,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub usage_limit: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_u32", skip_serializing)]
    pub used_count: Option<u32>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()
}

impl Discount {
    pub fn valid_from_date(&self) -> Option<NaiveDate> {
        parse_day(&self.valid_from)
    }

    pub fn valid_to_date(&self) -> Option<NaiveDate> {
        parse_day(&self.valid_to)
    }

    /// Active and `today` inside the validity window (both ends inclusive).
    pub fn is_live_on(&self, today: NaiveDate) -> bool {
        self.is_active
            && self.valid_from_date().map_or(true, |from| from <= today)
            && self.valid_to_date().map_or(true, |to| today <= to)
    }
}

// ============================================================================
// Form fields
// ============================================================================

pub mod fields {
    use super::*;

    pub const CODE: Field<String> = Field::new(&["code"]);
    pub const DESCRIPTION: Field<String> = Field::new(&["description"]);
    pub const PERCENTAGE: Field<String> = Field::new(&["percentage"]);
    pub const MAX_DISCOUNT: Field<String> = Field::new(&["maxDiscount"]);
    pub const MIN_ORDER_VALUE: Field<String> = Field::new(&["minOrderValue"]);
    pub const VALID_FROM: Field<String> = Field::new(&["validFrom"]);
    pub const VALID_TO: Field<String> = Field::new(&["validTo"]);
    pub const USAGE_LIMIT: Field<String> = Field::new(&["usageLimit"]);
    pub const IS_ACTIVE: Field<bool> = Field::new(&["isActive"]);
}

impl Resource for Discount {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.code
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.description.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        (key == "status").then(|| active_label(self.is_active).to_string())
    }

    fn resource_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "discounts"
    }

    fn element_key() -> &'static str {
        "discount"
    }

    fn element_name() -> &'static str {
        "Discount"
    }

    fn list_name() -> &'static str {
        "Discounts"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/api/discounts",
            item: Some("/api/discounts/{id}"),
            create: Some("/api/discounts"),
            update: Some("/api/discounts/{id}"),
            delete: Some("/api/discounts/{id}"),
            status: None,
        }
    }

    fn normalize(&mut self) {
        self.code = self.code.trim().to_uppercase();
    }

    fn validate(&self, _mode: WriteMode) -> Problems {
        let mut p = Problems::new();
        p.required(&self.code, "Code");
        if self.code.contains(char::is_whitespace) {
            p.push("Code cannot contain spaces");
        }
        p.required_number(self.percentage, "Percentage");
        p.percentage(self.percentage, "Percentage");
        p.non_negative(self.max_discount, "Max discount");
        p.non_negative(self.min_order_value, "Min order value");

        let from = self.valid_from_date();
        let to = self.valid_to_date();
        if from.is_none() {
            p.push("Valid from must be a date");
        }
        if to.is_none() {
            p.push("Valid to must be a date");
        }
        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                p.push("Valid to cannot be before valid from");
            }
        }
        p
    }

    fn empty_form() -> Value {
        Discount {
            is_active: true,
            ..Default::default()
        }
        .to_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::field_path::get_path;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn declared_fields_exist_in_the_empty_form() {
        let form = Discount::empty_form();
        for path in [
            fields::CODE.path(),
            fields::DESCRIPTION.path(),
            fields::PERCENTAGE.path(),
            fields::MAX_DISCOUNT.path(),
            fields::MIN_ORDER_VALUE.path(),
            fields::VALID_FROM.path(),
            fields::VALID_TO.path(),
            fields::USAGE_LIMIT.path(),
            fields::IS_ACTIVE.path(),
        ] {
            assert!(get_path(&form, &path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn percentage_bounds_and_date_order() {
        let form = json!({
            "code": "save10",
            "percentage": "120",
            "validFrom": "2026-05-10",
            "validTo": "2026-05-01"
        });
        assert_eq!(
            Discount::from_form(&form, WriteMode::Create).unwrap_err(),
            vec![
                "Percentage must be between 0 and 100".to_string(),
                "Valid to cannot be before valid from".to_string(),
            ]
        );
    }

    #[test]
    fn code_is_uppercased() {
        let form = json!({
            "code": " save10 ",
            "percentage": 10,
            "validFrom": "2026-05-01",
            "validTo": "2026-05-31T18:29:59.000Z"
        });
        let discount = Discount::from_form(&form, WriteMode::Create).unwrap();
        assert_eq!(discount.code, "SAVE10");
        assert_eq!(discount.valid_to_date(), Some(day(2026, 5, 31)));
    }

    #[test]
    fn live_window_is_inclusive() {
        let discount = Discount {
            valid_from: "2026-05-01".into(),
            valid_to: "2026-05-31".into(),
            is_active: true,
            ..Default::default()
        };
        assert!(discount.is_live_on(day(2026, 5, 1)));
        assert!(discount.is_live_on(day(2026, 5, 31)));
        assert!(!discount.is_live_on(day(2026, 6, 1)));
    }

    #[test]
    fn used_count_is_never_sent_back() {
        let discount: Discount =
            serde_json::from_value(json!({ "code": "A", "usedCount": 4 })).unwrap();
        assert_eq!(discount.used_count, Some(4));
        assert!(discount.to_form().get("usedCount").is_none());
    }
}
