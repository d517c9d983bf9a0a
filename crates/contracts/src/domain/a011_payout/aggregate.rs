//! Promotor commission payouts.
//!
//! The backend exposes the same money in two shapes: one row per order
//! (`OrderPayout`) and one row per promotor with totals
//! (`AggregatedPayout`). Each shape has its own status endpoint; the
//! table renders either through [`PayoutRow`].

use crate::domain::common::{Endpoints, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const PAYOUT_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("processing", "Processing"),
    ("paid", "Paid"),
    ("failed", "Failed"),
];

pub fn payout_status_label(status: &str) -> &str {
    PAYOUT_STATUSES
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, label)| *label)
        .unwrap_or(status)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PayoutView {
    #[default]
    Aggregated,
    PerOrder,
}

impl PayoutView {
    pub fn label(self) -> &'static str {
        match self {
            PayoutView::Aggregated => "By promotor",
            PayoutView::PerOrder => "By order",
        }
    }
}

/// Promotor reference; the backend sends either an id or `{_id, name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromotorRef {
    pub id: String,
    pub name: String,
}

impl<'de> Deserialize<'de> for PromotorRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(id) => PromotorRef {
                id,
                name: String::new(),
            },
            Value::Object(map) => {
                let text = |key: &str| map.get(key).and_then(Value::as_str).unwrap_or_default();
                PromotorRef {
                    id: if text("_id").is_empty() { text("id") } else { text("_id") }.to_string(),
                    name: text("name").to_string(),
                }
            }
            _ => PromotorRef::default(),
        })
    }
}

/// Body of both payout status endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl PayoutStatusUpdate {
    pub fn paid(transaction_id: Option<String>) -> Self {
        Self {
            status: "paid".to_string(),
            transaction_id: transaction_id.filter(|t| !t.trim().is_empty()),
        }
    }
}

/// Shared view over both payout shapes.
pub trait PayoutRow {
    /// Statuses a row of this shape can carry, for the status filter.
    const STATUS_OPTIONS: &'static [(&'static str, &'static str)];

    fn row_key(&self) -> &str;
    fn promotor_name(&self) -> &str;
    /// Order number, or an order count for aggregated rows.
    fn reference(&self) -> String;
    fn amount(&self) -> f64;
    fn status(&self) -> &str;
    fn can_mark_paid(&self) -> bool;
}

// ============================================================================
// Per-order rows
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderPayout {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub promotor: PromotorRef,
    #[serde(deserialize_with = "lenient::string")]
    pub order_id: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub order_amount: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub amount: f64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PayoutRow for OrderPayout {
    const STATUS_OPTIONS: &'static [(&'static str, &'static str)] = PAYOUT_STATUSES;

    fn row_key(&self) -> &str {
        &self.id
    }

    fn promotor_name(&self) -> &str {
        &self.promotor.name
    }

    fn reference(&self) -> String {
        self.order_id.clone()
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn can_mark_paid(&self) -> bool {
        self.status != "paid"
    }
}

impl Resource for OrderPayout {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.order_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.promotor.name.as_str(), self.order_id.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        (key == "status").then(|| self.status.clone())
    }

    fn resource_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "payouts"
    }

    fn element_key() -> &'static str {
        "payout"
    }

    fn element_name() -> &'static str {
        "Payout"
    }

    fn list_name() -> &'static str {
        "Payouts"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            status: Some("/api/payouts/{id}/status"),
            ..Endpoints::read_only("/api/payouts")
        }
    }
}

// ============================================================================
// Per-promotor rows
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatedPayout {
    pub promotor: PromotorRef,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub order_count: Option<u32>,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub total_amount: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub pending_amount: f64,
}

impl AggregatedPayout {
    pub fn derived_status(&self) -> &'static str {
        if self.pending_amount > 0.0 {
            "pending"
        } else {
            "paid"
        }
    }
}

impl PayoutRow for AggregatedPayout {
    const STATUS_OPTIONS: &'static [(&'static str, &'static str)] =
        &[("pending", "Pending"), ("paid", "Paid")];

    fn row_key(&self) -> &str {
        &self.promotor.id
    }

    fn promotor_name(&self) -> &str {
        &self.promotor.name
    }

    fn reference(&self) -> String {
        match self.order_count.unwrap_or_default() {
            1 => "1 order".to_string(),
            n => format!("{n} orders"),
        }
    }

    fn amount(&self) -> f64 {
        self.pending_amount
    }

    fn status(&self) -> &str {
        self.derived_status()
    }

    fn can_mark_paid(&self) -> bool {
        self.pending_amount > 0.0
    }
}

impl Resource for AggregatedPayout {
    /// Rows are keyed by promotor; the status route takes the promotor id.
    fn id(&self) -> &str {
        &self.promotor.id
    }

    fn display_name(&self) -> &str {
        &self.promotor.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.promotor.name.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        (key == "status").then(|| self.derived_status().to_string())
    }

    fn resource_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "payouts"
    }

    fn element_key() -> &'static str {
        "payout"
    }

    fn element_name() -> &'static str {
        "Promotor payout"
    }

    fn list_name() -> &'static str {
        "Payouts by promotor"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            status: Some("/api/payouts/promotor/{id}/status"),
            ..Endpoints::read_only("/api/payouts/summary")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn promotor_reference_accepts_both_shapes() {
        let by_id: PromotorRef = serde_json::from_value(json!("p1")).unwrap();
        assert_eq!(by_id.id, "p1");
        let populated: PromotorRef =
            serde_json::from_value(json!({ "_id": "p2", "name": "Meena" })).unwrap();
        assert_eq!(populated, PromotorRef { id: "p2".into(), name: "Meena".into() });
    }

    #[test]
    fn views_use_different_status_routes() {
        assert_eq!(OrderPayout::endpoints().status, Some("/api/payouts/{id}/status"));
        assert_eq!(
            AggregatedPayout::endpoints().status,
            Some("/api/payouts/promotor/{id}/status")
        );
        assert_eq!(AggregatedPayout::endpoints().delete, None);
    }

    #[test]
    fn aggregated_rows_derive_status_from_pending_amount() {
        let row: AggregatedPayout = serde_json::from_value(json!({
            "promotor": { "_id": "p1", "name": "Meena" },
            "orderCount": 3,
            "totalAmount": 450,
            "paidAmount": 300,
            "pendingAmount": 150
        }))
        .unwrap();
        assert_eq!(row.status(), "pending");
        assert_eq!(row.reference(), "3 orders");
        assert_eq!(row.amount(), 150.0);
        assert!(row.can_mark_paid());
        assert_eq!(row.id(), "p1");
    }

    #[test]
    fn aggregated_filter_offers_exactly_the_derived_statuses() {
        let row = |pending: f64| AggregatedPayout {
            pending_amount: pending,
            ..Default::default()
        };
        let derived: Vec<&str> = [row(150.0), row(0.0)].iter().map(|r| r.derived_status()).collect();
        let offered: Vec<&str> = AggregatedPayout::STATUS_OPTIONS.iter().map(|(v, _)| *v).collect();
        assert_eq!(derived, offered);
        for (value, label) in AggregatedPayout::STATUS_OPTIONS {
            assert_eq!(payout_status_label(value), *label);
        }
        assert_eq!(OrderPayout::STATUS_OPTIONS, PAYOUT_STATUSES);
    }

    #[test]
    fn order_rows_search_by_promotor_and_order() {
        let row: OrderPayout = serde_json::from_value(json!({
            "_id": "x1",
            "promotor": { "_id": "p1", "name": "Meena" },
            "orderId": "FST-1",
            "amount": "25.5",
            "status": "paid"
        }))
        .unwrap();
        assert_eq!(row.search_fields(), vec!["Meena", "FST-1"]);
        assert!(!row.can_mark_paid());
    }

    #[test]
    fn blank_transaction_id_is_not_sent() {
        let body = serde_json::to_value(PayoutStatusUpdate::paid(Some(" ".into()))).unwrap();
        assert_eq!(body, json!({ "status": "paid" }));
    }
}
