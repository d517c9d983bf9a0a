use crate::domain::common::{Address, Endpoints, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Order statuses as `(wire value, label)`, in fulfilment order.
pub const ORDER_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("confirmed", "Confirmed"),
    ("packed", "Packed"),
    ("out_for_delivery", "Out for delivery"),
    ("delivered", "Delivered"),
    ("cancelled", "Cancelled"),
];

pub fn status_label(status: &str) -> &str {
    ORDER_STATUSES
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, label)| *label)
        .unwrap_or(status)
}

/// Delivered and cancelled orders accept no further status changes.
pub fn is_terminal_status(status: &str) -> bool {
    matches!(status, "delivered" | "cancelled")
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer order. Orders are placed by the storefront; the admin only
/// moves them through statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Human facing order number ("FST-10293").
    #[serde(deserialize_with = "lenient::string")]
    pub order_id: String,
    pub customer: OrderCustomer,
    pub delivery_address: Address,
    pub items: Vec<OrderItem>,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub total_amount: f64,
    pub status: String,
    pub payment_method: String,
    pub payment_status: String,
    #[serde(deserialize_with = "lenient::reference_id")]
    pub promotor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCustomer {
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(deserialize_with = "lenient::reference_id")]
    pub product: String,
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub variant: String,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub quantity: Option<u32>,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity.unwrap_or(1))
    }
}

/// Body of `PUT /api/orders/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Resource for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.order_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_id.as_str(),
            self.customer.name.as_str(),
            self.customer.phone.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.clone()),
            "payment" => Some(self.payment_status.clone()),
            _ => None,
        }
    }

    fn resource_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_key() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            item: Some("/api/orders/{id}"),
            status: Some("/api/orders/{id}/status"),
            ..Endpoints::read_only("/api/orders")
        }
    }

    fn server_filters() -> &'static [&'static str] {
        &["status"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_storefront_order() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "orderId": 10293,
            "customer": { "name": "Asha", "phone": 9876543210u64 },
            "items": [
                { "product": { "_id": "p1" }, "name": "Rice", "quantity": 2, "price": "60" }
            ],
            "totalAmount": "120",
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(order.order_id, "10293");
        assert_eq!(order.customer.phone, "9876543210");
        assert_eq!(order.items[0].product, "p1");
        assert_eq!(order.items[0].line_total(), 120.0);
        assert_eq!(order.total_amount, 120.0);
        assert_eq!(order.search_fields(), vec!["10293", "Asha", "9876543210"]);
    }

    #[test]
    fn status_helpers() {
        assert_eq!(status_label("out_for_delivery"), "Out for delivery");
        assert_eq!(status_label("on_hold"), "on_hold");
        assert!(is_terminal_status("cancelled"));
        assert!(!is_terminal_status("packed"));
        assert_eq!(Order::server_filters(), ["status"]);
    }

    #[test]
    fn status_update_omits_empty_note() {
        let body = OrderStatusUpdate {
            status: "packed".into(),
            note: None,
        };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "status": "packed" }));
    }
}
