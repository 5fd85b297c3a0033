use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Fulfilment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            "refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }

    pub fn all() -> [OrderStatus; 6] {
        [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ]
    }
}

/// Payment state, tracked independently of fulfilment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product summary embedded into an order line by the data service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemProduct {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Unit price at the time of purchase
    pub price: f64,
    /// Embedded relation; the data service nests it under the table name
    #[serde(rename = "products", default)]
    pub product: Option<OrderItemProduct>,
}

impl OrderItem {
    /// Line total (unit price times quantity)
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    #[serde(default)]
    pub billing_address: Option<String>,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    #[serde(default)]
    pub discount_amount: f64,
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Sum of line totals
    pub fn items_total(&self) -> f64 {
        self.order_items.iter().map(OrderItem::line_total).sum()
    }

    /// Total as derived from the amount breakdown
    pub fn computed_total(&self) -> f64 {
        self.subtotal + self.tax_amount + self.shipping_amount - self.discount_amount
    }

    /// Whether the stored total matches the breakdown within a cent
    pub fn totals_consistent(&self) -> bool {
        (self.computed_total() - self.total_amount).abs() < 0.01
    }

    pub fn item_count(&self) -> u32 {
        self.order_items.iter().map(|i| i.quantity).sum()
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let now = chrono::Utc::now();
        Order {
            id: OrderId::new_v4(),
            order_number: "ORD-2024-001".into(),
            customer_name: "John Doe".into(),
            customer_email: "john@example.com".into(),
            customer_phone: None,
            shipping_address: "123 Main St, New York, NY 10001".into(),
            billing_address: None,
            status: OrderStatus::Delivered,
            subtotal: 129.97,
            tax_amount: 10.0,
            shipping_amount: 10.0,
            discount_amount: 0.0,
            total_amount: 149.97,
            payment_method: Some("credit_card".into()),
            payment_status: PaymentStatus::Paid,
            created_at: now,
            updated_at: now,
            order_items: vec![
                OrderItem {
                    id: Uuid::new_v4(),
                    product_id: Uuid::new_v4(),
                    quantity: 2,
                    price: 29.99,
                    product: None,
                },
                OrderItem {
                    id: Uuid::new_v4(),
                    product_id: Uuid::new_v4(),
                    quantity: 1,
                    price: 79.99,
                    product: None,
                },
            ],
        }
    }

    #[test]
    fn test_items_total() {
        let order = sample_order();
        assert!((order.items_total() - 139.97).abs() < 1e-9);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_totals_consistent() {
        let order = sample_order();
        assert!(order.totals_consistent());
    }

    #[test]
    fn test_totals_inconsistent_when_total_drifts() {
        let mut order = sample_order();
        order.total_amount = 140.00;
        assert!(!order.totals_consistent());
    }

    #[test]
    fn test_status_wire_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }
}
