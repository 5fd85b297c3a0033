//! Order fetchers and mutations, plus the built-in demo records shown
//! when the data service is unreachable.

use crate::shared::data::Table;
use chrono::TimeZone;
use contracts::domain::order::{
    Order, OrderId, OrderItem, OrderItemProduct, OrderStatus, PaymentStatus,
};
use uuid::Uuid;

/// Embed order lines and their product summaries in one request
const ORDER_SELECT: &str = "*,order_items(*,products(name,image_url))";

pub async fn fetch_all() -> Result<Vec<Order>, String> {
    Table::new("orders")
        .select(ORDER_SELECT)
        .order("created_at", false)
        .fetch()
        .await
}

pub async fn update_status(id: &str, status: OrderStatus) -> Result<(), String> {
    let patch = serde_json::json!({ "status": status });
    Table::new("orders").eq("id", id).update(&patch).await
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<chrono::Utc> {
    chrono::Utc
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_else(chrono::Utc::now)
}

fn demo_item(name: &str, image: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem {
        id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        quantity,
        price,
        product: Some(OrderItemProduct {
            name: name.to_string(),
            image_url: Some(image.to_string()),
        }),
    }
}

/// Demo orders shown when the service is unreachable
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new_v4(),
            order_number: "ORD-2024-001".into(),
            customer_name: "John Doe".into(),
            customer_email: "john@example.com".into(),
            customer_phone: Some("+1 234 567 8900".into()),
            shipping_address: "123 Main St, New York, NY 10001".into(),
            billing_address: Some("123 Main St, New York, NY 10001".into()),
            status: OrderStatus::Delivered,
            subtotal: 129.97,
            tax_amount: 10.0,
            shipping_amount: 10.0,
            discount_amount: 0.0,
            total_amount: 149.97,
            payment_method: Some("credit_card".into()),
            payment_status: PaymentStatus::Paid,
            created_at: ts(2024, 1, 15, 10, 30),
            updated_at: ts(2024, 1, 18, 14, 20),
            order_items: vec![
                demo_item("Classic White T-Shirt", "/img/t-shirt.avif", 2, 29.99),
                demo_item("Blue Denim Jeans", "/img/jeans.avif", 1, 79.99),
            ],
        },
        Order {
            id: OrderId::new_v4(),
            order_number: "ORD-2024-002".into(),
            customer_name: "Jane Smith".into(),
            customer_email: "jane@example.com".into(),
            customer_phone: Some("+1 234 567 8901".into()),
            shipping_address: "456 Oak Ave, Los Angeles, CA 90210".into(),
            billing_address: Some("456 Oak Ave, Los Angeles, CA 90210".into()),
            status: OrderStatus::Processing,
            subtotal: 79.99,
            tax_amount: 6.40,
            shipping_amount: 3.60,
            discount_amount: 0.0,
            total_amount: 89.99,
            payment_method: Some("paypal".into()),
            payment_status: PaymentStatus::Paid,
            created_at: ts(2024, 1, 16, 15, 45),
            updated_at: ts(2024, 1, 16, 15, 45),
            order_items: vec![demo_item("Blue Denim Jeans", "/img/jeans.avif", 1, 79.99)],
        },
        Order {
            id: OrderId::new_v4(),
            order_number: "ORD-2024-003".into(),
            customer_name: "Mike Johnson".into(),
            customer_email: "mike@example.com".into(),
            customer_phone: Some("+1 234 567 8902".into()),
            shipping_address: "789 Pine St, Chicago, IL 60601".into(),
            billing_address: Some("789 Pine St, Chicago, IL 60601".into()),
            status: OrderStatus::Pending,
            subtotal: 179.98,
            tax_amount: 14.40,
            shipping_amount: 5.60,
            discount_amount: 0.0,
            total_amount: 199.98,
            payment_method: Some("credit_card".into()),
            payment_status: PaymentStatus::Pending,
            created_at: ts(2024, 1, 17, 9, 15),
            updated_at: ts(2024, 1, 17, 9, 15),
            order_items: vec![demo_item("Running Sneakers", "/img/sneakers.avif", 2, 89.99)],
        },
    ]
}
