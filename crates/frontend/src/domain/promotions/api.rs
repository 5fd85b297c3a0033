//! Promotion fetchers and mutations, plus demo fallback records.

use crate::shared::data::Table;
use chrono::NaiveDate;
use contracts::domain::promotion::{DiscountType, Promotion, PromotionId};

pub async fn fetch_all() -> Result<Vec<Promotion>, String> {
    Table::new("promotions").order("created_at", false).fetch().await
}

pub async fn insert(promotion: &Promotion) -> Result<(), String> {
    Table::new("promotions").insert(promotion).await
}

pub async fn update(promotion: &Promotion) -> Result<(), String> {
    Table::new("promotions")
        .eq("id", promotion.to_string_id())
        .update(promotion)
        .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    Table::new("promotions").eq("id", id).delete().await
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Demo promotions shown when the service is unreachable
pub fn demo_promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: PromotionId::new_v4(),
            name: "Summer Sale 2024".into(),
            description: "Get up to 50% off on all summer collection items".into(),
            discount_type: DiscountType::Percentage,
            discount_percentage: 50.0,
            discount_amount: 0.0,
            min_order_amount: 100.0,
            max_discount_amount: 200.0,
            start_date: date(2024, 6, 1),
            end_date: date(2024, 8, 31),
            is_active: true,
            usage_limit: Some(1000),
            code: "SUMMER50".into(),
            created_at: chrono::Utc::now(),
        },
        Promotion {
            id: PromotionId::new_v4(),
            name: "New Customer Discount".into(),
            description: "Welcome discount for new customers".into(),
            discount_type: DiscountType::Fixed,
            discount_percentage: 0.0,
            discount_amount: 20.0,
            min_order_amount: 50.0,
            max_discount_amount: 20.0,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            is_active: true,
            usage_limit: Some(500),
            code: "WELCOME20".into(),
            created_at: chrono::Utc::now(),
        },
        Promotion {
            id: PromotionId::new_v4(),
            name: "Black Friday Special".into(),
            description: "Massive discounts for Black Friday".into(),
            discount_type: DiscountType::Percentage,
            discount_percentage: 70.0,
            discount_amount: 0.0,
            min_order_amount: 200.0,
            max_discount_amount: 500.0,
            start_date: date(2024, 11, 24),
            end_date: date(2024, 11, 26),
            is_active: false,
            usage_limit: Some(2000),
            code: "BLACKFRIDAY70".into(),
            created_at: chrono::Utc::now(),
        },
    ]
}
