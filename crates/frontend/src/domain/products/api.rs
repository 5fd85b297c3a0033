//! Product fetchers and mutations against the hosted data service.

use crate::shared::data::Table;
use contracts::domain::common::EntityMetadata;
use contracts::domain::product::{Category, Product, ProductId, StockStatus};

/// Newest products first, bounded
pub async fn fetch_recent(limit: usize) -> Result<Vec<Product>, String> {
    Table::new("products")
        .order("created_at", false)
        .limit(limit)
        .fetch()
        .await
}

/// Full catalog, newest first
pub async fn fetch_all() -> Result<Vec<Product>, String> {
    Table::new("products").order("created_at", false).fetch().await
}

pub async fn fetch_by_id(id: &str) -> Result<Product, String> {
    Table::new("products").eq("id", id).fetch_one().await
}

/// Products sharing a category, excluding the one being viewed
pub async fn fetch_similar(
    category: Category,
    exclude_id: &str,
    limit: usize,
) -> Result<Vec<Product>, String> {
    Table::new("products")
        .eq("category", category.as_str())
        .neq("id", exclude_id)
        .order("created_at", false)
        .limit(limit)
        .fetch()
        .await
}

pub async fn insert(product: &Product) -> Result<(), String> {
    Table::new("products").insert(product).await
}

pub async fn update(product: &Product) -> Result<(), String> {
    Table::new("products")
        .eq("id", product.to_string_id())
        .update(product)
        .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    Table::new("products").eq("id", id).delete().await
}

pub async fn count_all() -> Result<usize, String> {
    Table::new("products").count().await
}

/// Products currently carrying a discount
pub async fn count_discounted() -> Result<usize, String> {
    Table::new("products").gt("discount_percentage", 0).count().await
}

fn demo_product(
    name: &str,
    category: Category,
    original_price: f64,
    sale_price: f64,
    discount_percentage: u32,
    stock_status: StockStatus,
    styles_available: u32,
    image_url: &str,
) -> Product {
    Product {
        id: ProductId::new_v4(),
        name: name.to_string(),
        description: None,
        category,
        original_price,
        sale_price,
        discount_percentage,
        stock_status,
        styles_available,
        image_url: Some(image_url.to_string()),
        metadata: EntityMetadata::new(),
    }
}

/// Demo catalog shown when the service is unreachable
pub fn demo_products() -> Vec<Product> {
    vec![
        demo_product(
            "Blue Jeans",
            Category::Jeans,
            100.0,
            50.0,
            50,
            StockStatus::FullStock,
            2,
            "/img/jeans.avif",
        ),
        demo_product(
            "T-Shirt Green Kids",
            Category::TShirts,
            100.0,
            50.0,
            50,
            StockStatus::OutOfStock,
            2,
            "/img/t-shirt.avif",
        ),
        demo_product(
            "Classic Sneakers",
            Category::Sneakers,
            120.0,
            80.0,
            33,
            StockStatus::FullStock,
            3,
            "/img/sneakers.avif",
        ),
        demo_product(
            "Casual Shirt",
            Category::Shirts,
            80.0,
            60.0,
            25,
            StockStatus::FullStock,
            1,
            "/img/shirts.avif",
        ),
    ]
}
