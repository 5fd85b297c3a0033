use crate::domain::common::{EntityId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl EntityId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Merchandise category carried on the product record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "jeans")]
    Jeans,
    #[serde(rename = "shirts")]
    Shirts,
    #[serde(rename = "t-shirts")]
    TShirts,
    #[serde(rename = "sneakers")]
    Sneakers,
}

impl Category {
    /// Wire value as stored by the data service
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Jeans => "jeans",
            Category::Shirts => "shirts",
            Category::TShirts => "t-shirts",
            Category::Sneakers => "sneakers",
        }
    }

    /// Human-readable label for selects and badges
    pub fn label(&self) -> &'static str {
        match self {
            Category::Jeans => "Jeans",
            Category::Shirts => "Shirts",
            Category::TShirts => "T-Shirts",
            Category::Sneakers => "Sneakers",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "jeans" => Some(Category::Jeans),
            "shirts" => Some(Category::Shirts),
            "t-shirts" => Some(Category::TShirts),
            "sneakers" => Some(Category::Sneakers),
            _ => None,
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Jeans,
            Category::Shirts,
            Category::TShirts,
            Category::Sneakers,
        ]
    }
}

/// Stock state shown on cards and in the admin list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Full-Stock")]
    FullStock,
    #[serde(rename = "Out-Of-Stock")]
    OutOfStock,
    #[serde(rename = "Promotions")]
    Promotions,
    #[serde(rename = "Stock")]
    Stock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::FullStock => "Full-Stock",
            StockStatus::OutOfStock => "Out-Of-Stock",
            StockStatus::Promotions => "Promotions",
            StockStatus::Stock => "Stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::FullStock => "Full Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Promotions => "Promotions",
            StockStatus::Stock => "Stock",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Full-Stock" => Some(StockStatus::FullStock),
            "Out-Of-Stock" => Some(StockStatus::OutOfStock),
            "Promotions" => Some(StockStatus::Promotions),
            "Stock" => Some(StockStatus::Stock),
            _ => None,
        }
    }

    pub fn all() -> [StockStatus; 4] {
        [
            StockStatus::FullStock,
            StockStatus::OutOfStock,
            StockStatus::Promotions,
            StockStatus::Stock,
        ]
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockStatus::OutOfStock)
    }
}

impl Default for StockStatus {
    fn default() -> Self {
        StockStatus::FullStock
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub original_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub discount_percentage: u32,
    pub stock_status: StockStatus,
    #[serde(default = "default_styles")]
    pub styles_available: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_styles() -> u32 {
    1
}

impl Product {
    /// Build a new product for insertion, id and timestamps generated here
    pub fn new_for_insert(dto: &ProductDto) -> Self {
        Self {
            id: ProductId::new_v4(),
            name: dto.name.clone(),
            description: dto.description.clone(),
            category: dto.category,
            original_price: dto.original_price,
            sale_price: dto.sale_price,
            discount_percentage: dto.discount_percentage,
            stock_status: dto.stock_status,
            styles_available: dto.styles_available,
            image_url: dto.image_url.clone(),
            metadata: EntityMetadata::new(),
        }
    }

    /// Apply form data to an existing record
    pub fn update(&mut self, dto: &ProductDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.category = dto.category;
        self.original_price = dto.original_price;
        self.sale_price = dto.sale_price;
        self.discount_percentage = dto.discount_percentage;
        self.stock_status = dto.stock_status;
        self.styles_available = dto.styles_available;
        self.image_url = dto.image_url.clone();
        self.metadata.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name cannot be empty".into());
        }
        if self.original_price <= 0.0 {
            return Err("Original price must be positive".into());
        }
        if self.sale_price <= 0.0 {
            return Err("Sale price must be positive".into());
        }
        if self.sale_price > self.original_price {
            return Err("Sale price cannot exceed original price".into());
        }
        if self.styles_available == 0 {
            return Err("At least one style must be available".into());
        }
        Ok(())
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

/// Percentage saved when buying at the sale price, rounded to the nearest
/// whole percent. Zero when the sale price is not actually lower.
pub fn discount_percent(original_price: f64, sale_price: f64) -> u32 {
    if original_price <= 0.0 || sale_price >= original_price {
        return 0;
    }
    (((original_price - sale_price) / original_price) * 100.0).round() as u32
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub original_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub discount_percentage: u32,
    pub stock_status: StockStatus,
    pub styles_available: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            category: Category::Jeans,
            original_price: 0.0,
            sale_price: 0.0,
            discount_percentage: 0,
            stock_status: StockStatus::FullStock,
            styles_available: 1,
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(100.0, 50.0), 50);
        assert_eq!(discount_percent(120.0, 80.0), 33);
        assert_eq!(discount_percent(80.0, 60.0), 25);
    }

    #[test]
    fn test_discount_percent_degenerate() {
        assert_eq!(discount_percent(0.0, 50.0), 0);
        assert_eq!(discount_percent(50.0, 50.0), 0);
        assert_eq!(discount_percent(50.0, 60.0), 0);
    }

    #[test]
    fn test_validate_rejects_inverted_prices() {
        let mut dto = ProductDto::default();
        dto.name = "Blue Jeans".into();
        dto.original_price = 50.0;
        dto.sale_price = 80.0;
        let product = Product::new_for_insert(&dto);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_category_wire_round_trip() {
        for cat in Category::all() {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        let json = serde_json::to_string(&Category::TShirts).unwrap();
        assert_eq!(json, "\"t-shirts\"");
    }

    #[test]
    fn test_stock_status_wire_round_trip() {
        for status in StockStatus::all() {
            assert_eq!(StockStatus::parse(status.as_str()), Some(status));
        }
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out-Of-Stock\"");
    }
}
