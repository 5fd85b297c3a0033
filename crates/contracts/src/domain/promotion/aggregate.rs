use crate::domain::common::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique promotion identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromotionId(pub Uuid);

impl PromotionId {
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

impl EntityId for PromotionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PromotionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// How the promotion discount is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Fixed => "Fixed Amount",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "percentage" => Some(DiscountType::Percentage),
            "fixed" => Some(DiscountType::Fixed),
            _ => None,
        }
    }
}

/// Lifecycle state derived from the active flag and the date range.
/// Never stored; recomputed against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionStatus {
    Active,
    Upcoming,
    Expired,
    Inactive,
}

impl PromotionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PromotionStatus::Active => "Active",
            PromotionStatus::Upcoming => "Upcoming",
            PromotionStatus::Expired => "Expired",
            PromotionStatus::Inactive => "Inactive",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionStatus::Active => "active",
            PromotionStatus::Upcoming => "upcoming",
            PromotionStatus::Expired => "expired",
            PromotionStatus::Inactive => "inactive",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Marketing promotion with a redemption code and a validity window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub min_order_amount: f64,
    #[serde(default)]
    pub max_discount_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Promotion {
    pub fn new_for_insert(dto: &PromotionDto) -> Self {
        Self {
            id: PromotionId::new_v4(),
            name: dto.name.clone(),
            description: dto.description.clone(),
            discount_type: dto.discount_type,
            discount_percentage: dto.discount_percentage,
            discount_amount: dto.discount_amount,
            min_order_amount: dto.min_order_amount,
            max_discount_amount: dto.max_discount_amount,
            start_date: dto.start_date,
            end_date: dto.end_date,
            is_active: dto.is_active,
            usage_limit: dto.usage_limit,
            code: dto.code.clone(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn update(&mut self, dto: &PromotionDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.discount_type = dto.discount_type;
        self.discount_percentage = dto.discount_percentage;
        self.discount_amount = dto.discount_amount;
        self.min_order_amount = dto.min_order_amount;
        self.max_discount_amount = dto.max_discount_amount;
        self.start_date = dto.start_date;
        self.end_date = dto.end_date;
        self.is_active = dto.is_active;
        self.usage_limit = dto.usage_limit;
        self.code = dto.code.clone();
    }

    /// Lifecycle state relative to `today`.
    ///
    /// An inactive flag wins over the date range; within the range and
    /// active means running.
    pub fn lifecycle_status(&self, today: NaiveDate) -> PromotionStatus {
        if !self.is_active {
            return PromotionStatus::Inactive;
        }
        if self.start_date > today {
            return PromotionStatus::Upcoming;
        }
        if self.end_date < today {
            return PromotionStatus::Expired;
        }
        PromotionStatus::Active
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Promotion name cannot be empty".into());
        }
        if self.code.trim().is_empty() {
            return Err("Promotion code cannot be empty".into());
        }
        if self.end_date < self.start_date {
            return Err("End date cannot be before start date".into());
        }
        match self.discount_type {
            DiscountType::Percentage => {
                if self.discount_percentage <= 0.0 || self.discount_percentage > 100.0 {
                    return Err("Percentage discount must be between 1 and 100".into());
                }
            }
            DiscountType::Fixed => {
                if self.discount_amount <= 0.0 {
                    return Err("Fixed discount amount must be positive".into());
                }
            }
        }
        Ok(())
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub min_order_amount: f64,
    #[serde(default)]
    pub max_discount_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    pub code: String,
}

impl Default for PromotionDto {
    fn default() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            name: String::new(),
            description: String::new(),
            discount_type: DiscountType::Percentage,
            discount_percentage: 0.0,
            discount_amount: 0.0,
            min_order_amount: 0.0,
            max_discount_amount: 0.0,
            start_date: today,
            end_date: today,
            is_active: true,
            usage_limit: None,
            code: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(start: NaiveDate, end: NaiveDate, is_active: bool) -> Promotion {
        Promotion {
            id: PromotionId::new_v4(),
            name: "Summer Sale".into(),
            description: "Up to 50% off".into(),
            discount_type: DiscountType::Percentage,
            discount_percentage: 50.0,
            discount_amount: 0.0,
            min_order_amount: 100.0,
            max_discount_amount: 200.0,
            start_date: start,
            end_date: end,
            is_active,
            usage_limit: Some(1000),
            code: "SUMMER50".into(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_lifecycle_active_within_range() {
        let p = sample(date(2024, 6, 1), date(2024, 8, 31), true);
        assert_eq!(
            p.lifecycle_status(date(2024, 7, 15)),
            PromotionStatus::Active
        );
        // boundary days count as running
        assert_eq!(
            p.lifecycle_status(date(2024, 6, 1)),
            PromotionStatus::Active
        );
        assert_eq!(
            p.lifecycle_status(date(2024, 8, 31)),
            PromotionStatus::Active
        );
    }

    #[test]
    fn test_lifecycle_upcoming_and_expired() {
        let p = sample(date(2024, 6, 1), date(2024, 8, 31), true);
        assert_eq!(
            p.lifecycle_status(date(2024, 5, 31)),
            PromotionStatus::Upcoming
        );
        assert_eq!(
            p.lifecycle_status(date(2024, 9, 1)),
            PromotionStatus::Expired
        );
    }

    #[test]
    fn test_lifecycle_inactive_wins() {
        let p = sample(date(2024, 6, 1), date(2024, 8, 31), false);
        assert_eq!(
            p.lifecycle_status(date(2024, 7, 15)),
            PromotionStatus::Inactive
        );
    }

    #[test]
    fn test_validate_date_order() {
        let p = sample(date(2024, 8, 31), date(2024, 6, 1), true);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_percentage_bounds() {
        let mut p = sample(date(2024, 6, 1), date(2024, 8, 31), true);
        p.discount_percentage = 0.0;
        assert!(p.validate().is_err());
        p.discount_percentage = 120.0;
        assert!(p.validate().is_err());
        p.discount_percentage = 70.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_fixed_amount() {
        let mut p = sample(date(2024, 1, 1), date(2024, 12, 31), true);
        p.discount_type = DiscountType::Fixed;
        p.discount_amount = 0.0;
        assert!(p.validate().is_err());
        p.discount_amount = 20.0;
        assert!(p.validate().is_ok());
    }
}
