pub mod aggregate;

pub use aggregate::{
    DiscountType, Promotion, PromotionDto, PromotionId, PromotionStatus,
};
