pub mod categories;
pub mod coming_soon;
pub mod hero;
pub mod home;
pub mod newsletter;
pub mod product_card;
pub mod product_detail;
pub mod promotions_banner;
pub mod search_drawer;
pub mod trending;
