use crate::storefront::categories::ProductCategories;
use crate::storefront::hero::HeroSection;
use crate::storefront::newsletter::NewsletterSection;
use crate::storefront::trending::TrendingProducts;
use leptos::prelude::*;

/// Landing page: hero, category grid, trending strip, newsletter.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <ProductCategories />
        <TrendingProducts />
        <NewsletterSection />
    }
}
