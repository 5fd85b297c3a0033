use crate::admin::dashboard::DashboardPage;
use crate::admin::layout::AdminShell;
use crate::admin::login::AdminLoginPage;
use crate::admin::users::UsersPage;
use crate::domain::orders::ui::OrdersPage;
use crate::domain::products::ui::ProductsPage;
use crate::domain::promotions::ui::PromotionsAdminPage;
use crate::layout::StorefrontShell;
use crate::storefront::coming_soon::ComingSoonPage;
use crate::storefront::home::HomePage;
use crate::storefront::product_detail::ProductDetailPage;
use crate::storefront::promotions_banner::PromotionsBanner;
use crate::storefront::trending::TrendingProducts;
use contracts::domain::product::Category;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ProductsQuery {
    category: Option<String>,
}

/// Catalog page; honors a `?category=` preselection in the URL.
#[component]
fn ProductsShowcasePage() -> impl IntoView {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query: ProductsQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let category = query.category.as_deref().and_then(Category::parse);

    view! {
        <div class="page-section">
            {match category {
                Some(cat) => view! { <TrendingProducts category=cat /> }.into_any(),
                None => view! { <TrendingProducts /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PromotionsShowcasePage() -> impl IntoView {
    view! {
        <div class="page-section">
            <PromotionsBanner />
            <TrendingProducts />
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="button button--primary">"Back to Home"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                // Admin login route
                <Route path=path!("/admin/login") view=AdminLoginPage />

                // Admin routes, gated behind authentication
                <ParentRoute path=path!("/admin") view=AdminShell>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("products") view=ProductsPage />
                    <Route path=path!("orders") view=OrdersPage />
                    <Route path=path!("promotions") view=PromotionsAdminPage />
                    <Route path=path!("users") view=UsersPage />
                </ParentRoute>

                // Public routes
                <ParentRoute path=path!("") view=StorefrontShell>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("products") view=ProductsShowcasePage />
                    <Route path=path!("promotions") view=PromotionsShowcasePage />
                    <Route path=path!("product/:id") view=ProductDetailPage />
                    <Route
                        path=path!("about")
                        view=|| view! {
                            <ComingSoonPage
                                title="About Us"
                                description="Learn more about Cometica's story, mission, and the \
                                             team behind your favorite fashion brand."
                            />
                        }
                    />
                    <Route
                        path=path!("contact")
                        view=|| view! {
                            <ComingSoonPage
                                title="Contact Us"
                                description="Get in touch with our team for support, inquiries, \
                                             or just to say hello. We'd love to hear from you!"
                            />
                        }
                    />
                    <Route
                        path=path!("sort")
                        view=|| view! {
                            <ComingSoonPage
                                title="Sort By"
                                description="Advanced sorting and filtering options to help you \
                                             find exactly what you're looking for."
                            />
                        }
                    />
                    <Route
                        path=path!("blog")
                        view=|| view! {
                            <ComingSoonPage
                                title="Blog"
                                description="Stay updated with the latest fashion trends, styling \
                                             tips, and behind-the-scenes content from Cometica."
                            />
                        }
                    />
                    <Route
                        path=path!("faq")
                        view=|| view! {
                            <ComingSoonPage
                                title="FAQ"
                                description="Find answers to frequently asked questions about our \
                                             products, shipping, returns, and more."
                            />
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
