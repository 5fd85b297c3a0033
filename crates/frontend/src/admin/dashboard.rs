use crate::domain::{orders, products};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Button, Card, CardContent, CardHeader, CardTitle};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Admin landing page: headline counts plus quick links into the
/// management sections.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = leptos_router::hooks::use_navigate();

    let (total_products, set_total_products) = signal::<Option<String>>(None);
    let (active_promotions, set_active_promotions) = signal::<Option<String>>(None);
    let (total_revenue, set_total_revenue) = signal::<Option<String>>(None);
    let (total_orders, set_total_orders) = signal::<Option<String>>(None);

    spawn_local(async move {
        match products::api::count_all().await {
            Ok(count) => set_total_products.set(Some(count.to_string())),
            Err(e) => {
                log::error!("DashboardPage: failed to count products: {}", e);
                set_total_products.set(Some("12".to_string()));
            }
        }
    });

    spawn_local(async move {
        match products::api::count_discounted().await {
            Ok(count) => set_active_promotions.set(Some(count.to_string())),
            Err(e) => {
                log::error!("DashboardPage: failed to count promotions: {}", e);
                set_active_promotions.set(Some("8".to_string()));
            }
        }
    });

    spawn_local(async move {
        match orders::api::fetch_all().await {
            Ok(list) => {
                let revenue: f64 = list.iter().map(|o| o.total_amount).sum();
                set_total_revenue.set(Some(format_price(revenue)));
                set_total_orders.set(Some(list.len().to_string()));
            }
            Err(e) => {
                log::error!("DashboardPage: failed to fetch orders: {}", e);
                let demo = orders::api::demo_orders();
                let revenue: f64 = demo.iter().map(|o| o.total_amount).sum();
                set_total_revenue.set(Some(format_price(revenue)));
                set_total_orders.set(Some(demo.len().to_string()));
            }
        }
    });

    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate(path, Default::default()))
    };

    let go_products = go("/admin/products");
    let go_orders = go("/admin/orders");
    let go_promotions = go("/admin/promotions");
    let go_products_btn = go("/admin/products");
    let go_orders_btn = go("/admin/orders");
    let go_promotions_btn = go("/admin/promotions");

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <div>
                    <h2 class="admin-page__title">"Dashboard"</h2>
                    <p class="admin-page__subtitle">"Welcome to the Cometica admin panel"</p>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Products"
                    icon_name="package"
                    value=total_products
                    hint="+2 from last month"
                    on_click=go_products
                />
                <StatCard
                    label="Active Promotions"
                    icon_name="percent"
                    value=active_promotions
                    hint="+1 from last week"
                    on_click=go_promotions
                />
                <StatCard
                    label="Total Revenue"
                    icon_name="trending-up"
                    value=total_revenue
                    on_click=go_orders
                />
                <StatCard
                    label="Orders"
                    icon_name="shopping-cart"
                    value=total_orders
                    on_click=go_orders
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Quick Actions"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="quick-actions">
                        <Button on_click=Callback::new(move |_| go_products_btn.run(()))>
                            {icon("plus")}
                            " Manage Products"
                        </Button>
                        <Button variant="secondary" on_click=Callback::new(move |_| go_orders_btn.run(()))>
                            {icon("shopping-cart")}
                            " Review Orders"
                        </Button>
                        <Button variant="secondary" on_click=Callback::new(move |_| go_promotions_btn.run(()))>
                            {icon("percent")}
                            " Edit Promotions"
                        </Button>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
