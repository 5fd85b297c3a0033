use crate::shared::carousel::Carousel;
use crate::storefront::product_card::ProductCard;
use contracts::domain::product::{Category, Product};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::products::api;

fn render_card() -> Callback<(Product, usize), AnyView> {
    Callback::new(|(product, _index): (Product, usize)| {
        view! { <ProductCard product=product /> }.into_any()
    })
}

fn render_card_compact() -> Callback<(Product, usize), AnyView> {
    Callback::new(|(product, _index): (Product, usize)| {
        view! { <ProductCard product=product compact=true /> }.into_any()
    })
}

/// "Trending now" strip: the latest products in responsive carousels.
/// Desktop gets two stacked rows over halves of the list, tablets one
/// row, phones a single-item stepper with position dots.
#[component]
pub fn TrendingProducts(
    /// Restrict the strip to one category
    #[prop(optional)]
    category: Option<Category>,
) -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_recent(20).await {
                Ok(mut list) => {
                    if let Some(cat) = category {
                        list.retain(|p| p.category == cat);
                    }
                    set_products.set(list);
                }
                Err(e) => {
                    log::error!("TrendingProducts: failed to fetch products: {}", e);
                    set_error.set(Some("Failed to load products".to_string()));
                    set_products.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <section class="trending">
            <div class="trending__inner">
                <div class="trending__heading">
                    <h2>"TRENDING NOW"</h2>
                </div>

                <Show when=move || loading.get()>
                    <div class="trending__status">
                        <div class="spinner"></div>
                        <p>"Loading products..."</p>
                    </div>
                </Show>

                <Show when=move || !loading.get() && error.get().is_some()>
                    <div class="trending__status trending__status--error">
                        <p>{move || error.get().unwrap_or_default()}</p>
                        <button class="button button--primary" on:click=move |_| fetch()>
                            "Try Again"
                        </button>
                    </div>
                </Show>

                <Show when=move || {
                    !loading.get() && error.get().is_none() && products.get().is_empty()
                }>
                    <div class="trending__status">
                        <p>"No products available at the moment."</p>
                    </div>
                </Show>

                <Show when=move || {
                    !loading.get() && error.get().is_none() && !products.get().is_empty()
                }>
                    // Large screens: two stacked rows over different products
                    <div class="trending__rows trending__rows--desktop">
                        {move || {
                            let list = products.get();
                            let mid = list.len().div_ceil(2);
                            let first: Vec<Product> = list[..mid].to_vec();
                            let second: Vec<Product> = list[mid..].to_vec();
                            view! {
                                <Carousel
                                    items=first
                                    render_item=render_card()
                                    items_per_view=4
                                />
                                <Carousel
                                    items=second
                                    render_item=render_card()
                                    items_per_view=4
                                />
                            }
                        }}
                    </div>

                    // Tablet: one row
                    <div class="trending__rows trending__rows--tablet">
                        {move || {
                            view! {
                                <Carousel
                                    items=products.get()
                                    render_item=render_card()
                                    items_per_view=3
                                />
                            }
                        }}
                    </div>

                    // Mobile: single-item stepper with jump-to dots
                    <div class="trending__rows trending__rows--mobile">
                        {move || {
                            view! {
                                <Carousel
                                    items=products.get()
                                    render_item=render_card_compact()
                                    items_per_view=1
                                    show_dots=true
                                />
                            }
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}
