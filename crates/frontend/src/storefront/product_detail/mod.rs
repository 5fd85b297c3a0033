pub mod purchase_drawer;

use self::purchase_drawer::PurchaseDrawer;
use crate::domain::products::api;
use crate::shared::carousel::Carousel;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::storefront::newsletter::NewsletterSection;
use crate::storefront::product_card::ProductCard;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;

pub(crate) const COLOR_VARIANTS: [&str; 3] = ["Blue", "Grey", "Green"];

const SIZES: [(&str, bool); 4] = [("S", true), ("M", true), ("L", true), ("XL", false)];

const SECTIONS: [(&str, &str); 3] = [
    ("description", "Product Description"),
    ("material", "Material"),
    ("delivery", "Delivery and Returns"),
];

fn section_body(product: &Product, section_id: &str) -> String {
    match section_id {
        "description" => product
            .description
            .clone()
            .unwrap_or_else(|| "A wardrobe staple from the Cometica collection.".to_string()),
        "material" => "98% organic cotton, 2% elastane. Machine wash cold, tumble dry low."
            .to_string(),
        _ => "Free standard delivery on orders over $75. Returns accepted within 30 days \
              of delivery."
            .to_string(),
    }
}

fn render_card() -> Callback<(Product, usize), AnyView> {
    Callback::new(|(product, _index): (Product, usize)| {
        view! { <ProductCard product=product /> }.into_any()
    })
}

/// Product page: gallery, size/color selection, collapsible info
/// sections, a purchase drawer and two related-product strips.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (loading, set_loading) = signal(true);
    let (similar, set_similar) = signal::<Vec<Product>>(Vec::new());
    let (ours, set_ours) = signal::<Vec<Product>>(Vec::new());
    let (selected_size, set_selected_size) = signal(String::new());
    let (selected_color, set_selected_color) = signal(0usize);
    let (selected_image, set_selected_image) = signal(0usize);
    let (expanded, set_expanded) = signal::<HashSet<String>>(HashSet::new());
    let (drawer_open, set_drawer_open) = signal(false);

    // Refetch and reset everything whenever the route id changes
    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();

        set_product.set(None);
        set_loading.set(true);
        set_selected_size.set(String::new());
        set_selected_color.set(0);
        set_selected_image.set(0);
        set_similar.set(Vec::new());
        set_ours.set(Vec::new());
        set_expanded.set(HashSet::new());
        set_drawer_open.set(false);

        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }

        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(loaded) => {
                    let category = loaded.category;
                    let product_id = loaded.to_string_id();
                    set_product.set(Some(loaded));

                    match api::fetch_similar(category, &product_id, 8).await {
                        Ok(list) => set_similar.set(list),
                        Err(e) => {
                            log::error!("ProductDetailPage: failed to fetch similar products: {}", e)
                        }
                    }
                    match api::fetch_recent(8).await {
                        Ok(list) => set_ours.set(list),
                        Err(e) => {
                            log::error!("ProductDetailPage: failed to fetch our products: {}", e)
                        }
                    }
                }
                Err(e) => {
                    log::error!("ProductDetailPage: failed to fetch product {}: {}", id, e);
                    set_product.set(None);
                }
            }
            set_loading.set(false);
        });
    });

    let toggle_section = move |section_id: &'static str| {
        move |_| {
            set_expanded.update(|set| {
                if !set.remove(section_id) {
                    set.insert(section_id.to_string());
                }
            });
        }
    };

    let color_name = Signal::derive(move || {
        COLOR_VARIANTS
            .get(selected_color.get())
            .copied()
            .unwrap_or("Default")
            .to_string()
    });

    let go_back = {
        let navigate = navigate.clone();
        move |_| {
            navigate("/", Default::default());
        }
    };

    view! {
        <div class="product-detail">
            <Show when=move || loading.get()>
                <div class="product-detail__status">
                    <div class="spinner"></div>
                    <p>"Loading product..."</p>
                </div>
            </Show>

            <Show when=move || !loading.get() && product.get().is_none()>
                <div class="product-detail__status">
                    <h1>"Product Not Found"</h1>
                    <button class="button button--primary" on:click=go_back.clone()>
                        "Back to Home"
                    </button>
                </div>
            </Show>

            {move || product.get().map(|p| {
                let images: Vec<String> = std::iter::repeat(p.image_url.clone().unwrap_or_default())
                    .take(4)
                    .collect();
                let out_of_stock = p.stock_status.is_out_of_stock();
                let drawer_product = p.clone();
                let main_image = images.first().cloned().unwrap_or_default();
                let gallery = images.clone();
                let section_product = p.clone();

                view! {
                    <div class="product-detail__inner">
                        <button class="product-detail__back" on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }>
                            {icon("arrow-left")}
                            <span>"Back"</span>
                        </button>

                        <div class="product-detail__grid">
                            <div class="product-detail__gallery">
                                <div class="product-detail__image">
                                    {move || {
                                        let idx = selected_image.get();
                                        let src = gallery.get(idx).cloned().unwrap_or_else(|| main_image.clone());
                                        view! { <img src=src alt="Product" /> }
                                    }}
                                </div>
                                <div class="product-detail__thumbs">
                                    {(0..images.len())
                                        .map(|index| {
                                            let thumb_class = move || {
                                                if selected_image.get() == index {
                                                    "product-detail__thumb product-detail__thumb--active"
                                                } else {
                                                    "product-detail__thumb"
                                                }
                                            };
                                            view! {
                                                <button
                                                    class=thumb_class
                                                    on:click=move |_| set_selected_image.set(index)
                                                    aria-label=format!("Show image {}", index + 1)
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div class="product-detail__info">
                                <span class="product-detail__badge">{p.stock_status.as_str()}</span>
                                <h1 class="product-detail__name">{p.name.clone()}</h1>
                                <div class="product-detail__prices">
                                    <span class="product-detail__price">{format_price(p.sale_price)}</span>
                                    <Show when={
                                        let pct = p.discount_percentage;
                                        move || pct > 0
                                    }>
                                        <span class="product-detail__price--original">
                                            {format_price(p.original_price)}
                                        </span>
                                        <span class="product-detail__discount">
                                            {format!("-{}%", p.discount_percentage)}
                                        </span>
                                    </Show>
                                </div>

                                <div class="product-detail__option">
                                    <h4>"Color: " {move || color_name.get()}</h4>
                                    <div class="product-detail__swatches">
                                        {COLOR_VARIANTS
                                            .iter()
                                            .enumerate()
                                            .map(|(index, name)| {
                                                let swatch_class = move || {
                                                    if selected_color.get() == index {
                                                        "swatch swatch--active"
                                                    } else {
                                                        "swatch"
                                                    }
                                                };
                                                view! {
                                                    <button
                                                        class=swatch_class
                                                        title=*name
                                                        on:click=move |_| set_selected_color.set(index)
                                                    >
                                                        {*name}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                <div class="product-detail__option">
                                    <h4>"Size"</h4>
                                    <div class="product-detail__sizes">
                                        {SIZES
                                            .iter()
                                            .map(|&(size, available)| {
                                                let size_class = move || {
                                                    if selected_size.get() == size {
                                                        "size-btn size-btn--active"
                                                    } else {
                                                        "size-btn"
                                                    }
                                                };
                                                view! {
                                                    <button
                                                        class=size_class
                                                        disabled=!available
                                                        on:click=move |_| set_selected_size.set(size.to_string())
                                                    >
                                                        {size}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                <button
                                    class="button button--primary button--block product-detail__buy"
                                    disabled=out_of_stock
                                    on:click=move |_| set_drawer_open.set(true)
                                >
                                    {icon("shopping-cart")}
                                    {if out_of_stock { " Out of Stock" } else { " Purchase" }}
                                </button>

                                <div class="product-detail__sections">
                                    {SECTIONS
                                        .iter()
                                        .map(|&(section_id, label)| {
                                            let body = section_body(&section_product, section_id);
                                            let is_open = move || expanded.get().contains(section_id);
                                            view! {
                                                <div class="accordion">
                                                    <button
                                                        class="accordion__header"
                                                        on:click=toggle_section(section_id)
                                                    >
                                                        <span>{label}</span>
                                                        {icon("chevron-down")}
                                                    </button>
                                                    <Show when=is_open>
                                                        <div class="accordion__body">{body.clone()}</div>
                                                    </Show>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <Show when=move || drawer_open.get()>
                            <PurchaseDrawer
                                product=drawer_product.clone()
                                selected_size=selected_size
                                color_name=color_name
                                on_close=Callback::new(move |_| {
                                    set_drawer_open.set(false);
                                    set_selected_size.set(String::new());
                                    set_selected_color.set(0);
                                })
                            />
                        </Show>
                    </div>
                }
            })}

            <Show when=move || !similar.get().is_empty()>
                <section class="related">
                    <h2 class="related__title">"SIMILAR PRODUCTS"</h2>
                    {move || view! {
                        <Carousel
                            items=similar.get()
                            render_item=render_card()
                            items_per_view=4
                        />
                    }}
                </section>
            </Show>

            <Show when=move || !ours.get().is_empty()>
                <section class="related">
                    <h2 class="related__title">"OUR PRODUCTS"</h2>
                    {move || view! {
                        <Carousel
                            items=ours.get()
                            render_item=render_card()
                            items_per_view=4
                        />
                    }}
                </section>
            </Show>

            <Show when=move || !loading.get() && product.get().is_some()>
                <NewsletterSection />
            </Show>
        </div>
    }
}
