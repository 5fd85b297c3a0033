use crate::shared::format::format_price;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Catalog card: image, stock badge, prices. Clicking navigates to the
/// product page.
#[component]
pub fn ProductCard(
    product: Product,
    /// Tighter paddings for the mobile grid
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let navigate = use_navigate();
    let id = product.to_string_id();

    let card_class = if compact {
        "product-card product-card--compact"
    } else {
        "product-card"
    };

    let open_product = move |_| {
        navigate(&format!("/product/{}", id), Default::default());
    };

    let out_of_stock = product.stock_status.is_out_of_stock();
    let has_discount = product.discount_percentage > 0;

    view! {
        <div class=card_class on:click=open_product>
            <div class="product-card__media">
                {match product.image_url.clone() {
                    Some(url) => view! {
                        <img
                            class="product-card__image"
                            src=url
                            alt=product.name.clone()
                            loading="lazy"
                        />
                    }
                    .into_any(),
                    None => view! {
                        <span class="product-card__placeholder">"\u{1F455}"</span>
                    }
                    .into_any(),
                }}
                <span class="product-card__status">{product.stock_status.as_str()}</span>
                <Show when=move || out_of_stock>
                    <div class="product-card__overlay">
                        <span>"Out of Stock"</span>
                    </div>
                </Show>
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <div class="product-card__prices">
                    <span class="product-card__price">{format_price(product.sale_price)}</span>
                    <Show when=move || has_discount>
                        <span class="product-card__price--original">
                            {format_price(product.original_price)}
                        </span>
                        <span class="product-card__discount">
                            {format!("-{}%", product.discount_percentage)}
                        </span>
                    </Show>
                </div>
                <p class="product-card__styles">
                    {format!("{} styles available", product.styles_available)}
                </p>
            </div>
        </div>
    }
}
