use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::product::Product;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Slide-up order summary. Checkout is simulated: after a short delay
/// the drawer confirms the order with a toast and resets; nothing is
/// persisted.
#[component]
pub fn PurchaseDrawer(
    product: Product,
    #[prop(into)] selected_size: Signal<String>,
    #[prop(into)] color_name: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let (quantity, set_quantity) = signal(1u32);
    let (checking_out, set_checking_out) = signal(false);

    let product_name = product.name.clone();
    let unit_price = product.sale_price;
    let image_url = product.image_url.clone();

    let total = move || unit_price * quantity.get() as f64;

    let decrement = move |_| set_quantity.update(|q| *q = (*q).saturating_sub(1).max(1));
    let increment = move |_| set_quantity.update(|q| *q += 1);

    let checkout = {
        let product_name = product_name.clone();
        move |_| {
            let product_name = product_name.clone();
            set_checking_out.set(true);
            spawn_local(async move {
                TimeoutFuture::new(1500).await;

                let size = selected_size.get_untracked();
                let size_label = if size.is_empty() { "No size".to_string() } else { size };
                let order_total = unit_price * quantity.get_untracked() as f64;

                log::info!(
                    "PurchaseDrawer: checkout for {} ({}) x{}, total {}",
                    product_name,
                    size_label,
                    quantity.get_untracked(),
                    order_total,
                );

                toasts.success(
                    "Order placed successfully!",
                    Some(format!(
                        "Your order for {} ({}) has been placed. Order total: {}",
                        product_name,
                        size_label,
                        format_price(order_total),
                    )),
                );

                set_checking_out.set(false);
                on_close.run(());
            });
        }
    };

    view! {
        <div class="purchase-drawer">
            <div class="purchase-drawer__overlay" on:click=move |_| on_close.run(())></div>
            <div class="purchase-drawer__panel">
                <div class="purchase-drawer__header">
                    <h3>"Order Summary"</h3>
                    <button
                        class="icon-btn"
                        on:click=move |_| on_close.run(())
                        aria-label="Close"
                    >
                        {icon("x")}
                    </button>
                </div>

                <div class="purchase-drawer__product">
                    {image_url.map(|url| view! {
                        <img class="purchase-drawer__image" src=url alt=product_name.clone() />
                    })}
                    <div>
                        <div class="purchase-drawer__name">{product.name.clone()}</div>
                        <div class="purchase-drawer__price">{format_price(unit_price)}</div>
                    </div>
                </div>

                <div class="purchase-drawer__row">
                    <span>"Size"</span>
                    <span>
                        {move || {
                            let size = selected_size.get();
                            if size.is_empty() {
                                "No size selected".to_string()
                            } else {
                                size
                            }
                        }}
                    </span>
                </div>

                <div class="purchase-drawer__row">
                    <span>"Color"</span>
                    <span>{move || color_name.get()}</span>
                </div>

                <div class="purchase-drawer__row">
                    <span>"Quantity"</span>
                    <div class="quantity-stepper">
                        <button
                            class="icon-btn"
                            on:click=decrement
                            disabled=move || quantity.get() <= 1
                            aria-label="Decrease quantity"
                        >
                            {icon("minus")}
                        </button>
                        <span class="quantity-stepper__value">{move || quantity.get()}</span>
                        <button class="icon-btn" on:click=increment aria-label="Increase quantity">
                            {icon("plus")}
                        </button>
                    </div>
                </div>

                <div class="purchase-drawer__row purchase-drawer__row--total">
                    <span>"Total"</span>
                    <span>{move || format_price(total())}</span>
                </div>

                <button
                    class="button button--primary button--block"
                    disabled=move || checking_out.get()
                    on:click=checkout
                >
                    {move || if checking_out.get() { "Placing order..." } else { "Checkout" }}
                </button>
            </div>
        </div>
    }
}
