use super::{payment_badge_variant, status_badge_variant, status_icon_name};
use crate::shared::components::ui::{Badge, Button, Card, CardContent, CardHeader, CardTitle};
use crate::shared::format::{format_datetime, format_price};
use crate::shared::icons::icon;
use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;

/// Read-only order sheet with a status transition control.
#[component]
pub fn OrderDetails(
    order: Order,
    on_back: Callback<()>,
    /// Receives `(order id, new status)`
    on_change_status: Callback<(String, OrderStatus)>,
) -> impl IntoView {
    let order_id = order.to_string_id();
    let current_status = order.status;

    let items_view = order
        .order_items
        .iter()
        .map(|item| {
            let name = item
                .product
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown product".to_string());
            let image = item.product.as_ref().and_then(|p| p.image_url.clone());
            view! {
                <div class="order-item">
                    {image.map(|url| view! {
                        <img class="order-item__image" src=url alt=name.clone() />
                    })}
                    <div class="order-item__info">
                        <div class="order-item__name">{name}</div>
                        <div class="order-item__qty">
                            {format!("{} x {}", item.quantity, format_price(item.price))}
                        </div>
                    </div>
                    <div class="order-item__total">{format_price(item.line_total())}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <div class="admin-page__header-left">
                    <Button variant="ghost" on_click=Callback::new(move |_| on_back.run(()))>
                        {icon("arrow-left")}
                        " Back to orders"
                    </Button>
                    <h2 class="admin-page__title">{order.order_number.clone()}</h2>
                    <Badge variant=status_badge_variant(order.status)>
                        {icon(status_icon_name(order.status))}
                        {order.status.label()}
                    </Badge>
                </div>
                <div class="admin-page__actions">
                    <label class="form__label" for="order-status">"Status"</label>
                    <select
                        id="order-status"
                        class="form__select"
                        on:change={
                            let order_id = order_id.clone();
                            move |ev| {
                                if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                                    if status != current_status {
                                        on_change_status.run((order_id.clone(), status));
                                    }
                                }
                            }
                        }
                    >
                        {OrderStatus::all()
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=status == current_status
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="order-details__grid">
                <Card>
                    <CardHeader>
                        <CardTitle>{icon("user")} " Customer"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p class="order-details__line">{order.customer_name.clone()}</p>
                        <p class="order-details__line order-details__line--muted">
                            {order.customer_email.clone()}
                        </p>
                        {order.customer_phone.clone().map(|phone| view! {
                            <p class="order-details__line order-details__line--muted">{phone}</p>
                        })}
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>{icon("map-pin")} " Shipping Address"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p class="order-details__line">{order.shipping_address.clone()}</p>
                        {order.billing_address.clone().map(|addr| view! {
                            <p class="order-details__line order-details__line--muted">
                                {format!("Billing: {}", addr)}
                            </p>
                        })}
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>{icon("calendar")} " Timeline"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p class="order-details__line">
                            {format!("Placed {}", format_datetime(&order.created_at.to_rfc3339()))}
                        </p>
                        <p class="order-details__line order-details__line--muted">
                            {format!("Updated {}", format_datetime(&order.updated_at.to_rfc3339()))}
                        </p>
                    </CardContent>
                </Card>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>{icon("package")} " Items"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="order-items">{items_view}</div>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>{icon("dollar-sign")} " Payment"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="order-summary">
                        <div class="order-summary__row">
                            <span>"Subtotal"</span>
                            <span>{format_price(order.subtotal)}</span>
                        </div>
                        <div class="order-summary__row">
                            <span>"Tax"</span>
                            <span>{format_price(order.tax_amount)}</span>
                        </div>
                        <div class="order-summary__row">
                            <span>"Shipping"</span>
                            <span>{format_price(order.shipping_amount)}</span>
                        </div>
                        <Show when={
                            let discount = order.discount_amount;
                            move || discount > 0.0
                        }>
                            <div class="order-summary__row">
                                <span>"Discount"</span>
                                <span>{format!("-{}", format_price(order.discount_amount))}</span>
                            </div>
                        </Show>
                        <div class="order-summary__row order-summary__row--total">
                            <span>"Total"</span>
                            <span>{format_price(order.total_amount)}</span>
                        </div>
                        <div class="order-summary__row">
                            <span>"Payment method"</span>
                            <span>
                                {order
                                    .payment_method
                                    .clone()
                                    .unwrap_or_else(|| "\u{2014}".to_string())}
                            </span>
                        </div>
                        <div class="order-summary__row">
                            <span>"Payment status"</span>
                            <Badge variant=payment_badge_variant(order.payment_status)>
                                {order.payment_status.label()}
                            </Badge>
                        </div>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
