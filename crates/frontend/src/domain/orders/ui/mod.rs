pub mod details;

use self::details::OrderDetails;
use crate::domain::orders::api;
use crate::shared::components::ui::Badge;
use crate::shared::format::{format_date, format_price};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::toast::use_toasts;
use contracts::domain::order::{Order, OrderStatus, PaymentStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        let term = filter.to_lowercase();
        self.order_number.to_lowercase().contains(&term)
            || self.customer_name.to_lowercase().contains(&term)
            || self.customer_email.to_lowercase().contains(&term)
    }
}

pub(crate) fn status_badge_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "success",
        OrderStatus::Shipped | OrderStatus::Processing => "primary",
        OrderStatus::Pending => "warning",
        OrderStatus::Cancelled | OrderStatus::Refunded => "error",
    }
}

pub(crate) fn status_icon_name(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "clock",
        OrderStatus::Processing => "package",
        OrderStatus::Shipped => "truck",
        OrderStatus::Delivered => "check-circle",
        OrderStatus::Cancelled => "x-circle",
        OrderStatus::Refunded => "alert-circle",
    }
}

pub(crate) fn payment_badge_variant(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "success",
        PaymentStatus::Pending => "warning",
        PaymentStatus::Refunded | PaymentStatus::Failed => "error",
    }
}

/// Admin orders section: filterable list with a per-order details view.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let toasts = use_toasts();
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal("all".to_string());
    let (selected, set_selected) = signal::<Option<Order>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => set_orders.set(list),
                Err(e) => {
                    log::error!("OrdersPage: failed to fetch orders: {}", e);
                    toasts.warning(
                        "Using demo data",
                        Some("Unable to connect to database. Showing demo orders.".to_string()),
                    );
                    set_orders.set(api::demo_orders());
                }
            }
            set_loading.set(false);
        });
    };

    let filtered = move || {
        let mut list = filter_list(&orders.get(), &search.get());
        let status = status_filter.get();
        if status != "all" {
            list.retain(|o| o.status.as_str() == status);
        }
        list
    };

    // Reflect a status change into the cached list and the open details
    let apply_status = move |id: String, status: OrderStatus| {
        set_orders.update(|list| {
            if let Some(order) = list.iter_mut().find(|o| o.to_string_id() == id) {
                order.status = status;
            }
        });
        set_selected.update(|sel| {
            if let Some(order) = sel {
                if order.to_string_id() == id {
                    order.status = status;
                }
            }
        });
    };

    let change_status = Callback::new(move |(id, status): (String, OrderStatus)| {
        let id_for_update = id.clone();
        spawn_local(async move {
            match api::update_status(&id_for_update, status).await {
                Ok(()) => {
                    apply_status(id_for_update, status);
                    toasts.success(
                        "Order status updated",
                        Some(format!("Order is now {}.", status.label().to_lowercase())),
                    );
                }
                Err(e) => {
                    log::error!("OrdersPage: failed to update order status: {}", e);
                    toasts.error("Failed to update order status", Some(e));
                }
            }
        });
    });

    fetch();

    let status_options = move || {
        let mut options = vec![("all".to_string(), "All Orders".to_string())];
        options.extend(
            OrderStatus::all()
                .into_iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        );
        options
    };

    view! {
        <Show
            when=move || selected.get().is_none()
            fallback=move || view! {
                <OrderDetails
                    order=selected.get().unwrap_or_else(|| api::demo_orders().remove(0))
                    on_back=Callback::new(move |_| set_selected.set(None))
                    on_change_status=change_status
                />
            }
        >
            <div class="admin-page">
                <div class="admin-page__header">
                    <div>
                        <h2 class="admin-page__title">"Orders"</h2>
                        <p class="admin-page__subtitle">"Track and manage customer orders"</p>
                    </div>
                </div>

                <div class="admin-page__toolbar">
                    <div class="search-field">
                        {icon("search")}
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Search by order number, customer name or email..."
                            value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="filter-field">
                        {icon("filter")}
                        <select
                            class="form__select"
                            on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                        >
                            {status_options()
                                .into_iter()
                                .map(|(value, label)| {
                                    let value_clone = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || status_filter.get() == value_clone
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading-indicator">"Loading orders..."</div> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Customer"</th>
                                <th>"Date"</th>
                                <th>"Items"</th>
                                <th>"Total"</th>
                                <th>"Payment"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|order| order.to_string_id()
                                children=move |order: Order| {
                                    let open_target = order.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__strong">{order.order_number.clone()}</td>
                                            <td>
                                                <div>{order.customer_name.clone()}</div>
                                                <div class="data-table__muted">{order.customer_email.clone()}</div>
                                            </td>
                                            <td>{format_date(&order.created_at.to_rfc3339())}</td>
                                            <td>{order.item_count()}</td>
                                            <td>{format_price(order.total_amount)}</td>
                                            <td>
                                                <Badge variant=payment_badge_variant(order.payment_status)>
                                                    {order.payment_status.label()}
                                                </Badge>
                                            </td>
                                            <td>
                                                <Badge variant=status_badge_variant(order.status)>
                                                    {icon(status_icon_name(order.status))}
                                                    {order.status.label()}
                                                </Badge>
                                            </td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="icon-btn"
                                                    title="View details"
                                                    on:click=move |_| set_selected.set(Some(open_target.clone()))
                                                >
                                                    {icon("eye")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Show when=move || filtered().is_empty()>
                        <div class="empty-state">"No orders match the current filters."</div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
