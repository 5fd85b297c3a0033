use crate::domain::promotions::api;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::toast::use_toasts;
use contracts::domain::promotion::{DiscountType, Promotion, PromotionStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

impl Searchable for Promotion {
    fn matches_filter(&self, filter: &str) -> bool {
        let term = filter.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.code.to_lowercase().contains(&term)
    }
}

fn status_badge_variant(status: PromotionStatus) -> &'static str {
    match status {
        PromotionStatus::Active => "success",
        PromotionStatus::Upcoming => "primary",
        PromotionStatus::Expired => "neutral",
        PromotionStatus::Inactive => "error",
    }
}

fn discount_label(promotion: &Promotion) -> String {
    match promotion.discount_type {
        DiscountType::Percentage => format!("{}% off", promotion.discount_percentage),
        DiscountType::Fixed => format!("{} off", format_price(promotion.discount_amount)),
    }
}

#[component]
pub fn PromotionList(
    /// Opens the create form
    on_add: Callback<()>,
    /// Opens the edit form for one promotion
    on_edit: Callback<Promotion>,
) -> impl IntoView {
    let toasts = use_toasts();
    let (items, set_items) = signal::<Vec<Promotion>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal("all".to_string());

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    log::error!("PromotionList: failed to fetch promotions: {}", e);
                    toasts.warning(
                        "Using demo data",
                        Some("Unable to connect to database. Showing demo promotions.".to_string()),
                    );
                    set_items.set(api::demo_promotions());
                }
            }
            set_loading.set(false);
        });
    };

    let filtered = move || {
        let mut list = filter_list(&items.get(), &search.get());
        let status = status_filter.get();
        if status != "all" {
            let today = chrono::Utc::now().date_naive();
            list.retain(|p| p.lifecycle_status(today).as_str() == status);
        }
        list
    };

    let delete_promotion = move |promotion: Promotion| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete promotion \"{}\"?", promotion.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = promotion.to_string_id();
        let name = promotion.name.clone();
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success("Promotion deleted", Some(format!("{} has been removed.", name)));
                    fetch();
                }
                Err(e) => {
                    toasts.error("Failed to delete promotion", Some(e));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <div>
                    <h2 class="admin-page__title">"Promotions"</h2>
                    <p class="admin-page__subtitle">"Create and manage discount campaigns"</p>
                </div>
                <div class="admin-page__actions">
                    <Button on_click=Callback::new(move |_| on_add.run(()))>
                        {icon("plus")}
                        " Add Promotion"
                    </Button>
                    <Button variant="secondary" on_click=Callback::new(move |_| fetch())>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="admin-page__toolbar">
                <div class="search-field">
                    {icon("search")}
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Search by name, description or code..."
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
                        {[
                            ("all", "All Status"),
                            ("active", "Active"),
                            ("upcoming", "Upcoming"),
                            ("expired", "Expired"),
                            ("inactive", "Inactive"),
                        ]
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option
                                        value=value
                                        selected=move || status_filter.get() == value
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
                fallback=|| view! { <div class="loading-indicator">"Loading promotions..."</div> }
            >
                <div class="promotion-grid">
                    <For
                        each=filtered
                        key=|promotion| promotion.to_string_id()
                        children=move |promotion: Promotion| {
                            let status = promotion
                                .lifecycle_status(chrono::Utc::now().date_naive());
                            let edit_target = promotion.clone();
                            let delete_target = promotion.clone();
                            view! {
                                <div class="promotion-card">
                                    <div class="promotion-card__header">
                                        <div>
                                            <h3 class="promotion-card__name">{promotion.name.clone()}</h3>
                                            <code class="promotion-card__code">
                                                {icon("tag")}
                                                {promotion.code.clone()}
                                            </code>
                                        </div>
                                        <Badge variant=status_badge_variant(status)>
                                            {status.label()}
                                        </Badge>
                                    </div>
                                    <p class="promotion-card__description">
                                        {promotion.description.clone()}
                                    </p>
                                    <div class="promotion-card__meta">
                                        <span class="promotion-card__discount">
                                            {icon("percent")}
                                            {discount_label(&promotion)}
                                        </span>
                                        <span class="promotion-card__dates">
                                            {icon("calendar")}
                                            {format!(
                                                "{} \u{2013} {}",
                                                promotion.start_date.format("%b %d, %Y"),
                                                promotion.end_date.format("%b %d, %Y"),
                                            )}
                                        </span>
                                        {promotion.usage_limit.map(|limit| view! {
                                            <span class="promotion-card__limit">
                                                {format!("Limit: {} uses", limit)}
                                            </span>
                                        })}
                                        <Show when={
                                            let min = promotion.min_order_amount;
                                            move || min > 0.0
                                        }>
                                            <span class="promotion-card__limit">
                                                {format!("Min order: {}", format_price(promotion.min_order_amount))}
                                            </span>
                                        </Show>
                                    </div>
                                    <div class="promotion-card__actions">
                                        <button
                                            class="icon-btn"
                                            title="Edit"
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="icon-btn icon-btn--danger"
                                            title="Delete"
                                            on:click=move |_| delete_promotion(delete_target.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || filtered().is_empty()>
                    <div class="empty-state">"No promotions match the current filters."</div>
                </Show>
            </Show>
        </div>
    }
}
