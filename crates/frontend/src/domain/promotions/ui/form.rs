use crate::domain::promotions::api;
use crate::shared::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use chrono::NaiveDate;
use contracts::domain::promotion::{DiscountType, Promotion, PromotionDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Create/edit form for one promotion.
#[component]
pub fn PromotionForm(
    /// Promotion being edited; `None` creates a new one
    promotion: Option<Promotion>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let editing = StoredValue::new(promotion.clone());
    let is_edit = promotion.is_some();

    let (name, set_name) = signal(
        promotion.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        promotion
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (discount_type, set_discount_type) = signal(
        promotion
            .as_ref()
            .map(|p| p.discount_type.as_str().to_string())
            .unwrap_or_else(|| DiscountType::Percentage.as_str().to_string()),
    );
    let (percentage, set_percentage) = signal(
        promotion
            .as_ref()
            .map(|p| p.discount_percentage.to_string())
            .unwrap_or_default(),
    );
    let (amount, set_amount) = signal(
        promotion
            .as_ref()
            .map(|p| p.discount_amount.to_string())
            .unwrap_or_default(),
    );
    let (min_order, set_min_order) = signal(
        promotion
            .as_ref()
            .map(|p| p.min_order_amount.to_string())
            .unwrap_or_default(),
    );
    let (max_discount, set_max_discount) = signal(
        promotion
            .as_ref()
            .map(|p| p.max_discount_amount.to_string())
            .unwrap_or_default(),
    );
    let (start_date, set_start_date) = signal(
        promotion
            .as_ref()
            .map(|p| p.start_date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (end_date, set_end_date) = signal(
        promotion
            .as_ref()
            .map(|p| p.end_date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (is_active, set_is_active) = signal(
        promotion.as_ref().map(|p| p.is_active).unwrap_or(true),
    );
    let (usage_limit, set_usage_limit) = signal(
        promotion
            .as_ref()
            .and_then(|p| p.usage_limit)
            .map(|l| l.to_string())
            .unwrap_or_default(),
    );
    let (code, set_code) = signal(
        promotion.as_ref().map(|p| p.code.clone()).unwrap_or_default(),
    );
    let (saving, set_saving) = signal(false);

    let type_options: Vec<(String, String)> = [DiscountType::Percentage, DiscountType::Fixed]
        .into_iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();

    let is_percentage = move || discount_type.get() == "percentage";

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (start, end) = match (parse_date(&start_date.get()), parse_date(&end_date.get())) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                toasts.error(
                    "Failed to save promotion",
                    Some("Start and end dates are required".to_string()),
                );
                return;
            }
        };

        let dto = PromotionDto {
            name: name.get(),
            description: description.get(),
            discount_type: DiscountType::parse(&discount_type.get())
                .unwrap_or(DiscountType::Percentage),
            discount_percentage: percentage.get().parse().unwrap_or(0.0),
            discount_amount: amount.get().parse().unwrap_or(0.0),
            min_order_amount: min_order.get().parse().unwrap_or(0.0),
            max_discount_amount: max_discount.get().parse().unwrap_or(0.0),
            start_date: start,
            end_date: end,
            is_active: is_active.get(),
            usage_limit: usage_limit.get().parse().ok(),
            code: code.get().trim().to_uppercase(),
        };

        let record = match editing.get_value() {
            Some(mut existing) => {
                existing.update(&dto);
                existing
            }
            None => Promotion::new_for_insert(&dto),
        };

        if let Err(e) = record.validate() {
            toasts.error("Failed to save promotion", Some(e));
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            let result = if is_edit {
                api::update(&record).await
            } else {
                api::insert(&record).await
            };

            match result {
                Ok(()) => {
                    let verb = if is_edit { "updated" } else { "created" };
                    toasts.success(
                        &format!("Promotion {} successfully!", verb),
                        Some(format!("{} ({})", record.name, record.code)),
                    );
                    on_save.run(());
                }
                Err(e) => {
                    log::error!("PromotionForm: failed to save promotion: {}", e);
                    toasts.error("Failed to save promotion", Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Card class="promotion-form">
            <CardHeader>
                <CardTitle>
                    {if is_edit { "Edit Promotion" } else { "Add New Promotion" }}
                </CardTitle>
            </CardHeader>
            <CardContent>
                <form on:submit=on_submit>
                    <div class="form__row">
                        <Input
                            label="Promotion Name"
                            value=name
                            on_input=Callback::new(move |v| set_name.set(v))
                            required=true
                        />
                        <Input
                            label="Code"
                            value=code
                            placeholder="SUMMER50"
                            on_input=Callback::new(move |v| set_code.set(v))
                            required=true
                        />
                    </div>

                    <Textarea
                        label="Description"
                        value=description
                        on_input=Callback::new(move |v| set_description.set(v))
                        rows=2
                    />

                    <div class="form__row form__row--thirds">
                        <Select
                            label="Discount Type"
                            value=discount_type
                            options=type_options
                            on_change=Callback::new(move |v| set_discount_type.set(v))
                        />
                        <Show
                            when=is_percentage
                            fallback=move || view! {
                                <Input
                                    label="Discount Amount ($)"
                                    value=amount
                                    input_type="number"
                                    step="0.01"
                                    on_input=Callback::new(move |v| set_amount.set(v))
                                />
                            }
                        >
                            <Input
                                label="Discount (%)"
                                value=percentage
                                input_type="number"
                                on_input=Callback::new(move |v| set_percentage.set(v))
                            />
                        </Show>
                        <Input
                            label="Max Discount ($)"
                            value=max_discount
                            input_type="number"
                            step="0.01"
                            on_input=Callback::new(move |v| set_max_discount.set(v))
                        />
                    </div>

                    <div class="form__row form__row--thirds">
                        <Input
                            label="Min Order Amount ($)"
                            value=min_order
                            input_type="number"
                            step="0.01"
                            on_input=Callback::new(move |v| set_min_order.set(v))
                        />
                        <Input
                            label="Start Date"
                            value=start_date
                            input_type="date"
                            on_input=Callback::new(move |v| set_start_date.set(v))
                            required=true
                        />
                        <Input
                            label="End Date"
                            value=end_date
                            input_type="date"
                            on_input=Callback::new(move |v| set_end_date.set(v))
                            required=true
                        />
                    </div>

                    <div class="form__row">
                        <Input
                            label="Usage Limit"
                            value=usage_limit
                            input_type="number"
                            placeholder="Unlimited"
                            on_input=Callback::new(move |v| set_usage_limit.set(v))
                        />
                        <div class="form__group">
                            <label class="form__label" for="promo-active">"Active"</label>
                            <input
                                id="promo-active"
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || is_active.get()
                                on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__actions">
                        <Button
                            variant="secondary"
                            disabled=saving
                            on_click=Callback::new(move |_| on_cancel.run(()))
                        >
                            {icon("x")}
                            " Cancel"
                        </Button>
                        <Button button_type="submit" disabled=saving>
                            {icon("save")}
                            {move || if saving.get() { " Saving..." } else { " Save Promotion" }}
                        </Button>
                    </div>
                </form>
            </CardContent>
        </Card>
    }
}
