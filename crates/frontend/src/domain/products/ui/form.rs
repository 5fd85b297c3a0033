use crate::domain::products::api;
use crate::shared::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::product::{discount_percent, Category, Product, ProductDto, StockStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Create/edit form for one product.
///
/// The discount field is recomputed from the price pair on blur but
/// stays editable, matching the storefront's badge semantics.
#[component]
pub fn ProductForm(
    /// Product being edited; `None` creates a new one
    product: Option<Product>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let editing = StoredValue::new(product.clone());
    let is_edit = product.is_some();

    let (name, set_name) = signal(
        product.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        product
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        product
            .as_ref()
            .map(|p| p.category.as_str().to_string())
            .unwrap_or_default(),
    );
    let (original_price, set_original_price) = signal(
        product
            .as_ref()
            .map(|p| p.original_price.to_string())
            .unwrap_or_default(),
    );
    let (sale_price, set_sale_price) = signal(
        product
            .as_ref()
            .map(|p| p.sale_price.to_string())
            .unwrap_or_default(),
    );
    let (discount, set_discount) = signal(
        product
            .as_ref()
            .map(|p| p.discount_percentage.to_string())
            .unwrap_or_default(),
    );
    let (stock_status, set_stock_status) = signal(
        product
            .as_ref()
            .map(|p| p.stock_status.as_str().to_string())
            .unwrap_or_else(|| StockStatus::FullStock.as_str().to_string()),
    );
    let (styles, set_styles) = signal(
        product
            .as_ref()
            .map(|p| p.styles_available.to_string())
            .unwrap_or_else(|| "1".to_string()),
    );
    let (image_url, set_image_url) = signal(
        product
            .as_ref()
            .and_then(|p| p.image_url.clone())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = signal(false);

    let category_options: Vec<(String, String)> =
        std::iter::once(("".to_string(), "Select Category".to_string()))
            .chain(
                Category::all()
                    .into_iter()
                    .map(|c| (c.as_str().to_string(), c.label().to_string())),
            )
            .collect();
    let stock_options: Vec<(String, String)> = StockStatus::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    // Derive the discount whenever either price field loses focus
    let recalculate_discount = Callback::new(move |_: ()| {
        let original = original_price.get().parse::<f64>().unwrap_or(0.0);
        let sale = sale_price.get().parse::<f64>().unwrap_or(0.0);
        let pct = discount_percent(original, sale);
        if pct > 0 {
            set_discount.set(pct.to_string());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let parsed_category = match Category::parse(&category.get()) {
            Some(c) => c,
            None => {
                toasts.error("Failed to save product", Some("Select a category".to_string()));
                return;
            }
        };
        let parsed_stock =
            StockStatus::parse(&stock_status.get()).unwrap_or(StockStatus::FullStock);

        let dto = ProductDto {
            name: name.get(),
            description: {
                let d = description.get();
                if d.trim().is_empty() { None } else { Some(d) }
            },
            category: parsed_category,
            original_price: original_price.get().parse().unwrap_or(0.0),
            sale_price: sale_price.get().parse().unwrap_or(0.0),
            discount_percentage: discount.get().parse().unwrap_or(0),
            stock_status: parsed_stock,
            styles_available: styles.get().parse().unwrap_or(1),
            image_url: {
                let url = image_url.get();
                if url.trim().is_empty() { None } else { Some(url) }
            },
        };

        let record = match editing.get_value() {
            Some(mut existing) => {
                existing.update(&dto);
                existing
            }
            None => Product::new_for_insert(&dto),
        };

        if let Err(e) = record.validate() {
            toasts.error("Failed to save product", Some(e));
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
                    if is_edit {
                        toasts.success(
                            "Product updated successfully!",
                            Some(format!("{} has been updated.", record.name)),
                        );
                    } else {
                        toasts.success(
                            "Product added successfully!",
                            Some(format!(
                                "{} has been added to your inventory.",
                                record.name
                            )),
                        );
                    }
                    on_save.run(());
                }
                Err(e) => {
                    log::error!("ProductForm: failed to save product: {}", e);
                    toasts.error(
                        "Failed to save product",
                        Some("An error occurred while saving the product. Please try again.".to_string()),
                    );
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Card class="product-form">
            <CardHeader>
                <CardTitle>
                    {if is_edit { "Edit Product" } else { "Add New Product" }}
                </CardTitle>
            </CardHeader>
            <CardContent>
                <form on:submit=on_submit>
                    <div class="form__row">
                        <Input
                            label="Product Name"
                            value=name
                            on_input=Callback::new(move |v| set_name.set(v))
                            required=true
                        />
                        <Select
                            label="Category"
                            value=category
                            options=category_options
                            on_change=Callback::new(move |v| set_category.set(v))
                            required=true
                        />
                    </div>

                    <Textarea
                        label="Description"
                        value=description
                        on_input=Callback::new(move |v| set_description.set(v))
                        rows=3
                    />

                    <div class="form__row form__row--thirds">
                        <Input
                            label="Original Price ($)"
                            value=original_price
                            input_type="number"
                            step="0.01"
                            on_input=Callback::new(move |v| set_original_price.set(v))
                            on_blur=recalculate_discount
                            required=true
                        />
                        <Input
                            label="Sale Price ($)"
                            value=sale_price
                            input_type="number"
                            step="0.01"
                            on_input=Callback::new(move |v| set_sale_price.set(v))
                            on_blur=recalculate_discount
                            required=true
                        />
                        <Input
                            label="Discount (%)"
                            value=discount
                            input_type="number"
                            on_input=Callback::new(move |v| set_discount.set(v))
                        />
                    </div>

                    <div class="form__row">
                        <Select
                            label="Stock Status"
                            value=stock_status
                            options=stock_options
                            on_change=Callback::new(move |v| set_stock_status.set(v))
                            required=true
                        />
                        <Input
                            label="Styles Available"
                            value=styles
                            input_type="number"
                            on_input=Callback::new(move |v| set_styles.set(v))
                            required=true
                        />
                    </div>

                    <Input
                        label="Image URL"
                        value=image_url
                        input_type="url"
                        placeholder="https://example.com/image.jpg"
                        on_input=Callback::new(move |v| set_image_url.set(v))
                    />

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
                            {move || if saving.get() { " Saving..." } else { " Save Product" }}
                        </Button>
                    </div>
                </form>
            </CardContent>
        </Card>
    }
}
