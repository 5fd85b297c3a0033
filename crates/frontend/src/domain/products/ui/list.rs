use crate::domain::products::api;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use crate::shared::toast::use_toasts;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
struct ProductListState {
    sort_field: String,
    sort_ascending: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            sort_field: "created_at".to_string(),
            sort_ascending: false,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        let term = filter.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.category.label().to_lowercase().contains(&term)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self.category.as_str().cmp(other.category.as_str()),
            "original_price" => self
                .original_price
                .partial_cmp(&other.original_price)
                .unwrap_or(Ordering::Equal),
            "sale_price" => self
                .sale_price
                .partial_cmp(&other.sale_price)
                .unwrap_or(Ordering::Equal),
            "stock_status" => self.stock_status.as_str().cmp(other.stock_status.as_str()),
            "created_at" => self.metadata.created_at.cmp(&other.metadata.created_at),
            _ => Ordering::Equal,
        }
    }
}

fn stock_badge_variant(product: &Product) -> &'static str {
    if product.stock_status.is_out_of_stock() {
        "error"
    } else {
        "success"
    }
}

#[component]
pub fn ProductList(
    /// Opens the create form
    on_add: Callback<()>,
    /// Opens the edit form for one product
    on_edit: Callback<Product>,
) -> impl IntoView {
    let toasts = use_toasts();
    let state = RwSignal::new(ProductListState::default());
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(products) => {
                    set_items.set(products);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("ProductList: failed to fetch products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sort_indicator = move |field: &'static str| {
        let s = state.get();
        if s.sort_field == field {
            if s.sort_ascending {
                " \u{2191}"
            } else {
                " \u{2193}"
            }
        } else {
            ""
        }
    };

    let visible_items = move || {
        let mut list = filter_list(&items.get(), &search.get());
        let s = state.get();
        sort_list(&mut list, &s.sort_field, s.sort_ascending);
        list
    };

    let delete_product = move |product: Product| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete \"{}\"?", product.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = product.to_string_id();
        let name = product.name.clone();
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success(
                        "Product deleted",
                        Some(format!("{} has been removed from your inventory.", name)),
                    );
                    fetch();
                }
                Err(e) => {
                    toasts.error("Failed to delete product", Some(e));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <div>
                    <h2 class="admin-page__title">"Products"</h2>
                    <p class="admin-page__subtitle">"Manage your product inventory"</p>
                </div>
                <div class="admin-page__actions">
                    <Button on_click=Callback::new(move |_| on_add.run(()))>
                        {icon("plus")}
                        " Add Product"
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
                        placeholder="Search products..."
                        value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-indicator">"Loading products..."</div> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th class="data-table__sortable" on:click=toggle_sort("name")>
                                "Name" {move || sort_indicator("name")}
                            </th>
                            <th class="data-table__sortable" on:click=toggle_sort("category")>
                                "Category" {move || sort_indicator("category")}
                            </th>
                            <th class="data-table__sortable" on:click=toggle_sort("original_price")>
                                "Price" {move || sort_indicator("original_price")}
                            </th>
                            <th class="data-table__sortable" on:click=toggle_sort("sale_price")>
                                "Sale" {move || sort_indicator("sale_price")}
                            </th>
                            <th>"Discount"</th>
                            <th class="data-table__sortable" on:click=toggle_sort("stock_status")>
                                "Stock" {move || sort_indicator("stock_status")}
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible_items
                            key=|product| product.to_string_id()
                            children=move |product: Product| {
                                let edit_target = product.clone();
                                let delete_target = product.clone();
                                let badge_variant = stock_badge_variant(&product);
                                view! {
                                    <tr>
                                        <td>
                                            {product.image_url.clone().map(|url| view! {
                                                <img class="data-table__thumb" src=url alt=product.name.clone() />
                                            })}
                                        </td>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.category.label()}</td>
                                        <td>{format_price(product.original_price)}</td>
                                        <td>{format_price(product.sale_price)}</td>
                                        <td>
                                            <Show when={
                                                let pct = product.discount_percentage;
                                                move || pct > 0
                                            }>
                                                <Badge variant="primary">
                                                    {format!("-{}%", product.discount_percentage)}
                                                </Badge>
                                            </Show>
                                        </td>
                                        <td>
                                            <Badge variant=badge_variant>
                                                {product.stock_status.label()}
                                            </Badge>
                                        </td>
                                        <td class="data-table__actions">
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
                                                on:click=move |_| delete_product(delete_target.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || visible_items().is_empty()>
                    <div class="empty-state">"No products found."</div>
                </Show>
            </Show>
        </div>
    }
}
