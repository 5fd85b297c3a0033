use crate::domain::products::api;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::filter_list;
use crate::shared::toast::use_toasts;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

const RECENT_SEARCHES_KEY: &str = "cometica_recent_searches";
const RECENT_SEARCHES_MAX: usize = 5;

fn load_recent_searches() -> Vec<String> {
    let json = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(RECENT_SEARCHES_KEY).ok().flatten());
    match json {
        Some(json) => serde_json::from_str(&json).unwrap_or_default(),
        None => Vec::new(),
    }
}

fn save_recent_searches(searches: &[String]) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(json) = serde_json::to_string(searches) {
            let _ = storage.set_item(RECENT_SEARCHES_KEY, &json);
        }
    }
}

/// Slide-over product search. Products are fetched when the drawer
/// opens; matching happens client-side as the user types. Picked terms
/// are remembered in localStorage.
#[component]
pub fn SearchDrawer(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (search_term, set_search_term) = signal(String::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (recent, set_recent) = signal(load_recent_searches());

    // Fetch the catalog each time the drawer opens
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => set_products.set(list),
                Err(e) => {
                    log::error!("SearchDrawer: failed to fetch products: {}", e);
                    toasts.warning(
                        "Using demo data",
                        Some("Unable to connect to database. Showing demo products.".to_string()),
                    );
                    set_products.set(api::demo_products());
                }
            }
            set_loading.set(false);
        });
    });

    let results = move || {
        let term = search_term.get();
        if term.trim().is_empty() {
            return Vec::new();
        }
        filter_list(&products.get(), &term)
    };

    let remember_term = move |term: String| {
        let trimmed = term.trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        set_recent.update(|list| {
            list.retain(|t| !t.eq_ignore_ascii_case(&trimmed));
            list.insert(0, trimmed);
            list.truncate(RECENT_SEARCHES_MAX);
            save_recent_searches(list);
        });
    };

    let open_product = move |product: Product| {
        remember_term(search_term.get());
        set_search_term.set(String::new());
        on_close.run(());
        navigate(
            &format!("/product/{}", product.to_string_id()),
            Default::default(),
        );
    };

    let drawer_class = move || {
        if is_open.get() {
            "search-drawer search-drawer--open"
        } else {
            "search-drawer"
        }
    };

    view! {
        <div class=drawer_class>
            <div class="search-drawer__overlay" on:click=move |_| on_close.run(())></div>
            <div class="search-drawer__panel">
                <div class="search-drawer__header">
                    <div class="search-field">
                        {icon("search")}
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Search for products or categories..."
                            value=move || search_term.get()
                            on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        class="icon-btn"
                        on:click=move |_| on_close.run(())
                        aria-label="Close search"
                    >
                        {icon("x")}
                    </button>
                </div>

                <Show when=move || search_term.get().trim().is_empty() && !recent.get().is_empty()>
                    <div class="search-drawer__recent">
                        <h4>"Recent searches"</h4>
                        <div class="search-drawer__chips">
                            <For
                                each=move || recent.get()
                                key=|term| term.clone()
                                children=move |term: String| {
                                    let fill = term.clone();
                                    view! {
                                        <button
                                            class="search-drawer__chip"
                                            on:click=move |_| set_search_term.set(fill.clone())
                                        >
                                            {term.clone()}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>
                </Show>

                <Show when=move || loading.get()>
                    <div class="search-drawer__status">"Loading products..."</div>
                </Show>

                <div class="search-drawer__results">
                    <For
                        each=results
                        key=|product| product.to_string_id()
                        children=move |product: Product| {
                            let open = open_product.clone();
                            let open_target = product.clone();
                            view! {
                                <div
                                    class="search-result"
                                    on:click=move |_| open(open_target.clone())
                                >
                                    {product.image_url.clone().map(|url| view! {
                                        <img
                                            class="search-result__image"
                                            src=url
                                            alt=product.name.clone()
                                        />
                                    })}
                                    <div class="search-result__info">
                                        <div class="search-result__name">{product.name.clone()}</div>
                                        <div class="search-result__category">
                                            {product.category.label()}
                                        </div>
                                    </div>
                                    <div class="search-result__price">
                                        {format_price(product.sale_price)}
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || {
                        !search_term.get().trim().is_empty() && results().is_empty() && !loading.get()
                    }>
                        <div class="search-drawer__status">
                            {move || format!("No products found for \"{}\"", search_term.get())}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
