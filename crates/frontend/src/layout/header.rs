use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::storefront::search_drawer::SearchDrawer;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/products", "Products"),
    ("/promotions", "Promotions"),
    ("/about", "About"),
    ("/blog", "Blog"),
    ("/faq", "FAQ"),
];

/// Storefront header: brand, primary navigation, search, theme toggle
/// and the admin entry point. Owns the search drawer.
#[component]
pub fn StorefrontHeader() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);
    let (search_open, set_search_open) = signal(false);

    let nav_links = move || {
        let pathname = pathname.get();
        NAV_LINKS
            .into_iter()
            .map(|(href, label)| {
                let link_class = if pathname == href {
                    "header__link header__link--active"
                } else {
                    "header__link"
                };
                view! {
                    <A href=href attr:class=link_class on:click=move |_| set_menu_open.set(false)>
                        {label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="header">
            <div class="header__inner">
                <button
                    class="icon-btn header__menu-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>

                <A href="/" attr:class="header__brand">"COMETICA"</A>

                <nav class="header__nav">{nav_links}</nav>

                <div class="header__actions">
                    <button
                        class="header__icon-btn"
                        on:click=move |_| set_search_open.set(true)
                        aria-label="Search"
                    >
                        {icon("search")}
                    </button>
                    <ThemeToggle />
                    <A href="/admin" attr:class="header__icon-btn" attr:title="Admin console">
                        {icon("user")}
                    </A>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="header__nav header__nav--mobile">{nav_links}</nav>
            </Show>

            <SearchDrawer
                is_open=search_open
                on_close=Callback::new(move |_| set_search_open.set(false))
            />
        </header>
    }
}
