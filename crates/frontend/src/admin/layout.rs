use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::{use_location, use_navigate};

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/admin", "Dashboard", "layout-dashboard"),
    ("/admin/products", "Products", "package"),
    ("/admin/orders", "Orders", "shopping-cart"),
    ("/admin/promotions", "Promotions", "percent"),
    ("/admin/users", "Users", "users"),
];

/// Admin console frame: sidebar navigation, top bar with the signed-in
/// user, and the routed page in the middle. Unauthenticated visitors
/// see the login form instead.
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminLayout />
        </RequireAuth>
    }
}

#[component]
fn AdminLayout() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let (sidebar_open, set_sidebar_open) = signal(false);

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let user_email = move || {
        auth_state
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let sign_out = move |_| {
        do_logout(set_auth_state);
        navigate("/", Default::default());
    };

    let nav_links = move || {
        let pathname = pathname.get();
        NAV_ITEMS
            .into_iter()
            .map(|(href, label, icon_name)| {
                let is_active = pathname == href;
                let link_class = if is_active {
                    "admin-nav__link admin-nav__link--active"
                } else {
                    "admin-nav__link"
                };
                view! {
                    <A href=href attr:class=link_class on:click=move |_| set_sidebar_open.set(false)>
                        {icon(icon_name)}
                        <span>{label}</span>
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <div class="admin-shell">
            <div
                class=move || {
                    if sidebar_open.get() {
                        "admin-shell__overlay admin-shell__overlay--visible"
                    } else {
                        "admin-shell__overlay"
                    }
                }
                on:click=move |_| set_sidebar_open.set(false)
            ></div>

            <aside class=move || {
                if sidebar_open.get() {
                    "admin-sidebar admin-sidebar--open"
                } else {
                    "admin-sidebar"
                }
            }>
                <div class="admin-sidebar__header">
                    <h1>"Admin Panel"</h1>
                    <button
                        class="icon-btn admin-sidebar__close"
                        on:click=move |_| set_sidebar_open.set(false)
                        aria-label="Close menu"
                    >
                        {icon("x")}
                    </button>
                </div>
                <nav class="admin-nav">{nav_links}</nav>
                <div class="admin-sidebar__footer">
                    <div class="admin-sidebar__user">
                        {icon("user")}
                        <div>
                            <p class="admin-sidebar__user-name">{user_name}</p>
                            <p class="admin-sidebar__user-email">{user_email}</p>
                        </div>
                    </div>
                    <A href="/" attr:class="admin-nav__link">
                        {icon("home")}
                        <span>"Back to Site"</span>
                    </A>
                    <button class="admin-nav__link admin-nav__link--danger" on:click=sign_out>
                        {icon("log-out")}
                        <span>"Sign Out"</span>
                    </button>
                </div>
            </aside>

            <div class="admin-shell__main">
                <header class="admin-topbar">
                    <button
                        class="icon-btn admin-topbar__menu"
                        on:click=move |_| set_sidebar_open.set(true)
                        aria-label="Open menu"
                    >
                        {icon("menu")}
                    </button>
                    <div class="admin-topbar__spacer"></div>
                    <div class="admin-topbar__user">
                        {icon("user")}
                        <span>{user_name}</span>
                    </div>
                </header>
                <main class="admin-shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
