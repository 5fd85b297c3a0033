use crate::layout::footer::StorefrontFooter;
use crate::layout::header::StorefrontHeader;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

/// Public site frame: header, routed page, footer. Scrolls back to the
/// top whenever the route changes.
#[component]
pub fn StorefrontShell() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="storefront">
            <StorefrontHeader />
            <main class="storefront__main">
                <Outlet />
            </main>
            <StorefrontFooter />
        </div>
    }
}
