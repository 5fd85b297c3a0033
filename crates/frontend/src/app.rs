use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toast stack is app-wide; provided here so both storefront and
    // admin surfaces can push notifications.
    provide_context(ToastService::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <AppRoutes />
                <ToastHost />
            </AuthProvider>
        </ThemeProvider>
    }
}
