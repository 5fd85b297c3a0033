use leptos::prelude::*;

use super::context::use_auth;
use crate::admin::login::AdminLoginPage;

/// Component that requires authentication.
/// Renders the login page in place when the session is missing.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <AdminLoginPage /> }
        >
            {children()}
        </Show>
    }
}
