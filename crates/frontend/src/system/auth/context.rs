use contracts::system::auth::AdminUser;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;

// Fixed demo credential pair. There is no account system behind the
// console; see the project non-goals.
const DEMO_EMAIL: &str = "admin@cometica.com";
const DEMO_PASSWORD: &str = "admin123";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<AdminUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from localStorage before the first render so the
    // admin shell does not flash the login form on reload.
    let initial = AuthState {
        user: storage::load_session(),
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Check the submitted credentials against the demo pair.
///
/// The short delay stands in for a round-trip so the form's loading
/// state is actually visible.
pub async fn verify_credentials(email: &str, password: &str) -> Result<AdminUser, String> {
    TimeoutFuture::new(800).await;

    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password".to_string());
    }

    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(AdminUser {
            email: email.to_string(),
            name: "Admin User".to_string(),
            role: "admin".to_string(),
        })
    } else {
        Err("Invalid email or password. Please use the demo credentials below.".to_string())
    }
}

/// Persist and publish a successful login
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, user: AdminUser) {
    storage::save_session(&user);
    set_auth_state.set(AuthState { user: Some(user) });
}

/// Clear the session and the auth state
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
