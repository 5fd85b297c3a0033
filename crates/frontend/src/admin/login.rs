use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::{complete_login, use_auth, verify_credentials};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    // Demo credentials are prefilled, same as the hint box below the form
    let (email, set_email) = signal("admin@cometica.com".to_string());
    let (password, set_password) = signal("admin123".to_string());
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match verify_credentials(&email_val, &password_val).await {
                Ok(user) => {
                    complete_login(set_auth_state, user);
                    toasts.success(
                        "Successfully logged in!",
                        Some("Welcome back to Cometica Admin".to_string()),
                    );
                    set_is_loading.set(false);
                    navigate("/admin", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__brand">
                    <span class="login-box__brand-icon">{icon("lock")}</span>
                    <h1>"Cometica Admin"</h1>
                    <p>"Sign in to your admin account"</p>
                </div>

                <h2>"Welcome Back"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {icon("alert-circle")}
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="email">"Email Address"</label>
                        <div class="form__input-wrap">
                            <span class="form__input-icon">{icon("mail")}</span>
                            <input
                                type="email"
                                id="email"
                                class="form__input"
                                placeholder="admin@cometica.com"
                                value=move || email.get()
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    set_error_message.set(None);
                                }
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <div class="form__input-wrap">
                            <span class="form__input-icon">{icon("lock")}</span>
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                class="form__input"
                                placeholder="Enter your password"
                                value=move || password.get()
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_error_message.set(None);
                                }
                                required
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="form__input-toggle"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                                aria-label="Toggle password visibility"
                            >
                                {move || {
                                    if show_password.get() {
                                        icon("eye-off")
                                    } else {
                                        icon("eye")
                                    }
                                }}
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo Credentials:"</p>
                    <p>"Email: " <strong>"admin@cometica.com"</strong></p>
                    <p>"Password: " <strong>"admin123"</strong></p>
                </div>
            </div>
        </div>
    }
}
