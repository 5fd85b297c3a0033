use crate::shared::toast::use_toasts;
use leptos::prelude::*;

/// Email capture strip at the bottom of the landing page. There is no
/// mailing backend; a successful submit is acknowledged and cleared.
#[component]
pub fn NewsletterSection() -> impl IntoView {
    let toasts = use_toasts();
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let value = email.get();
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            toasts.error(
                "Invalid email address",
                Some("Please enter a valid email address to subscribe.".to_string()),
            );
            return;
        }

        log::info!("NewsletterSection: subscribed {}", trimmed);
        toasts.success(
            "You're on the list!",
            Some("Thanks for subscribing to the Cometica newsletter.".to_string()),
        );
        set_email.set(String::new());
    };

    view! {
        <section class="newsletter">
            <div class="newsletter__inner">
                <h2 class="newsletter__title">"STAY IN THE LOOP"</h2>
                <p class="newsletter__text">
                    "Subscribe to our newsletter for early access to drops, exclusive \
                     promotions and styling tips."
                </p>
                <form class="newsletter__form" on:submit=on_submit>
                    <input
                        class="form__input newsletter__input"
                        type="email"
                        placeholder="Your email address"
                        value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="button button--primary">
                        "Subscribe"
                    </button>
                </form>
            </div>
        </section>
    }
}
