use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat card: label, icon, one big value and an optional hint
/// line. `None` renders as a dash while the value is loading.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary value, preformatted (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional hint below the value
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Click handler (makes the card a navigation target)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let card_class = if on_click.is_some() {
        "stat-card stat-card--clickable"
    } else {
        "stat-card"
    };

    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <div
            class=card_class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(&icon_name)}</span>
            </div>
            <div class="stat-card__value">{formatted}</div>
            {move || hint.get().map(|h| view! {
                <div class="stat-card__hint">{h}</div>
            })}
        </div>
    }
}
