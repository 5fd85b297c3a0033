use leptos::prelude::*;

/// Card surface
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("card {}", additional_class())>
            {children()}
        </div>
    }
}

/// Card header strip
#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card__header">{children()}</div> }
}

/// Card title line
#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="card__title">{children()}</h3> }
}

/// Card body
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}
