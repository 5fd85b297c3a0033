use crate::shared::components::ui::{Card, CardContent, CardTitle};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder page for routes that have not shipped yet.
#[component]
pub fn ComingSoonPage(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="coming-soon">
            <div class="coming-soon__inner">
                <span class="coming-soon__icon">{icon("clock")}</span>
                <h1 class="coming-soon__title">{title}</h1>
                <p class="coming-soon__description">{description}</p>

                <div class="preview-grid">
                    <Card>
                        <CardContent>
                            <span class="preview-grid__icon">{icon("star")}</span>
                            <CardTitle>"Innovation"</CardTitle>
                            <p>"We're building cutting-edge features to enhance your experience."</p>
                        </CardContent>
                    </Card>
                    <Card>
                        <CardContent>
                            <span class="preview-grid__icon">{icon("package")}</span>
                            <CardTitle>"Development"</CardTitle>
                            <p>"Our team is working tirelessly to deliver quality solutions."</p>
                        </CardContent>
                    </Card>
                    <Card>
                        <CardContent>
                            <span class="preview-grid__icon">{icon("clock")}</span>
                            <CardTitle>"Timeline"</CardTitle>
                            <p>"Stay tuned for updates on our development progress."</p>
                        </CardContent>
                    </Card>
                </div>

                <p class="coming-soon__footer">"Thank you for your patience!"</p>
            </div>
        </div>
    }
}
