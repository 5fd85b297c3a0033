use crate::shared::components::ui::{Button, Card, CardContent};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Wide promotional banner linking to the promotions page.
#[component]
pub fn PromotionsBanner() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="promo-banner">
            <div class="promo-banner__inner">
                <Card class="promo-banner__card">
                    <CardContent>
                        <span class="promo-banner__icon">{icon("percent")}</span>
                        <h2 class="promo-banner__title">"PROMOTIONS"</h2>
                        <p class="promo-banner__text">
                            "Explore exclusive deals on our top products. The perfect \
                             opportunity to enrich your wardrobe with trendy pieces at \
                             affordable prices."
                        </p>
                        <Button on_click=Callback::new(move |_| {
                            navigate("/promotions", Default::default());
                        })>
                            "Explore Promotions "
                            {icon("arrow-right")}
                        </Button>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}
