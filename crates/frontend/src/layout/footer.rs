use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Storefront footer: link columns, social icons, copyright.
#[component]
pub fn StorefrontFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <h3>"COMETICA"</h3>
                    <p>"The perfect blend of comfort and trend."</p>
                    <div class="footer__social">
                        <a href="https://instagram.com" target="_blank" rel="noreferrer" aria-label="Instagram">
                            {icon("instagram")}
                        </a>
                        <a href="https://twitter.com" target="_blank" rel="noreferrer" aria-label="Twitter">
                            {icon("twitter")}
                        </a>
                    </div>
                </div>

                <div class="footer__column">
                    <h4>"Shop"</h4>
                    <A href="/products">"Products"</A>
                    <A href="/promotions">"Promotions"</A>
                    <A href="/sort">"Sort By"</A>
                </div>

                <div class="footer__column">
                    <h4>"Company"</h4>
                    <A href="/about">"About Us"</A>
                    <A href="/contact">"Contact Us"</A>
                    <A href="/blog">"Blog"</A>
                    <A href="/faq">"FAQ"</A>
                </div>
            </div>
            <div class="footer__bottom">
                <p>"\u{00A9} 2024 Cometica. All rights reserved."</p>
            </div>
        </footer>
    }
}
