use crate::shared::theme::use_theme;
use leptos::prelude::*;

/// Full-height hero with a looping background video and gradient
/// overlays that blend into the page background.
#[component]
pub fn HeroSection() -> impl IntoView {
    let theme = use_theme();

    // The fade-out strength differs per theme so the video hands off
    // cleanly to the section below.
    let fade_style = move || {
        let opacity = if theme.theme.get().is_dark() { "0.9" } else { "0.2" };
        format!(
            "background: linear-gradient(to bottom, transparent, transparent, rgba(0, 0, 0, {}))",
            opacity
        )
    };

    view! {
        <section class="hero">
            <div class="hero__media">
                <video
                    class="hero__video"
                    src="/video/hero.mp4"
                    autoplay
                    loop
                    muted
                    playsinline
                ></video>
                <div class="hero__overlay hero__overlay--top"></div>
                <div class="hero__overlay" style=fade_style></div>
            </div>
        </section>
    }
}
