use leptos::prelude::*;

struct CategoryCard {
    title: &'static str,
    blurb: Option<&'static str>,
    image: &'static str,
    alt: &'static str,
}

/// Editorial category grid for the landing page. The layout is a fixed
/// three-column arrangement with the promotions panel in the middle.
#[component]
pub fn ProductCategories() -> impl IntoView {
    let left = [
        CategoryCard {
            title: "JEANS",
            blurb: Some(
                "Style and comfort meet in our collection of jeans. Discover the latest \
                 trends and perfect cuts for an impeccable look.",
            ),
            image: "/img/jeans.avif",
            alt: "Jeans with paint roller",
        },
        CategoryCard {
            title: "SHIRTS",
            blurb: None,
            image: "/img/shirts.avif",
            alt: "Folded shirts",
        },
    ];
    let right = [
        CategoryCard {
            title: "T-SHIRTS",
            blurb: None,
            image: "/img/t-shirt.avif",
            alt: "T-shirts on rack",
        },
        CategoryCard {
            title: "SNEAKERS",
            blurb: Some(
                "Passion for fashion and comfort is reflected in every pair of sneakers. \
                 Experience style and functionality in a single step.",
            ),
            image: "/img/sneakers.avif",
            alt: "Hand holding sneaker",
        },
    ];

    let render_card = |card: &CategoryCard| {
        view! {
            <div class="category-card">
                <h3 class="category-card__title">{card.title}</h3>
                {card.blurb.map(|text| view! {
                    <p class="category-card__blurb">{text}</p>
                })}
                <div class="category-card__media">
                    <img src=card.image alt=card.alt />
                </div>
            </div>
        }
    };

    view! {
        <section class="categories">
            <div class="categories__inner">
                <div class="categories__intro">
                    <h2>"ELEVATING YOUR STYLE GAME"</h2>
                    <p>
                        "DISCOVER THE PERFECT BLEND OF COMFORT AND TREND WITH OUR EXCLUSIVE \
                         COLLECTION. EXPLORE DEALS ON JEANS, SNEAKERS, AND MORE!"
                    </p>
                </div>

                <div class="categories__grid">
                    <div class="categories__column">
                        {left.iter().map(render_card).collect_view()}
                    </div>

                    <div class="categories__column categories__column--center">
                        <div class="category-card category-card--tall">
                            <div class="category-card__media">
                                <img src="/img/promotion2.avif" alt="Fashion items flat lay" />
                            </div>
                            <h3 class="category-card__title">"PROMOTIONS"</h3>
                            <p class="category-card__blurb">
                                "Explore exclusive deals on our top products. The perfect \
                                 opportunity to enrich your wardrobe with trendy pieces at \
                                 affordable prices."
                            </p>
                            <div class="category-card__media">
                                <img src="/img/promotion1.avif" alt="Additional fashion items" />
                            </div>
                        </div>
                    </div>

                    <div class="categories__column">
                        {right.iter().map(render_card).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
