//! Horizontally paged item strip.
//!
//! One parameterized widget covers both storefront variants: the
//! multi-item responsive row (arrows only) and the single-item stepper
//! with position dots. Paging math lives in [`state`] and [`window`];
//! the widget only wires signals to it.

pub mod state;
pub mod viewport;
pub mod window;

use self::state::CarouselState;
use self::viewport::use_element_width;
use self::window::effective_items_per_view;
use crate::shared::icons::icon;
use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn Carousel<T>(
    /// Items to page over; the widget never inspects them
    items: Vec<T>,
    /// Renders one item; receives the item and its index in `items`
    render_item: Callback<(T, usize), AnyView>,
    /// Upper bound on simultaneously visible items
    #[prop(default = 5)]
    items_per_view: usize,
    /// Fixed layout width of one item, px
    #[prop(default = 252.0)]
    item_width: f64,
    /// Spacing between items, px
    #[prop(default = 16.0)]
    gap: f64,
    /// Render prev/next controls (disabled at the bounds, never hidden)
    #[prop(default = true)]
    show_arrows: bool,
    /// Render jump-to position dots under the strip
    #[prop(default = false)]
    show_dots: bool,
    /// Additional CSS classes on the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    if items.is_empty() {
        return ().into_any();
    }

    let item_count = items.len();
    // Starts with nothing fitting; the first measurement opens the window.
    let state = RwSignal::new(CarouselState::new(item_count, 0));
    let container = NodeRef::<Div>::new();
    let width = use_element_width(container);

    Effect::new(move |_| {
        let per_view = effective_items_per_view(width.get(), item_width, gap, items_per_view);
        state.update(|s| s.set_layout(item_count, per_view));
    });

    let on_prev = move |_| state.update(|s| s.move_backward());
    let on_next = move |_| state.update(|s| s.move_forward());

    let visible = move || {
        let (start, len) = state.get().visible_range();
        items[start..start + len]
            .iter()
            .cloned()
            .enumerate()
            .map(|(offset, item)| (start + offset, item))
            .collect::<Vec<_>>()
    };

    let wrapper_class = move || format!("carousel {}", class.get().unwrap_or_default());
    let item_style = format!("width: {item_width}px; min-width: {item_width}px");

    view! {
        <div class=wrapper_class node_ref=container>
            <div class="carousel__track" style=format!("gap: {gap}px")>
                {move || {
                    let item_style = item_style.clone();
                    visible()
                        .into_iter()
                        .map(|(index, item)| {
                            view! {
                                <div class="carousel__item" style=item_style.clone()>
                                    {render_item.run((item, index))}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || show_arrows>
                <button
                    class="carousel__arrow carousel__arrow--prev"
                    on:click=on_prev
                    disabled=move || !state.get().can_move_backward()
                    aria-label="Previous items"
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="carousel__arrow carousel__arrow--next"
                    on:click=on_next
                    disabled=move || !state.get().can_move_forward()
                    aria-label="Next items"
                >
                    {icon("chevron-right")}
                </button>
            </Show>

            <Show when=move || show_dots && state.get().items_per_view() > 0>
                <div class="carousel__dots">
                    {move || {
                        (0..=state.get().max_index())
                            .map(|i| {
                                let dot_class = move || {
                                    if state.get().current_index() == i {
                                        "carousel__dot carousel__dot--active"
                                    } else {
                                        "carousel__dot"
                                    }
                                };
                                view! {
                                    <button
                                        class=dot_class
                                        on:click=move |_| state.update(|s| s.jump_to(i as isize))
                                        aria-label=format!("Go to item {}", i + 1)
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
