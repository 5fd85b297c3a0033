//! Container width tracking for a single carousel instance.

use leptos::html::Div;
use leptos::prelude::*;

/// Tracks the rendered width of the element behind `node`.
///
/// Measures once the node is mounted and again on every window resize.
/// Each call owns its own listener and signal, so multiple carousels on
/// one page never observe each other; the listener is dropped with the
/// component scope.
pub fn use_element_width(node: NodeRef<Div>) -> Signal<f64> {
    let (width, set_width) = signal(0.0_f64);

    let measure = move || {
        if let Some(el) = node.get_untracked() {
            set_width.set(el.offset_width() as f64);
        }
    };

    // First measurement: runs when the node ref is populated.
    Effect::new(move |_| {
        if node.get().is_some() {
            measure();
        }
    });

    let _ = window_event_listener(leptos::ev::resize, move |_| measure());

    width.into()
}
