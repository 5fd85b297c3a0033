pub mod form;
pub mod list;

use contracts::domain::product::Product;
use leptos::prelude::*;

use self::form::ProductForm;
use self::list::ProductList;

/// Admin products section: list view with an inline create/edit form.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let (editing, set_editing) = signal::<Option<Product>>(None);
    let (show_form, set_show_form) = signal(false);

    let open_create = Callback::new(move |_: ()| {
        set_editing.set(None);
        set_show_form.set(true);
    });

    let open_edit = Callback::new(move |product: Product| {
        set_editing.set(Some(product));
        set_show_form.set(true);
    });

    let close_form = Callback::new(move |_: ()| {
        set_show_form.set(false);
        set_editing.set(None);
    });

    view! {
        <Show
            when=move || show_form.get()
            fallback=move || view! {
                <ProductList on_add=open_create on_edit=open_edit />
            }
        >
            <ProductForm
                product=editing.get()
                on_save=close_form
                on_cancel=close_form
            />
        </Show>
    }
}
