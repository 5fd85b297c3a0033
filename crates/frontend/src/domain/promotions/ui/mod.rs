pub mod form;
pub mod list;

use contracts::domain::promotion::Promotion;
use leptos::prelude::*;

use self::form::PromotionForm;
use self::list::PromotionList;

/// Admin promotions section: list view with an inline create/edit form.
#[component]
pub fn PromotionsAdminPage() -> impl IntoView {
    let (editing, set_editing) = signal::<Option<Promotion>>(None);
    let (show_form, set_show_form) = signal(false);

    let open_create = Callback::new(move |_: ()| {
        set_editing.set(None);
        set_show_form.set(true);
    });

    let open_edit = Callback::new(move |promotion: Promotion| {
        set_editing.set(Some(promotion));
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
                <PromotionList on_add=open_create on_edit=open_edit />
            }
        >
            <PromotionForm
                promotion=editing.get()
                on_save=close_form
                on_cancel=close_form
            />
        </Show>
    }
}
