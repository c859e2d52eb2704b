//! Sign-up page with username, email, and password inputs.

use leptos::prelude::*;

use crate::components::form_field::FormFieldRow;
use crate::util::form::sign_up_fields;

#[component]
pub fn SignUpPage() -> impl IntoView {
    // Native `required` validation runs before this fires.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        log::debug!("sign-up submitted; no handler attached");
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h2 class="form-card__title">"Sign Up"</h2>
                <form class="form-card__form" on:submit=on_submit>
                    {sign_up_fields()
                        .iter()
                        .map(|&field| view! { <FormFieldRow field=field/> })
                        .collect_view()}
                    <div>
                        <button class="form-button" type="submit">"Sign Up"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
