//! Login screens for the three account roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three routes share one form and differ only in heading. Submitting
//! only suppresses the browser's default navigation; credentials are not
//! checked or sent anywhere.

use leptos::prelude::*;

use crate::components::form_field::FormFieldRow;
use crate::net::types::Role;
use crate::util::form::login_fields;
use crate::util::screen::Screen;

/// Username/password form headed for `role`.
#[component]
pub fn LoginForm(role: Role) -> impl IntoView {
    let heading = Screen::login_for(role).button_label().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        log::debug!("{role} login submitted; no handler attached");
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h2 class="form-card__title">{heading}</h2>
                <form class="form-card__form" on:submit=on_submit>
                    {login_fields()
                        .iter()
                        .map(|&field| view! { <FormFieldRow field=field/> })
                        .collect_view()}
                    <div>
                        <button class="form-button" type="submit">"Login"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Admin/> }
}

#[component]
pub fn DoctorLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Doctor/> }
}

#[component]
pub fn PatientLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Patient/> }
}
