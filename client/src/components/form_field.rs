//! Labelled, uncontrolled form input.

use leptos::prelude::*;

use crate::util::form::FormField;

#[component]
pub fn FormFieldRow(field: FormField) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=field.id>{field.label}</label>
            <input
                class="form-field__input"
                type=field.kind.as_str()
                id=field.id
                name=field.id
                required=true
            />
        </div>
    }
}
