//! Static form field descriptions.
//!
//! Fields carry no state; inputs are uncontrolled and only the browser's
//! native `required` check applies.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// HTML input type of a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// One labelled input. `id` doubles as the input's `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
}

const USERNAME: FormField = FormField {
    id: "username",
    label: "Username:",
    kind: InputKind::Text,
};
const EMAIL: FormField = FormField {
    id: "email",
    label: "Email:",
    kind: InputKind::Email,
};
const PASSWORD: FormField = FormField {
    id: "password",
    label: "Password:",
    kind: InputKind::Password,
};

/// Fields shown on every login screen.
pub fn login_fields() -> &'static [FormField] {
    &[USERNAME, PASSWORD]
}

/// Fields shown on the sign-up screen.
pub fn sign_up_fields() -> &'static [FormField] {
    &[USERNAME, EMAIL, PASSWORD]
}
