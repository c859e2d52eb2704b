//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the pieces pages share: home navigation buttons and
//! labelled form inputs.

pub mod form_field;
pub mod nav_button;
