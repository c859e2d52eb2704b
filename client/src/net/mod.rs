//! Account types shared with a future backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing in the UI sends or receives these yet; `types` fixes their wire
//! shape so a backend can adopt them unchanged.

pub mod types;
