//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route and form descriptions live here as plain data so pages stay thin
//! and the data can be tested without rendering.

pub mod form;
pub mod screen;
