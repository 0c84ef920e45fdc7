//! Composite Components
//!
//! Components built from several primitives.

pub mod alert;
pub mod list_group;
