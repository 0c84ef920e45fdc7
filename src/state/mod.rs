//! State - Plain state owned by components and the gallery
//!
//! Each piece of state has exactly one owner. Entities wrap these structs and
//! call `cx.notify()` after mutating them.

pub mod alert_state;
pub mod like_state;
pub mod log_state;
pub mod selection_state;
