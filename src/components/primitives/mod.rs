//! Primitive Components
//!
//! Basic building blocks: a button and a like toggle.

pub mod button;
pub mod like;
