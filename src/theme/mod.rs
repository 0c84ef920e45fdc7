//! Theme - Colors and typography

pub mod colors;
pub mod typography;
