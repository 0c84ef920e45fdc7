//! Domain - Plain data shared by components and the gallery

pub mod color;
pub mod places;
