//! Layout Components

pub mod console;
