//! Component Gallery Library
//!
//! Four small GPUI components (Button, Alert, ListGroup, Like) wired together
//! by a container view. State lives with the component that owns it; children
//! report interactions back through callback props.

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod state;
pub mod theme;
pub mod utils;
