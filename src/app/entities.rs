//! AppEntities - Shared Entity Handles
//!
//! Entities observed by more than one view live here. Component state (like
//! status, highlight, alert visibility) stays with its owning view.

use gpui::{App, AppContext, Entity};

use crate::state::log_state::LogState;

/// Collection of shared Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Console lines (ring buffer)
    pub logs: Entity<LogState>,
}

impl AppEntities {
    /// Initialize all entities; `log_capacity` bounds the console
    pub fn init(log_capacity: usize, cx: &mut App) -> Self {
        Self {
            logs: cx.new(|_| LogState::new(log_capacity)),
        }
    }
}
