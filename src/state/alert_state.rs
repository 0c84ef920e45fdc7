//! AlertState - Alert Visibility Owned by the Gallery

/// Whether the gallery currently renders its alert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertState {
    visible: bool,
}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Button click: show the alert
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Alert close: stop rendering it
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_initially() {
        assert!(!AlertState::default().is_visible());
    }

    #[test]
    fn show_then_dismiss() {
        let mut state = AlertState::default();
        state.show();
        assert!(state.is_visible());
        state.dismiss();
        assert!(!state.is_visible());
    }

    #[test]
    fn repeated_show_stays_visible() {
        let mut state = AlertState::default();
        state.show();
        state.show();
        assert!(state.is_visible());
        state.dismiss();
        state.dismiss();
        assert!(!state.is_visible());
    }
}
