//! LikeState - Heart Toggle State

/// Liked flag owned by a single Like component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    liked: bool,
}

impl Default for LikeState {
    fn default() -> Self {
        Self { liked: true }
    }
}

impl LikeState {
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    /// Handle one click: flip first, then notify the owner exactly once
    pub fn click(&mut self, notify: impl FnOnce(bool)) {
        let liked = self.toggle();
        notify(liked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_liked() {
        assert!(LikeState::default().is_liked());
    }

    #[test]
    fn parity_follows_click_count() {
        let mut state = LikeState::default();
        for clicks in 1..=9 {
            state.click(|_| {});
            assert_eq!(state.is_liked(), clicks % 2 == 0, "after {clicks} clicks");
        }
    }

    #[test]
    fn notifies_once_per_click_with_new_value() {
        let mut state = LikeState::default();
        let mut seen = Vec::new();

        for _ in 0..4 {
            state.click(|liked| seen.push(liked));
        }

        assert_eq!(seen, vec![false, true, false, true]);
    }
}
