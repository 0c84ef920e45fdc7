//! Like Component
//!
//! A heart toggle that owns its liked flag. Every click flips the flag and then
//! tells the owner through the click callback.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::CustomIconName;
use crate::constants::LIKE_ICON_SIZE;
use crate::state::like_state::LikeState;
use crate::theme::colors::GalleryColors;

type LikeHandler = Box<dyn Fn(&mut Window, &mut gpui::App) + 'static>;

/// Heart toggle with private liked state
pub struct Like {
    state: LikeState,
    on_click: Option<LikeHandler>,
}

impl Like {
    /// Create a Like that starts out liked
    pub fn new() -> Self {
        Self {
            state: LikeState::default(),
            on_click: None,
        }
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Icon and tint for the current state
    pub fn icon(&self) -> (CustomIconName, gpui::Rgba) {
        if self.state.is_liked() {
            (CustomIconName::HeartFill, GalleryColors::like_red())
        } else {
            (CustomIconName::HeartOutline, GalleryColors::like_outline())
        }
    }

    /// Flip the liked flag, then hand the click handler to `notify` once
    fn toggle_with(&mut self, notify: impl FnOnce(&LikeHandler)) -> bool {
        let on_click = self.on_click.as_ref();
        self.state.click(|liked| {
            tracing::debug!(liked, "like toggled");
            if let Some(handler) = on_click {
                notify(handler);
            }
        });
        self.state.is_liked()
    }

    fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.toggle_with(|handler| {
            let app: &mut gpui::App = cx;
            handler(window, app);
        });
        cx.notify();
    }
}

impl Default for Like {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Like {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (icon, color) = self.icon();

        div()
            .id("like")
            .size(px(LIKE_ICON_SIZE))
            .cursor_pointer()
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                this.toggle(window, cx);
            }))
            .child(
                Icon::from(icon)
                    .size(px(LIKE_ICON_SIZE))
                    .text_color(color),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn like_with_handler() -> Like {
        Like::new().on_click(|_window, _cx| {})
    }

    #[test]
    fn liked_shows_filled_red_heart() {
        let like = Like::new();
        assert_eq!(like.icon(), (CustomIconName::HeartFill, GalleryColors::like_red()));
    }

    #[test]
    fn each_click_flips_then_notifies_once() {
        let mut like = like_with_handler();
        let mut calls = 0;

        for click in 1..=5 {
            let liked = like.toggle_with(|_handler| calls += 1);
            assert_eq!(liked, click % 2 == 0, "after {click} clicks");
            assert_eq!(calls, click);
        }
    }

    #[test]
    fn icon_follows_toggle() {
        let mut like = like_with_handler();
        like.toggle_with(|_| {});
        assert_eq!(like.icon().0, CustomIconName::HeartOutline);
        like.toggle_with(|_| {});
        assert_eq!(like.icon().0, CustomIconName::HeartFill);
    }

    #[test]
    fn without_handler_state_still_flips() {
        let mut like = Like::new();
        let mut calls = 0;
        assert!(!like.toggle_with(|_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn icon_choice_is_stable_without_clicks() {
        let like = Like::new();
        assert_eq!(like.icon(), like.icon());
    }
}
