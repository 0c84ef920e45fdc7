//! Alert Component
//!
//! A dismissible banner. Clicking the close control calls `on_close`; the alert
//! never hides itself, the owner decides whether to keep rendering it.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::CustomIconName;
use crate::domain::color::{ColorVariant, StyleScope};
use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// Alert banner component
#[derive(IntoElement)]
pub struct Alert {
    id: ElementId,
    color: ColorVariant,
    children: Vec<AnyElement>,
    dismissible: bool,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Alert {
    /// Create a new warning-colored, dismissible alert
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            color: ColorVariant::Warning,
            children: Vec::new(),
            dismissible: true,
            on_close: None,
        }
    }

    /// Set the color variant
    pub fn color(mut self, color: impl Into<ColorVariant>) -> Self {
        self.color = color.into();
        self
    }

    /// Show or hide the close control
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Style reference, e.g. `alert alert-warning`
    pub fn class_name(&self, scope: StyleScope) -> SharedString {
        self.color.class_name("alert", scope)
    }
}

impl ParentElement for Alert {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Alert {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = GalleryColors::subtle(&self.color);
        let on_close = self.on_close;
        let close_id = ElementId::Name(SharedString::from(format!("{}-close", self.id)));

        div()
            .id(self.id)
            .w_full()
            .px_4()
            .py_3()
            .bg(palette.bg)
            .border_1()
            .border_color(palette.border)
            .rounded_md()
            .flex()
            .items_center()
            .justify_between()
            .text_color(palette.text)
            .child(
                div()
                    .flex_1()
                    .text_size(px(Typography::TEXT_BASE))
                    .children(self.children),
            )
            .when(self.dismissible, |el| {
                el.child(
                    div()
                        .id(close_id)
                        .size(px(24.0))
                        .rounded_sm()
                        .flex()
                        .items_center()
                        .justify_center()
                        .cursor_pointer()
                        .hover(|s| s.bg(palette.hover_bg))
                        .when_some(on_close, |el, handler| {
                            el.on_click(move |_event: &ClickEvent, window, cx| {
                                handler(window, cx);
                            })
                        })
                        .child(Icon::from(CustomIconName::Close).size(px(16.0))),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dismissible_warning() {
        let alert = Alert::new("a");
        assert!(alert.dismissible);
        assert_eq!(alert.color, ColorVariant::Warning);
        assert_eq!(&**alert.class_name(StyleScope::Global), "alert alert-warning");
    }

    #[test]
    fn children_are_collected_in_order() {
        let alert = Alert::new("a").child("one").child("two");
        assert_eq!(alert.children.len(), 2);
    }

    #[test]
    fn scoped_class_uses_alert_module() {
        let alert = Alert::new("a").color("success");
        assert_eq!(
            &**alert.class_name(StyleScope::Scoped),
            "Alert_alert Alert_alert-success"
        );
    }
}
