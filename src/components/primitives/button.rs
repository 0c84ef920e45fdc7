//! Button Component
//!
//! A clickable control painted in a color variant. Clicks are forwarded to the
//! owner through a zero-argument callback.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::DEFAULT_BUTTON_LABEL;
use crate::domain::color::{ColorVariant, StyleScope};
use crate::theme::colors::{GalleryColors, VariantPalette};
use crate::theme::typography::Typography;

/// Resolved presentation of a button: a style reference plus the colors it maps to
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Class-style reference, e.g. `btn btn-primary`
    pub class_name: SharedString,
    pub palette: VariantPalette,
}

impl ButtonStyle {
    /// Resolve a color variant; unknown variants get the neutral palette
    pub fn resolve(color: &ColorVariant, scope: StyleScope) -> Self {
        Self {
            class_name: color.class_name("btn", scope),
            palette: GalleryColors::solid(color),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    color: ColorVariant,
    scope: StyleScope,
    on_click: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button in the primary color
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: DEFAULT_BUTTON_LABEL.into(),
            color: ColorVariant::Primary,
            scope: StyleScope::Global,
            on_click: None,
        }
    }

    /// Set the color variant from a name or a parsed variant
    pub fn color(mut self, color: impl Into<ColorVariant>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    /// Choose global or scoped style references
    pub fn scope(mut self, scope: StyleScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// The style this button renders with
    pub fn style_ref(&self) -> ButtonStyle {
        ButtonStyle::resolve(&self.color, self.scope)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.style_ref();
        let palette = style.palette;
        tracing::trace!(class = %style.class_name, "render button");

        let mut element = div()
            .id(self.id)
            .px(px(16.0))
            .py(px(8.0))
            .bg(palette.bg)
            .border_1()
            .border_color(palette.border)
            .text_color(palette.text)
            .text_size(px(Typography::TEXT_BASE))
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(palette.hover_bg))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx));
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_style_reference_mentions_primary() {
        let button = Button::new("b").color("primary");
        assert!(button.style_ref().class_name.contains("primary"));
    }

    #[test]
    fn scoped_style_reference_mentions_color() {
        let button = Button::new("b").color("danger").scope(StyleScope::Scoped);
        assert_eq!(&**button.style_ref().class_name, "Button_btn Button_btn-danger");
    }

    #[test]
    fn unrecognized_color_still_resolves() {
        let style = ButtonStyle::resolve(&ColorVariant::parse("ultraviolet"), StyleScope::Global);
        assert_eq!(&**style.class_name, "btn btn-ultraviolet");
        assert_eq!(style.palette, GalleryColors::solid(&ColorVariant::parse("other")));
    }

    #[test]
    fn resolving_twice_is_identical() {
        let button = Button::new("b").color("warning");
        assert_eq!(button.style_ref(), button.style_ref());
    }

    #[test]
    fn defaults() {
        let button = Button::new("b");
        assert_eq!(&**button.label, DEFAULT_BUTTON_LABEL);
        assert_eq!(button.color, ColorVariant::Primary);
        assert!(button.on_click.is_none());
    }
}
