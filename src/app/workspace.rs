//! Workspace - Gallery Container
//!
//! Owns the alert visibility flag and the child component entities. Children
//! report back through callbacks that hold a weak handle to the workspace, so
//! every state change is applied here and followed by a re-render.

use gpui::{
    div, prelude::*, px, App, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, WeakEntity, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::alert::Alert;
use crate::components::composite::list_group::ListGroup;
use crate::components::layout::console::ConsolePanel;
use crate::components::primitives::button::Button;
use crate::components::primitives::like::Like;
use crate::config::LoadedConfig;
use crate::constants::{ALERT_MESSAGE, PLACES_HEADING};
use crate::domain::color::{ColorVariant, StyleScope};
use crate::domain::places::places_from;
use crate::state::alert_state::AlertState;
use crate::state::log_state::LogLevel;
use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// What the gallery's children report back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// Button clicked
    ShowAlert,
    /// Alert close clicked
    DismissAlert,
    /// ListGroup row clicked, with the row's value
    ItemSelected(SharedString),
    /// Like toggled
    LikeClicked,
}

/// Apply `event` to the alert flag and return the console line it produces
fn apply_event(alert: &mut AlertState, event: &GalleryEvent) -> Option<(LogLevel, String)> {
    match event {
        GalleryEvent::ShowAlert => {
            alert.show();
            None
        }
        GalleryEvent::DismissAlert => {
            alert.dismiss();
            None
        }
        GalleryEvent::ItemSelected(item) => Some((LogLevel::Info, item.to_string())),
        GalleryEvent::LikeClicked => Some((LogLevel::Debug, "Like clicked".to_string())),
    }
}

/// Deliver `event` to the workspace behind `workspace`, if it is still alive
fn emit(workspace: &WeakEntity<Workspace>, event: GalleryEvent, cx: &mut App) {
    let _ = workspace.update(cx, |this, cx| this.handle(event, cx));
}

/// Main workspace containing the gallery layout
pub struct Workspace {
    entities: AppEntities,
    alert: AlertState,
    button_color: ColorVariant,
    style_scope: StyleScope,
    list_group: Entity<ListGroup>,
    like: Entity<Like>,
    console: Entity<ConsolePanel>,
}

impl Workspace {
    pub fn new(entities: AppEntities, loaded: &LoadedConfig, cx: &mut Context<Self>) -> Self {
        let config = &loaded.config;

        let workspace = cx.weak_entity();
        let places = places_from(&config.places);
        let list_group = cx.new(|_| {
            ListGroup::new(PLACES_HEADING, places).on_select_item(move |item, _window, cx| {
                emit(&workspace, GalleryEvent::ItemSelected(item.clone()), cx);
            })
        });

        let workspace = cx.weak_entity();
        let like = cx.new(|_| {
            Like::new().on_click(move |_window, cx| {
                emit(&workspace, GalleryEvent::LikeClicked, cx);
            })
        });

        let console = cx.new(|cx| ConsolePanel::new(entities.logs.clone(), cx));

        let this = Self {
            entities,
            alert: AlertState::default(),
            button_color: ColorVariant::parse(&config.button_color),
            style_scope: config.style_scope,
            list_group,
            like,
            console,
        };
        if let Some(issue) = &loaded.issue {
            this.push_console(LogLevel::Warn, issue.clone(), cx);
        }
        this
    }

    fn handle(&mut self, event: GalleryEvent, cx: &mut Context<Self>) {
        tracing::info!(?event, "gallery event");
        if let Some((level, message)) = apply_event(&mut self.alert, &event) {
            self.push_console(level, message, cx);
        }
        cx.notify();
    }

    fn push_console(&self, level: LogLevel, message: impl Into<String>, cx: &mut Context<Self>) {
        let message = message.into();
        self.entities.logs.update(cx, |logs, cx| {
            logs.push_now(level, message);
            cx.notify();
        });
    }

    fn render_alert(&self, cx: &Context<Self>) -> impl IntoElement {
        let workspace = cx.weak_entity();
        Alert::new("gallery-alert")
            .on_close(move |_window, cx| emit(&workspace, GalleryEvent::DismissAlert, cx))
            .child(ALERT_MESSAGE)
    }

    fn render_button(&self, cx: &Context<Self>) -> impl IntoElement {
        let workspace = cx.weak_entity();
        Button::new("show-alert")
            .color(self.button_color.clone())
            .scope(self.style_scope)
            .on_click(move |_window, cx| emit(&workspace, GalleryEvent::ShowAlert, cx))
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GalleryColors::background())
            .child(
                // Gallery
                div()
                    .id("gallery")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .bg(GalleryColors::content_bg())
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .text_color(GalleryColors::text_secondary())
                            .child("Component Gallery"),
                    )
                    .when(self.alert.is_visible(), |el| el.child(self.render_alert(cx)))
                    .child(self.list_group.clone())
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_4()
                            .child(self.render_button(cx))
                            .child(self.like.clone()),
                    ),
            )
            .child(self.console.clone())
    }
}
