//! ListGroup Component
//!
//! A heading over a column of selectable rows. The highlighted row is local to
//! the list; the owner only hears about the selected value.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::EMPTY_LIST_MESSAGE;
use crate::state::selection_state::{ListRow, SelectionState};
use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

type SelectHandler = Box<dyn Fn(&SharedString, &mut Window, &mut gpui::App) + 'static>;

/// Selectable list with a heading
pub struct ListGroup {
    heading: SharedString,
    selection: SelectionState,
    on_select_item: Option<SelectHandler>,
}

impl ListGroup {
    pub fn new(heading: impl Into<SharedString>, items: Vec<SharedString>) -> Self {
        Self {
            heading: heading.into(),
            selection: SelectionState::new(items),
            on_select_item: None,
        }
    }

    /// Set the item selection handler
    pub fn on_select_item(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_select_item = Some(Box::new(handler));
        self
    }

    /// Highlight row `index`, then hand the selection handler and the row's
    /// value to `notify`. Missing rows change nothing and notify nobody.
    fn select_with(
        &mut self,
        index: usize,
        notify: impl FnOnce(&SelectHandler, &SharedString),
    ) -> Option<SharedString> {
        let Some(item) = self.selection.select(index) else {
            tracing::warn!(index, "ignoring click on missing row");
            return None;
        };
        tracing::debug!(index, item = %item, "list item selected");
        if let Some(handler) = self.on_select_item.as_ref() {
            notify(handler, &item);
        }
        Some(item)
    }

    fn select(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        let selected = self.select_with(index, |handler, item| {
            let app: &mut gpui::App = cx;
            handler(item, window, app);
        });
        if selected.is_some() {
            cx.notify();
        }
    }

    fn render_row(&self, row: ListRow, cx: &Context<Self>) -> impl IntoElement {
        let index = row.index;
        let (bg, text) = if row.active {
            (GalleryColors::list_active_bg(), GalleryColors::text_light())
        } else {
            (GalleryColors::content_bg(), GalleryColors::text_primary())
        };

        div()
            .id(("list-item", index))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg)
            .text_color(text)
            .text_size(px(Typography::TEXT_BASE))
            .border_b_1()
            .border_color(GalleryColors::border())
            .cursor_pointer()
            .when(!row.active, |el| el.hover(|s| s.bg(GalleryColors::list_hover_bg())))
            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                this.select(index, window, cx);
            }))
            .child(row.label)
    }
}

impl Render for ListGroup {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let heading = div()
            .text_size(px(Typography::TEXT_XL))
            .text_color(GalleryColors::text_primary())
            .mb_2()
            .child(self.heading.clone());

        let body = if self.selection.is_empty() {
            div()
                .text_color(GalleryColors::text_secondary())
                .child(EMPTY_LIST_MESSAGE)
                .into_any_element()
        } else {
            div()
                .w_full()
                .border_1()
                .border_color(GalleryColors::border())
                .rounded_md()
                .overflow_hidden()
                .children(
                    self.selection
                        .rows()
                        .into_iter()
                        .map(|row| self.render_row(row, cx)),
                )
                .into_any_element()
        };

        div().flex().flex_col().child(heading).child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::places::default_places;

    fn places_list() -> ListGroup {
        ListGroup::new("Places", default_places()).on_select_item(|_item, _window, _cx| {})
    }

    #[test]
    fn starts_without_highlight() {
        let list = places_list();
        assert_eq!(&**list.heading, "Places");
        assert_eq!(list.selection.rows().len(), 5);
        assert!(list.selection.rows().iter().all(|r| !r.active));
    }

    #[test]
    fn handler_receives_clicked_value() {
        let mut list = places_list();
        let mut seen = Vec::new();

        for index in [2, 0, 4] {
            list.select_with(index, |_handler, item| seen.push(item.clone()));
        }

        let expected: Vec<SharedString> =
            vec!["Tokyo".into(), "New York".into(), "Paris".into()];
        assert_eq!(seen, expected);
        let active: Vec<usize> = list
            .selection
            .rows()
            .iter()
            .filter(|r| r.active)
            .map(|r| r.index)
            .collect();
        assert_eq!(active, vec![4]);
    }

    #[test]
    fn handler_fires_once_per_click() {
        let mut list = places_list();
        let mut calls = 0;
        list.select_with(1, |_, _| calls += 1);
        list.select_with(1, |_, _| calls += 1);
        assert_eq!(calls, 2);
    }

    #[test]
    fn missing_row_notifies_nobody() {
        let mut list = places_list();
        let mut calls = 0;
        assert_eq!(list.select_with(7, |_, _| calls += 1), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn without_handler_only_highlight_moves() {
        let mut list = ListGroup::new("Places", default_places());
        let mut calls = 0;
        let item = list.select_with(3, |_, _| calls += 1);
        assert_eq!(item, Some(SharedString::from("London")));
        assert_eq!(calls, 0);
    }

    #[test]
    fn empty_list_is_allowed() {
        let list = ListGroup::new("Places", Vec::new());
        assert!(list.selection.is_empty());
    }
}
