//! SelectionState - ListGroup Items and Local Highlight

use gpui::SharedString;

/// One rendered row of a list group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Position in the list, used as the row key
    pub index: usize,
    pub label: SharedString,
    pub active: bool,
}

/// Items shown by a list group plus the highlighted row
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    items: Vec<SharedString>,
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new(items: Vec<SharedString>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highlight a row and return its value; out-of-range rows are ignored
    pub fn select(&mut self, index: usize) -> Option<SharedString> {
        let item = self.items.get(index)?.clone();
        self.selected = Some(index);
        Some(item)
    }

    /// Rows to render, keyed by position
    pub fn rows(&self) -> Vec<ListRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, label)| ListRow {
                index,
                label: label.clone(),
                active: self.selected == Some(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::places::default_places;

    #[test]
    fn nothing_selected_initially() {
        let state = SelectionState::new(default_places());
        assert_eq!(state.selected, None);
        assert!(state.rows().iter().all(|r| !r.active));
    }

    #[test]
    fn select_returns_value_not_position() {
        let mut state = SelectionState::new(default_places());
        for (ix, expected) in default_places().iter().enumerate() {
            assert_eq!(state.select(ix).as_ref(), Some(expected));
            assert_eq!(state.selected, Some(ix));
        }
    }

    #[test]
    fn duplicate_labels_keep_their_own_row() {
        let items: Vec<SharedString> = vec!["Paris".into(), "Tokyo".into(), "Paris".into()];
        let mut state = SelectionState::new(items);

        assert_eq!(state.select(2), Some(SharedString::from("Paris")));
        let active: Vec<usize> = state
            .rows()
            .iter()
            .filter(|r| r.active)
            .map(|r| r.index)
            .collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = SelectionState::new(default_places());
        state.select(1);
        assert_eq!(state.select(99), None);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn rows_are_stable_across_renders() {
        let mut state = SelectionState::new(default_places());
        state.select(3);
        assert_eq!(state.rows(), state.rows());
    }

    #[test]
    fn empty_list_has_no_rows() {
        let mut state = SelectionState::new(Vec::new());
        assert!(state.is_empty());
        assert!(state.rows().is_empty());
        assert_eq!(state.select(0), None);
    }
}
