//! Console Panel
//!
//! Read-only view of the gallery console: one line per entry, newest first.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Rgba, Styled,
    Subscription, Window,
};

use crate::constants::{CONSOLE_PANEL_HEIGHT, CONSOLE_VISIBLE_LINES};
use crate::state::log_state::LogState;
use crate::theme::colors::GalleryColors;
use crate::utils::format::{format_time_ms, truncate};

/// Longest message shown on one console line
const MAX_LINE_CHARS: usize = 160;

/// A console entry ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLine {
    pub time: String,
    pub level: &'static str,
    pub level_color: Rgba,
    pub message: String,
}

/// The `limit` newest entries, newest first
pub fn console_lines(logs: &LogState, limit: usize) -> Vec<ConsoleLine> {
    logs.entries()
        .iter()
        .rev()
        .take(limit)
        .map(|entry| ConsoleLine {
            time: format_time_ms(&entry.timestamp),
            level: entry.level.label(),
            level_color: entry.level.color(),
            message: truncate(&entry.message, MAX_LINE_CHARS),
        })
        .collect()
}

/// Console panel docked under the gallery
pub struct ConsolePanel {
    logs: Entity<LogState>,
    _subscription: Subscription,
}

impl ConsolePanel {
    pub fn new(logs: Entity<LogState>, cx: &mut Context<Self>) -> Self {
        let subscription = cx.observe(&logs, |_this, _logs, cx| cx.notify());
        Self {
            logs,
            _subscription: subscription,
        }
    }
}

fn render_line(line: ConsoleLine) -> impl IntoElement {
    div()
        .flex()
        .gap_3()
        .text_size(px(12.0))
        .child(div().w(px(90.0)).text_color(GalleryColors::text_muted()).child(line.time))
        .child(div().w(px(48.0)).text_color(line.level_color).child(line.level))
        .child(div().flex_1().text_color(GalleryColors::text_light()).child(line.message))
}

impl Render for ConsolePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let lines = console_lines(self.logs.read(cx), CONSOLE_VISIBLE_LINES);

        div()
            .id("console")
            .h(px(CONSOLE_PANEL_HEIGHT))
            .w_full()
            .px_4()
            .py_2()
            .bg(GalleryColors::console_bg())
            .overflow_y_scroll()
            .child(
                div()
                    .pb_1()
                    .text_size(px(13.0))
                    .text_color(GalleryColors::text_muted())
                    .child("Console"),
            )
            .children(lines.into_iter().map(render_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::log_state::LogLevel;

    #[test]
    fn newest_line_comes_first() {
        let mut logs = LogState::new(10);
        logs.push_now(LogLevel::Info, "Tokyo");
        logs.push_now(LogLevel::Debug, "Like clicked");

        let lines = console_lines(&logs, 10);
        let messages: Vec<_> = lines.iter().map(|l| l.message.as_str()).collect();
        assert_eq!(messages, vec!["Like clicked", "Tokyo"]);
        assert_eq!(lines[0].level, "DEBUG");
        assert_eq!(lines[1].level, "INFO");
    }

    #[test]
    fn limit_keeps_only_the_newest() {
        let mut logs = LogState::new(10);
        for city in ["New York", "London", "Paris"] {
            logs.push_now(LogLevel::Info, city);
        }

        let lines = console_lines(&logs, 2);
        let messages: Vec<_> = lines.iter().map(|l| l.message.as_str()).collect();
        assert_eq!(messages, vec!["Paris", "London"]);
    }

    #[test]
    fn long_messages_are_shortened() {
        let mut logs = LogState::new(1);
        logs.push_now(LogLevel::Warn, "x".repeat(500));
        let lines = console_lines(&logs, 1);
        assert_eq!(lines[0].message.chars().count(), MAX_LINE_CHARS);
        assert!(lines[0].message.ends_with("..."));
    }
}
