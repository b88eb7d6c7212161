//! Live telemetry page
//!
//! Layout: timing tower on the left, track map and car telemetry on the
//! right. Panels show an empty state until a session feed is attached.

use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "Live Telemetry";
const SUBTITLE: &str = "Real-time positions, timing and car data for the running session";
const NO_FEED: &str = "Waiting for live session feed…";

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let inner = widgets::render_page_panel(frame, TITLE, theme, area);
    if inner.height < 4 || inner.width < 20 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(2), // subtitle
        Constraint::Min(3),    // panels
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", SUBTITLE), theme.caption()))
            .style(theme.paper()),
        rows[0],
    );

    let columns =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(rows[1]);
    let right = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    widgets::render_placeholder_card(frame, "Timing Tower", NO_FEED, theme, columns[0]);
    widgets::render_placeholder_card(frame, "Track Map", NO_FEED, theme, right[0]);
    widgets::render_placeholder_card(frame, "Car Telemetry", NO_FEED, theme, right[1]);
}
