//! Driver analytics page
//!
//! Per-driver breakdown: lap times, stint/tyre history and pit stop
//! outlook side by side.

use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "Driver Analytics";
const SUBTITLE: &str = "Lap time trends, stints and pit stop outlook per driver";
const NO_DRIVER: &str = "Select a driver to see analytics";

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let inner = widgets::render_page_panel(frame, TITLE, theme, area);
    if inner.height < 4 || inner.width < 20 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(2), // subtitle
        Constraint::Min(3),    // cards
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", SUBTITLE), theme.caption()))
            .style(theme.paper()),
        rows[0],
    );

    let cards = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(rows[1]);

    widgets::render_placeholder_card(frame, "Lap Times", NO_DRIVER, theme, cards[0]);
    widgets::render_placeholder_card(frame, "Stints", NO_DRIVER, theme, cards[1]);
    widgets::render_placeholder_card(frame, "Pit Outlook", NO_DRIVER, theme, cards[2]);
}
