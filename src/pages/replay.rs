//! Session replay page

use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "Session Replay";
const SUBTITLE: &str = "Step through a completed session lap by lap";

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let inner = widgets::render_page_panel(frame, TITLE, theme, area);
    if inner.height < 4 || inner.width < 20 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(2), // subtitle
        Constraint::Min(3),    // track view
        Constraint::Length(3), // timeline
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", SUBTITLE), theme.caption()))
            .style(theme.paper()),
        rows[0],
    );

    widgets::render_placeholder_card(frame, "Track", "No session loaded", theme, rows[1]);
    widgets::render_placeholder_card(frame, "Timeline", "--:--:-- / --:--:--", theme, rows[2]);
}
