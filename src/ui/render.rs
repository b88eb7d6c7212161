//! Main rendering module for pitwall
//!
//! Renders the complete UI:
//! - Navigation bar with one entry per page (top)
//! - Active route outlet (center)
//! - Status bar with the current path (bottom)
//! - Address bar popup + flash messages

use crate::app::App;
use crate::pages::{self, PageId};
use crate::router::View;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

const NAV_HEIGHT: u16 = 2;

/// Baseline reset: every cell gets the default background and text color,
/// so nothing from the terminal's own palette shows through.
pub fn render_baseline(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(theme.block_style()), area);
}

/// Main render function – entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    render_baseline(frame, theme);

    let area = frame.area();
    let status_height = if app.config.show_status_bar { 1 } else { 0 };
    let vertical = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(status_height),
    ])
    .split(area);

    render_nav_bar(frame, app, vertical[0]);
    render_outlet(frame, app, vertical[1]);
    if app.config.show_status_bar {
        render_status_bar(frame, app, vertical[2]);
    }

    if let Some(buffer) = &app.address_bar {
        widgets::render_input_popup(
            frame,
            "Go to",
            buffer,
            "Enter: navigate   Esc: cancel",
            theme,
            area,
        );
    }

    if let Some(msg) = &app.flash_message {
        let flash_area = if app.config.show_status_bar {
            vertical[2]
        } else {
            vertical[1]
        };
        widgets::render_flash_message(frame, &msg.text, msg.is_error, theme, flash_area);
    }
}

fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::horizontal([Constraint::Length(12), Constraint::Min(10)]).split(inner);

    let brand = Line::from(vec![
        Span::styled(" ▌", theme.tab_active()),
        Span::styled("pitwall", theme.tab_active()),
    ]);
    frame.render_widget(Paragraph::new(brand).style(theme.block_style()), chunks[0]);

    let titles: Vec<Line> = PageId::ALL
        .iter()
        .map(|page| Line::from(format!("{} {}", page.key_hint(), page.label())))
        .collect();
    // No highlight while a not-found path is active
    let (selected, highlight) = match app.router.current_page() {
        Some(page) => (page.index(), theme.tab_active()),
        None => (0, theme.tab_inactive()),
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.tab_inactive())
        .highlight_style(highlight)
        .divider(Span::styled(" │ ", theme.tab_inactive()));
    frame.render_widget(tabs, chunks[1]);
}

/// Draw whatever the current location resolves to
fn render_outlet(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    match app.router.current_view() {
        View::Page(page) => pages::render(frame, *page, theme, area),
        View::NotFound(path) => {
            pages::not_found::render(frame, path, app.router.table().routes(), theme, area)
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut left = format!(
        " {}  [{}/{}]",
        app.router.current_path(),
        app.router.history_position(),
        app.router.history_len()
    );
    if app.router.can_go_back() {
        left.push_str("  ←");
    }
    if app.router.can_go_forward() {
        left.push_str("  →");
    }
    let right = "1-3 pages  g go to  h/l history  q quit";
    widgets::render_status_bar(frame, &left, right, app.theme(), area);
}
