//! Reusable UI widgets for pitwall
//!
//! - Page panel with heading
//! - Placeholder cards for panels without data
//! - Input popup (address bar)
//! - Status bar and flash messages
//! - Layout helpers

use crate::ui::theme::{TextStyleKey, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the paper panel every page sits on and return its inner area.
///
/// The heading is rendered with the theme's `h1` rule.
pub fn render_page_panel(frame: &mut Frame, title: &str, theme: &Theme, area: Rect) -> Rect {
    let block = Block::default()
        .style(theme.paper())
        .title(Span::styled(
            format!(" {} ", title),
            theme.heading(TextStyleKey::H1),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A bordered card with a caption and an empty-state message
pub fn render_placeholder_card(
    frame: &mut Frame,
    title: &str,
    message: &str,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .style(theme.paper())
        .title(Span::styled(
            format!(" {} ", title),
            theme.heading(TextStyleKey::H2),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let content = Paragraph::new(Line::styled(message, theme.text_dim()))
        .style(theme.paper())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let y_offset = inner.height.saturating_sub(1) / 2;
    let message_area = Rect {
        y: inner.y + y_offset,
        height: inner.height - y_offset,
        ..inner
    };
    frame.render_widget(content, message_area);
}

/// Render a centered single-line input popup with a visible cursor
pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    buffer: &str,
    hint: &str,
    theme: &Theme,
    area: Rect,
) {
    let popup_width = 56.min(area.width.saturating_sub(4));
    let popup_height = 5.min(area.height);
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .style(theme.paper())
        .title(Span::styled(
            format!(" {} ", title),
            theme.heading(TextStyleKey::H1),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border_focused());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(vec![
            Span::styled("› ", theme.accent()),
            Span::styled(buffer, theme.text()),
            Span::styled("▏", theme.accent()),
        ]),
        Line::raw(""),
        Line::styled(hint, theme.text_dim()),
    ];
    frame.render_widget(Paragraph::new(lines).style(theme.paper()), inner);
}

/// Render a flash message on the last line of `area`
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .style(theme.block_style());
    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, status_area);
    frame.render_widget(Block::default().style(theme.status_bar()), status_area);

    let left_widget = Paragraph::new(left_content).style(theme.status_bar());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: status_area.height,
    };
    let right_widget = Paragraph::new(right_content).style(theme.status_bar());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
