//! View for paths that match no route

use crate::router::{Route, RouteTarget};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const TITLE: &str = "Not Found";

pub fn render(frame: &mut Frame, path: &str, routes: &[Route], theme: &Theme, area: Rect) {
    let inner = widgets::render_page_panel(frame, TITLE, theme, area);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("  No page at ", theme.text()),
            Span::styled(path.to_string(), theme.error()),
        ]),
        Line::raw(""),
        Line::styled("  Available paths:", theme.text_dim()),
    ];

    for route in routes {
        let target = match route.target {
            RouteTarget::Page(page) => page.label().to_string(),
            RouteTarget::Redirect(to) => format!("→ {}", to),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("    {:<20}", route.pattern), theme.accent()),
            Span::styled(target, theme.text_dim()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter] ", theme.accent()),
        Span::styled("go to start page   ", theme.text()),
        Span::styled("[Backspace] ", theme.accent()),
        Span::styled("go back", theme.text()),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .style(theme.paper())
            .wrap(Wrap { trim: false }),
        inner,
    );
}
