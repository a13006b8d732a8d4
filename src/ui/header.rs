use crate::selection::SessionState;
use crate::ui::theme::{ACCENT, PANEL_BORDER, SEPARATOR, BODY_TEXT, STATUS_ERROR, STATUS_LOADING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(session: &SessionState) -> Paragraph<'static> {
        let text_style = Style::default().fg(BODY_TEXT);
        let separator_style = Style::default().fg(SEPARATOR);

        let breadcrumb = session.selection.breadcrumb();
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Scripture Reader",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];
        if !breadcrumb.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(breadcrumb, text_style));
        }
        if session.loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Loading…", Style::default().fg(STATUS_LOADING)));
        } else if session.error.is_some() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Offline", Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(PANEL_BORDER)),
        )
    }
}
