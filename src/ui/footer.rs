use crate::ui::app::Screen;
use crate::ui::theme::{PANEL_BORDER, BODY_TEXT, STATUS_LOADING};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    fn hints(screen: Screen) -> &'static str {
        match screen {
            Screen::Home => " ↑↓: Move │ ←→: Page │ Enter: Open │ /: Search │ r: Refresh │ q: Quit",
            Screen::Reader => {
                " Tab: Focus │ Enter: Open │ t: Testament │ n/p: Chapter │ /: Search │ Esc: Back │ q: Quit"
            }
            Screen::Search => " Enter: Search │ PgUp/PgDn: Page │ Ctrl+U: Clear │ Esc: Back │ Ctrl+C: Quit",
        }
    }

    pub fn widget(screen: Screen, notice: Option<&str>, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);
        let hints = Self::hints(screen);
        let right = match notice {
            Some(notice) => format!("{} ", notice),
            None => format!("v{} ", VERSION),
        };
        let right_style = if notice.is_some() {
            Style::default().fg(STATUS_LOADING)
        } else {
            text_style
        };

        // Char count, not byte count: the hints contain box-drawing characters.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(right.chars().count());

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        )
    }
}
