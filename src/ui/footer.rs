use crate::ui::theme::{ACCENT_AMBER, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Ctrl+R: Humanize │ Ctrl+E: Mode │ Ctrl+T: Tone │ Ctrl+Y: Copy │ Ctrl+S: Export │ Ctrl+O: Import │ Ctrl+L: Clear │ Ctrl+G: Chat │ Ctrl+Q: Quit";

pub struct Footer<'a> {
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a str>) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (left, left_style) = match self.status {
            Some(status) => (format!(" {}", status), Style::default().fg(ACCENT_AMBER)),
            None => (HINTS.to_string(), text_style),
        };

        // Char count, not byte count
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
