use crate::prompt::{ProcessingMode, ToneStyle};
use crate::ui::theme::{ACCENT_AMBER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    mode: ProcessingMode,
    tone: ToneStyle,
    processing: bool,
}

impl Header {
    pub fn new(mode: ProcessingMode, tone: ToneStyle, processing: bool) -> Self {
        Self {
            mode,
            tone,
            processing,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let brand_style = Style::default()
            .fg(ACCENT_AMBER)
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let muted_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![
            Span::styled("  HumanizeAI", brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.mode.label(), text_style),
            Span::styled(format!(" ({})", self.mode.engine_name()), muted_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Tone: ", muted_style),
            Span::styled(self.tone.name(), text_style),
        ];
        if self.processing {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Humanizing...", brand_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
