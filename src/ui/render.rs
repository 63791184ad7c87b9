use crate::chat::ChatRole;
use crate::ui::app::{App, Focus};
use crate::ui::editor::TextBuffer;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT_AMBER, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    STATUS_ERROR, STATUS_OK, USER_BUBBLE,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.mode(), app.tone(), app.is_processing());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let panel = app.chat_panel();
    let regions = body_regions(body, panel.is_open(), !panel.is_expanded());

    let input_title = format!(" Input · {} words ", app.input_word_count());
    draw_editor(
        frame,
        app.input(),
        &input_title,
        None,
        "Paste AI-generated text here...",
        regions.input,
        app.focus() == Focus::Input,
    );

    let output_title = if app.output().is_empty() {
        " Humanized ".to_string()
    } else {
        format!(" Humanized · {} words ", app.output_word_count())
    };
    let badge = if app.is_copied() {
        Some(Span::styled(" Copied! ", Style::default().fg(STATUS_OK)))
    } else if app.is_processing() {
        Some(Span::styled(" Humanizing... ", Style::default().fg(ACCENT_AMBER)))
    } else {
        None
    };
    draw_editor(
        frame,
        app.output(),
        &output_title,
        badge,
        "Humanized text will appear here.",
        regions.output,
        app.focus() == Focus::Output,
    );

    if let Some(chat_area) = regions.chat {
        draw_chat(frame, app, chat_area);
    }

    let footer_widget = Footer::new(app.status());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(path) = app.import_dialog().path() {
        draw_import_dialog(frame, path, area);
    }

    if let Some(message) = app.alert() {
        draw_alert(frame, message, area);
    }
}

fn draw_editor(
    frame: &mut Frame<'_>,
    buffer: &TextBuffer,
    title: &str,
    badge: Option<Span<'static>>,
    placeholder: &str,
    area: Rect,
    focused: bool,
) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let mut title_spans = vec![Span::styled(title.to_string(), Style::default().fg(HEADER_TEXT))];
    if let Some(badge) = badge {
        title_spans.push(badge);
    }
    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    if buffer.is_empty() {
        let hint = Paragraph::new(placeholder.to_string())
            .style(Style::default().fg(MUTED_TEXT))
            .block(block);
        frame.render_widget(hint, area);
        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let (column, line) = buffer.cursor_cell();
    let scroll_y = line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = column.saturating_sub(inner.width.saturating_sub(1) as usize);
    let paragraph = Paragraph::new(buffer.text().to_string())
        .style(Style::default().fg(HEADER_TEXT))
        .scroll((clamp_u16(scroll_y), clamp_u16(scroll_x)))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + clamp_u16(column - scroll_x);
        let y = inner.y + clamp_u16(line - scroll_y);
        frame.set_cursor_position((x, y));
    }
}

fn draw_chat(frame: &mut Frame<'_>, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    let title = if app.chat_ready() {
        " AI Assistant "
    } else {
        " AI Assistant (offline) "
    };
    let focused = app.focus() == Focus::Chat;
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { FOCUS_BORDER } else { GLOBAL_BORDER }));

    if !app.chat_panel().is_expanded() {
        let hint = Paragraph::new(" Ctrl+N: expand │ Ctrl+G: close")
            .style(Style::default().fg(MUTED_TEXT))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(inner);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in app.chat_log().messages() {
        let (label, label_style, body_style) = match message.role {
            ChatRole::User => (
                "You",
                Style::default().fg(ACCENT_AMBER).add_modifier(Modifier::BOLD),
                Style::default().fg(HEADER_TEXT).bg(USER_BUBBLE),
            ),
            ChatRole::Model => (
                "AI",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
                Style::default().fg(HEADER_TEXT),
            ),
        };
        lines.push(Line::from(Span::styled(label, label_style)));
        for text_line in message.text.lines() {
            lines.push(Line::from(Span::styled(text_line.to_string(), body_style)));
        }
        lines.push(Line::from(""));
    }
    if app.is_chat_typing() {
        lines.push(Line::from(Span::styled(
            "AI is typing...",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )));
    }

    let history = rows[0];
    let height = wrapped_height(&lines, history.width);
    let scroll = height.saturating_sub(history.height as usize);
    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((clamp_u16(scroll), 0));
    frame.render_widget(messages, history);

    draw_editor(
        frame,
        app.chat_draft(),
        " Message ",
        None,
        "Ask for changes... (Enter to send)",
        rows[1],
        focused,
    );
}

fn draw_import_dialog(frame: &mut Frame<'_>, path: &str, area: Rect) {
    let popup = centered_rect_by_size(60, 5, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Import .txt file ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(popup);
    let lines = vec![
        Line::from(Span::styled(path.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(Span::styled(
            "Enter: import │ Esc: cancel",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
    if inner.width > 0 && inner.height > 0 {
        let column = clamp_u16(path.width()).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

fn draw_alert(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let popup = centered_rect_by_size(56, 7, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled("Press Enter to dismiss", Style::default().fg(MUTED_TEXT))),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, popup);
}

/// Rows `lines` occupy when wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
