use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, body and footer rows.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Editor columns and the optional chat column.
pub struct BodyRegions {
    pub input: Rect,
    pub output: Rect,
    pub chat: Option<Rect>,
}

/// Input on the left, output on the right; an open chat panel takes a
/// right-hand column, or a single row when minimized.
pub fn body_regions(body: Rect, chat_open: bool, chat_minimized: bool) -> BodyRegions {
    let (editors, chat) = if !chat_open {
        (body, None)
    } else if chat_minimized {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(body);
        (rows[0], Some(rows[1]))
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(body);
        (cols[0], Some(cols[1]))
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(editors);

    BodyRegions {
        input: halves[0],
        output: halves[1],
        chat,
    }
}

pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
