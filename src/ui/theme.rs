use ratatui::style::Color;

pub const ACCENT_AMBER: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const FOCUS_BORDER: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const HEADER_TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const MUTED_TEXT: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const POPUP_BORDER: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const USER_BUBBLE: Color = Color::Rgb(0x27, 0x27, 0x2a);
