use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPanelIntent {
    /// Open the panel, or close it if already open.
    Toggle,
    Close,
    /// Collapse to the title bar or expand again. Ignored while closed.
    ToggleMinimized,
}

impl Intent for ChatPanelIntent {}
