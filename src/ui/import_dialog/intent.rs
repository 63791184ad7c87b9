use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportIntent {
    Open,
    Close,
    /// Append typed or pasted text to the path.
    Input(String),
    Backspace,
}

impl Intent for ImportIntent {}
