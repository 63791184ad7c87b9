use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPanelState {
    #[default]
    Closed,
    Open {
        minimized: bool,
    },
}

impl UiState for ChatPanelState {}

impl ChatPanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Open with the message area showing.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Open { minimized: false })
    }
}
