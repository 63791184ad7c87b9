use crate::ui::mvi::UiState;

/// Prompt asking for the path of a `.txt` file to import.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportDialogState {
    #[default]
    Hidden,
    Visible {
        path: String,
    },
}

impl UiState for ImportDialogState {}

impl ImportDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Visible { path } => Some(path),
            Self::Hidden => None,
        }
    }
}
