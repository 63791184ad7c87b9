use crate::ui::import_dialog::intent::ImportIntent;
use crate::ui::import_dialog::state::ImportDialogState;
use crate::ui::mvi::Reducer;

pub struct ImportReducer;

impl Reducer for ImportReducer {
    type State = ImportDialogState;
    type Intent = ImportIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ImportIntent::Open => ImportDialogState::Visible {
                path: String::new(),
            },
            ImportIntent::Close => ImportDialogState::Hidden,
            ImportIntent::Input(text) => match state {
                ImportDialogState::Visible { mut path } => {
                    // Paths are single-line.
                    path.extend(text.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
                    ImportDialogState::Visible { path }
                }
                hidden => hidden,
            },
            ImportIntent::Backspace => match state {
                ImportDialogState::Visible { mut path } => {
                    path.pop();
                    ImportDialogState::Visible { path }
                }
                hidden => hidden,
            },
        }
    }
}
