use crate::ui::chat_panel::intent::ChatPanelIntent;
use crate::ui::chat_panel::state::ChatPanelState;
use crate::ui::mvi::Reducer;

pub struct ChatPanelReducer;

impl Reducer for ChatPanelReducer {
    type State = ChatPanelState;
    type Intent = ChatPanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatPanelIntent::Toggle => match state {
                ChatPanelState::Closed => ChatPanelState::Open { minimized: false },
                ChatPanelState::Open { .. } => ChatPanelState::Closed,
            },
            ChatPanelIntent::Close => ChatPanelState::Closed,
            ChatPanelIntent::ToggleMinimized => match state {
                ChatPanelState::Open { minimized } => ChatPanelState::Open {
                    minimized: !minimized,
                },
                closed => closed,
            },
        }
    }
}
