mod intent;
mod reducer;
mod state;

pub use intent::ChatPanelIntent;
pub use reducer::ChatPanelReducer;
pub use state::ChatPanelState;
