mod intent;
mod reducer;
mod state;

pub use intent::ImportIntent;
pub use reducer::ImportReducer;
pub use state::ImportDialogState;
