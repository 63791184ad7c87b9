/// Marker trait for intents: key presses routed to a panel or dialog.
pub trait Intent: Send + 'static {}
