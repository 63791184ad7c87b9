/// Marker trait for panel/dialog state.
///
/// `Default` is the state a component starts in and the placeholder used
/// while a reducer owns the previous value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
