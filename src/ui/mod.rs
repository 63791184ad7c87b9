pub mod app;
pub mod chat_panel;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod import_dialog;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
