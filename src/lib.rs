pub mod chat;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod logging;
pub mod prompt;
pub mod text;
pub mod ui;
