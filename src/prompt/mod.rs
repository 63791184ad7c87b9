//! Prompt construction: mode/tone tables, instructions, chat context.

mod builder;
mod models;
mod types;

pub use builder::{
    build_chat_prompt, build_humanize_prompt, chat_system_instruction, humanize_instruction,
    quotes_context, temperature_for, HumanizePrompt, CHAT_INSTRUCTION, CONTEXT_CHARS, CONTEXT_PREFIX,
    CONTEXT_TURNS,
};
pub use models::ModelTable;
pub use types::{ProcessingMode, ToneStyle};
