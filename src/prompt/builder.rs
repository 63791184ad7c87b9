//! Instruction and prompt construction for rewrites and chat turns.

use super::models::ModelTable;
use super::types::{ProcessingMode, ToneStyle};

/// Editor instruction for one-shot rewrites. The target tone line is appended.
const HUMANIZE_INSTRUCTION: &str = r#"You are an expert human writer and editor.
Your task is to rewrite the provided AI-generated text to make it sound natural, human, and engaging.

Guidelines:
- Remove robotic phrasing, repetitive sentence structures, and overly buzzword-heavy language.
- Vary sentence length and rhythm.
- Inject appropriate emotion and nuance based on the requested tone.
- Maintain the original meaning and core facts.
- STRICTLY preserve the original language of the input text. If the input is in German, the output MUST be in German. Do not translate.
- STRICTLY AVOID using em dashes (—) or double hyphens (--) to separate clauses or thoughts. Use commas, periods, or semicolons instead.
- Do not add conversational filler like "Here is the rewritten text:". Just output the text."#;

/// Standing instruction for the chat assistant session.
pub const CHAT_INSTRUCTION: &str = "You are a helpful writing assistant embedded in the HumanizeAI app. Your goal is to help the user refine, edit, or critique text. Be concise, helpful, and friendly. Always respond in the same language as the user's input unless asked otherwise.";

/// Prefix marking a chat prompt that carries working-text context.
pub const CONTEXT_PREFIX: &str = "Context: The user is working on this text:";

/// Number of leading user turns that get working-text context attached.
pub const CONTEXT_TURNS: usize = 3;

/// Maximum characters of working text quoted into a chat prompt.
pub const CONTEXT_CHARS: usize = 500;

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sampling temperature per tone.
const TONE_TEMPERATURES: [(ToneStyle, f32); 5] = [
    (ToneStyle::Conversational, DEFAULT_TEMPERATURE),
    (ToneStyle::Professional, DEFAULT_TEMPERATURE),
    (ToneStyle::Formal, DEFAULT_TEMPERATURE),
    (ToneStyle::Creative, 0.9),
    (ToneStyle::Simple, DEFAULT_TEMPERATURE),
];

/// Everything the generation call needs for one rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanizePrompt {
    pub model: String,
    pub system_instruction: String,
    /// User text, passed through verbatim.
    pub contents: String,
    pub temperature: f32,
}

pub fn chat_system_instruction() -> &'static str {
    CHAT_INSTRUCTION
}

pub fn temperature_for(tone: ToneStyle) -> f32 {
    TONE_TEMPERATURES
        .iter()
        .find(|(t, _)| *t == tone)
        .map(|(_, temp)| *temp)
        .unwrap_or(DEFAULT_TEMPERATURE)
}

pub fn humanize_instruction(tone: ToneStyle) -> String {
    format!("{}\n\nTarget Tone: {}", HUMANIZE_INSTRUCTION, tone.name())
}

pub fn build_humanize_prompt(
    text: &str,
    mode: ProcessingMode,
    tone: ToneStyle,
    models: &ModelTable,
) -> HumanizePrompt {
    HumanizePrompt {
        model: models.for_mode(mode).to_string(),
        system_instruction: humanize_instruction(tone),
        contents: text.to_string(),
        temperature: temperature_for(tone),
    }
}

/// Whether a chat turn carries the working text.
///
/// `prior_user_messages` counts user turns already sent before this one.
/// Only the first [`CONTEXT_TURNS`] turns quote a non-empty context.
pub fn quotes_context(context: &str, prior_user_messages: usize) -> bool {
    prior_user_messages < CONTEXT_TURNS && !context.is_empty()
}

/// Build the outgoing chat prompt.
pub fn build_chat_prompt(message: &str, context: &str, prior_user_messages: usize) -> String {
    if !quotes_context(context, prior_user_messages) {
        return message.to_string();
    }

    let excerpt: String = context.chars().take(CONTEXT_CHARS).collect();
    format!(
        "{} \"{}...\"\n\nUser Request: {}",
        CONTEXT_PREFIX, excerpt, message
    )
}
