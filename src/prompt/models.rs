use serde::{Deserialize, Serialize};

use super::types::ProcessingMode;

/// Static model lookup table.
///
/// Mode-to-model selection goes through this table instead of branching at
/// call sites, so adding a tier means adding a row here and in the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTable {
    /// Model serving `ProcessingMode::Fast` rewrites.
    #[serde(default = "default_fast_model")]
    pub fast: String,
    /// Model serving `ProcessingMode::Quality` rewrites.
    #[serde(default = "default_quality_model")]
    pub quality: String,
    /// Model backing the chat assistant.
    #[serde(default = "default_chat_model")]
    pub chat: String,
}

fn default_fast_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_quality_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_chat_model() -> String {
    "gemini-3-pro-preview".to_string()
}

impl Default for ModelTable {
    fn default() -> Self {
        Self {
            fast: default_fast_model(),
            quality: default_quality_model(),
            chat: default_chat_model(),
        }
    }
}

impl ModelTable {
    pub fn for_mode(&self, mode: ProcessingMode) -> &str {
        match mode {
            ProcessingMode::Fast => &self.fast,
            ProcessingMode::Quality => &self.quality,
        }
    }

    pub fn chat(&self) -> &str {
        &self.chat
    }

    /// Returns the name of the first empty entry, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("fast", &self.fast),
            ("quality", &self.quality),
            ("chat", &self.chat),
        ]
        .into_iter()
        .find(|(_, model)| model.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_maps_tiers() {
        let table = ModelTable::default();
        assert_eq!(table.for_mode(ProcessingMode::Fast), "gemini-2.5-flash");
        assert_eq!(table.for_mode(ProcessingMode::Quality), "gemini-3-pro-preview");
        assert_eq!(table.chat(), "gemini-3-pro-preview");
        assert_eq!(table.first_missing(), None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let table: ModelTable = toml::from_str(r#"fast = "gemini-2.0-flash-lite""#).unwrap();
        assert_eq!(table.fast, "gemini-2.0-flash-lite");
        assert_eq!(table.quality, "gemini-3-pro-preview");
    }

    #[test]
    fn first_missing_reports_empty_entry() {
        let table = ModelTable {
            chat: "  ".to_string(),
            ..ModelTable::default()
        };
        assert_eq!(table.first_missing(), Some("chat"));
    }
}
