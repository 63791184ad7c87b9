use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which model tier serves a one-shot rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// Low-latency model.
    #[default]
    Fast,
    /// Higher-capability model.
    Quality,
}

impl ProcessingMode {
    /// Short label shown on the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            ProcessingMode::Fast => "Speed",
            ProcessingMode::Quality => "Pro Mode",
        }
    }

    /// Human-readable engine name shown while a rewrite is running.
    pub fn engine_name(self) -> &'static str {
        match self {
            ProcessingMode::Fast => "Gemini Flash 2.5",
            ProcessingMode::Quality => "Gemini Pro 3",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ProcessingMode::Fast => ProcessingMode::Quality,
            ProcessingMode::Quality => ProcessingMode::Fast,
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingMode::Fast => write!(f, "fast"),
            ProcessingMode::Quality => write!(f, "quality"),
        }
    }
}

impl FromStr for ProcessingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" | "speed" => Ok(ProcessingMode::Fast),
            "quality" | "pro" => Ok(ProcessingMode::Quality),
            other => Err(format!(
                "unknown mode '{}' (expected 'fast' or 'quality')",
                other
            )),
        }
    }
}

/// Stylistic directive passed into the rewrite instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    #[default]
    Conversational,
    Professional,
    Formal,
    Creative,
    Simple,
}

impl ToneStyle {
    /// Declaration order; the UI cycles through tones in this order.
    pub const ALL: [ToneStyle; 5] = [
        ToneStyle::Conversational,
        ToneStyle::Professional,
        ToneStyle::Formal,
        ToneStyle::Creative,
        ToneStyle::Simple,
    ];

    /// Name as it appears in the instruction text and the UI.
    pub fn name(self) -> &'static str {
        match self {
            ToneStyle::Conversational => "Conversational",
            ToneStyle::Professional => "Professional",
            ToneStyle::Formal => "Formal",
            ToneStyle::Creative => "Creative",
            ToneStyle::Simple => "Simple",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToneStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tone| tone.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.name()).collect();
                format!("unknown tone '{}' (expected one of: {})", wanted, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("FAST".parse::<ProcessingMode>(), Ok(ProcessingMode::Fast));
        assert_eq!("Quality".parse::<ProcessingMode>(), Ok(ProcessingMode::Quality));
        assert!("turbo".parse::<ProcessingMode>().is_err());
    }

    #[test]
    fn tone_cycles_in_declaration_order() {
        assert_eq!(ToneStyle::Conversational.next(), ToneStyle::Professional);
        assert_eq!(ToneStyle::Simple.next(), ToneStyle::Conversational);
        assert_eq!(ToneStyle::Conversational.previous(), ToneStyle::Simple);
    }

    #[test]
    fn tone_parses_display_name() {
        assert_eq!("creative".parse::<ToneStyle>(), Ok(ToneStyle::Creative));
        let err = "sarcastic".parse::<ToneStyle>().unwrap_err();
        assert!(err.contains("Conversational"));
    }

    #[test]
    fn tone_serializes_lowercase() {
        let json = serde_json::to_string(&ToneStyle::Formal).unwrap();
        assert_eq!(json, "\"formal\"");
        let parsed: ToneStyle = serde_json::from_str("\"creative\"").unwrap();
        assert_eq!(parsed, ToneStyle::Creative);
    }
}
