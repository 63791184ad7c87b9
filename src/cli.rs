use crate::config::Config;
use crate::prompt::{ProcessingMode, ToneStyle};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Rewrite AI-generated text so it reads as if a person wrote it.
#[derive(Parser, Debug)]
#[command(name = "humanize-ai", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/humanize-ai/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Processing mode: fast or quality
    #[arg(long, global = true)]
    pub mode: Option<ProcessingMode>,

    /// Tone: conversational, professional, formal, creative, simple
    #[arg(long, global = true)]
    pub tone: Option<ToneStyle>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite text once without the terminal UI
    Rewrite {
        /// Read text from this file instead of stdin
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Write the result to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl StyleArgs {
    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.defaults.mode = mode;
        }
        if let Some(tone) = self.tone {
            config.defaults.tone = tone;
        }
    }
}
