use anyhow::{Context, Result};
use clap::Parser;
use humanize_ai::cli::{Cli, Commands};
use humanize_ai::config::Config;
use humanize_ai::gemini::GeminiClient;
use humanize_ai::generation::Humanizer;
use humanize_ai::logging::{init_file_tracing, init_stderr_tracing};
use humanize_ai::ui::runtime::{self, Services};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Rewrite { .. }) => init_stderr_tracing(),
        None => init_file_tracing(),
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.style.apply(&mut config);

    let api_key = config.api.resolve_credential().into_key();
    let client = GeminiClient::from_config(&config, api_key)
        .context("Failed to build HTTP client")?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Some(Commands::Rewrite { input, output }) => {
            let humanizer = Humanizer::new(Arc::new(client), config.models.clone());
            rt.block_on(rewrite(&humanizer, &config, input, output))
        }
        None => {
            let services = Services::new(Arc::new(client), config.models.clone());
            runtime::run(&config, services, rt.handle())?;
            Ok(())
        }
    }
}

async fn rewrite(
    humanizer: &Humanizer,
    config: &Config,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let text = match input {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    if text.trim().is_empty() {
        anyhow::bail!("No input text");
    }

    let rewritten = humanizer
        .humanize_strict(&text, config.defaults.mode, config.defaults.tone)
        .await?;

    match output {
        Some(path) => tokio::fs::write(&path, &rewritten)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(rewritten.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
