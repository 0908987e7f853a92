use anyhow::{anyhow, bail};
use apertium_translator::config::config_search_paths;
use apertium_translator::{Language, SharedLogger, Translator, TranslatorConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "apertium-translate",
    about = "Translate text with the Apertium machine translation API",
    version
)]
struct Cli {
    /// Text to translate. Several texts are sent as one batch request.
    texts: Vec<String>,

    /// Source language code or name (overrides config)
    #[arg(short, long)]
    from: Option<Language>,

    /// Target language code or name (overrides config)
    #[arg(short, long)]
    to: Option<Language>,

    /// Path to config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key (overrides config and environment)
    #[arg(long)]
    key: Option<String>,

    /// HTTP referrer sent with each request
    #[arg(long)]
    referrer: Option<String>,

    /// Append a JSONL record of each call to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Print config search paths and exit
    #[arg(long)]
    show_config_paths: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apertium_translator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.show_config_paths {
        println!("Config search paths:");
        for (i, path) in config_search_paths().iter().enumerate() {
            println!("  {}. {}", i + 1, path.display());
        }
        return Ok(());
    }

    if cli.list_languages {
        for lang in Language::all() {
            println!("{:<4} {}", lang.code(), lang.name());
        }
        return Ok(());
    }

    if cli.texts.is_empty() {
        bail!("Nothing to translate. Pass one or more texts as arguments");
    }

    let mut config = TranslatorConfig::find_and_load(cli.config.as_deref())?;
    config.api_key = cli.key.or_else(|| config.resolve_api_key());
    if let Some(referrer) = cli.referrer {
        config.referrer = Some(referrer);
    }

    let from = cli
        .from
        .or(config.default_from)
        .ok_or_else(|| anyhow!("No source language. Pass --from or set default_from in config"))?;
    let to = cli
        .to
        .or(config.default_to)
        .ok_or_else(|| anyhow!("No target language. Pass --to or set default_to in config"))?;

    info!(service = %config.service_url, langpair = %format!("{from}|{to}"), texts = cli.texts.len(), "Translating");

    let mut translator = Translator::new(config)?;
    if let Some(ref path) = cli.log_file {
        translator = translator.with_logger(SharedLogger::new(path)?);
    }

    if let [text] = cli.texts.as_slice() {
        println!("{}", translator.translate_one(text, from, to).await?);
    } else {
        let froms = vec![from; cli.texts.len()];
        let tos = vec![to; cli.texts.len()];
        for translation in translator.translate_many(&cli.texts, &froms, &tos).await? {
            println!("{translation}");
        }
    }

    Ok(())
}
