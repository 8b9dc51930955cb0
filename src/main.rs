mod feed;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use feed::JsonLinesFeed;
use scoreline_core::{
    config::{self, GeneralConfig},
    fixture::EncounterContext,
    shellexpand,
    traits::FixtureFeed,
    EntityType, LanguageCode,
};
use scoreline_translate::TranslationService;
use std::sync::OnceLock;
use tracing::{info, warn};

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser)]
#[command(
    name = "scoreline",
    version,
    about = "Self-learning multilingual name-translation cache for sports fixtures"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one name.
    Translate {
        /// Raw name as it appears in the feed.
        name: String,
        /// Target language (en, es, pt, de, fr, it, zh-hk, zh-tw, zh-cn, ja, ko).
        #[arg(short, long, default_value = "zh-hk")]
        lang: String,
        /// Entity type: country, league or team.
        #[arg(short = 't', long = "type", default_value = "team")]
        entity_type: String,
        /// Country the entity was seen in (leagues).
        #[arg(long)]
        country: Option<String>,
    },
    /// Learn from a JSON-lines fixture file, then exit.
    Learn {
        /// Fixture file, one JSON object per line. `-` reads stdin.
        file: String,
    },
    /// Learn continuously from a JSON-lines feed until interrupted.
    Run {
        /// Fixture file; stdin when omitted.
        #[arg(long)]
        feed: Option<String>,
    },
    /// Print every learned mapping as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Merge mappings from an export file (or a bare JSON array).
    Import {
        file: String,
    },
    /// Show cache and learner counters.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    init_logging(&cfg.scoreline);

    let service = TranslationService::from_config(&cfg).await;

    match cli.command {
        Commands::Translate {
            name,
            lang,
            entity_type,
            country,
        } => {
            let lang: LanguageCode = lang.parse()?;
            let entity_type: EntityType = entity_type.parse()?;
            let context = country.map(EncounterContext::country).unwrap_or_default();
            println!(
                "{}",
                service.translate_in(&name, lang, entity_type, &context)
            );
            // Misses queue the name; learn it now so the next run can serve it.
            if service.queue_len() > 0 {
                service.drain_until_empty().await;
            }
        }
        Commands::Learn { file } => {
            let feed = JsonLinesFeed::from_arg(Some(&file));
            let mut rx = feed
                .start()
                .await
                .with_context(|| format!("failed to open fixture feed {file}"))?;
            let mut fixtures = 0usize;
            while let Some(fixture) = rx.recv().await {
                fixtures += 1;
                service.observe_fixture(&fixture);
                if service.queue_len() >= cfg.learning.batch_size {
                    service.drain_once().await;
                }
            }
            let reports = service.drain_until_empty().await;
            info!(fixtures, drains = reports.len(), "learning run finished");
            println!(
                "Processed {fixtures} fixtures; {} mappings stored.",
                service.size()
            );
        }
        Commands::Run { feed } => {
            let feed = JsonLinesFeed::from_arg(feed.as_deref());
            let mut rx = feed.start().await.context("failed to start fixture feed")?;
            service.spawn_learner();
            info!(feed = feed.name(), "scoreline running");

            loop {
                tokio::select! {
                    next = rx.recv() => match next {
                        Some(fixture) => {
                            service.observe_fixture(&fixture);
                        }
                        None => {
                            info!("fixture feed closed");
                            break;
                        }
                    },
                    _ = tokio::signal::ctrl_c() => {
                        info!("Received shutdown signal");
                        break;
                    }
                }
            }
        }
        Commands::Export { output } => {
            let body = serde_json::to_string_pretty(&service.export_all_mappings())?;
            match output {
                Some(path) => {
                    let path = shellexpand(&path);
                    std::fs::write(&path, body)
                        .with_context(|| format!("failed to write {path}"))?;
                    println!("Exported {} mappings to {path}", service.size());
                }
                None => println!("{body}"),
            }
        }
        Commands::Import { file } => {
            let path = shellexpand(&file);
            let blob = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {path}"))?;
            let report = service.import_mappings(&blob).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&service.stats())?);
        }
    }

    service.shutdown().await;
    Ok(())
}

/// Stderr logging, or a non-blocking file writer when `log_file` is set.
fn init_logging(general: &GeneralConfig) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&general.log_level))
    };

    if !general.log_file.is_empty() {
        let path = std::path::PathBuf::from(general.resolve(&general.log_file));
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .init();
                let _ = LOG_GUARD.set(guard);
                info!(path = %path.display(), "logging initialized");
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(std::io::stderr)
                    .init();
                warn!(error = %e, "failed to open log file; using stderr");
            }
        }
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
