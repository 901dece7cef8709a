use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use property_notifier::config::Settings;
use property_notifier::fetch::HttpFetcher;
use property_notifier::notify::{ConsoleNotifier, Notifier, SeenFilter};
use property_notifier::poll::Schedule;
use property_notifier::scrapers::{Dispatcher, SiteRules};
use property_notifier::Assembler;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Property Notifier - rental listing watcher")]
struct Args {
    /// Search result URLs to poll, in addition to those in the config file
    urls: Vec<String>,

    /// Path to TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Seconds between polling cycles
    #[clap(short, long)]
    interval: Option<u64>,

    /// Number of URLs fetched at once
    #[clap(long)]
    concurrency: Option<usize>,

    /// Run a single cycle and exit
    #[clap(long)]
    once: bool,

    /// Print listings as JSON
    #[clap(long)]
    json: bool,

    /// Print the active site rules as TOML and exit
    #[clap(long)]
    print_rules: bool,
}

#[derive(Serialize)]
struct RulesFile<'a> {
    sites: &'a [SiteRules],
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.urls.extend(args.urls.iter().cloned());
    if let Some(interval) = args.interval {
        settings.poll_interval_secs = interval;
    }
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
    }

    let rules = settings.site_rules();
    if args.print_rules {
        print!("{}", toml::to_string(&RulesFile { sites: &rules })?);
        return Ok(());
    }

    if settings.urls.is_empty() {
        anyhow::bail!("No URLs to poll; pass them as arguments or list them in the config file");
    }

    let dispatcher = Dispatcher::from_rules(&rules).context("Invalid site rules")?;
    info!(
        "Watching {} URLs on {}",
        settings.urls.len(),
        dispatcher.list_sources().join(", ")
    );

    let fetcher = HttpFetcher::new(settings.timeout(), &settings.user_agent)?;
    let assembler = Assembler::new(dispatcher, fetcher).with_concurrency(settings.concurrency);
    let notifier = ConsoleNotifier::new(args.json);
    let mut seen = SeenFilter::new();

    let mut schedule = Schedule::new(settings.poll_interval());
    if args.once {
        schedule = schedule.with_max_cycles(1);
    }
    while schedule.next_cycle().await {
        info!("Polling cycle started at {}", Utc::now().to_rfc3339());

        let assembly = assembler.assemble(&settings.urls).await;
        for failure in &assembly.failures {
            warn!("Skipped {} this cycle: {:#}", failure.url, failure.error);
        }

        let fresh = seen.retain_new(assembly.properties);
        info!("{} new properties ({} known)", fresh.len(), seen.len());
        if !fresh.is_empty() {
            notifier.notify(&fresh).await?;
        }
    }

    Ok(())
}
