//! pydocs-scraper CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use pydocs_scraper::{
    error::{self, AppError, Result},
    logging,
    models::{Config, ErrorPolicy, Mode, OutputMode},
    pipeline,
    services::ScrapeContext,
    utils::{
        cache::ResponseCache,
        http::{self, HttpFetcher},
    },
};

/// pydocs-scraper - Python documentation and PEP scraper
#[derive(Parser, Debug)]
#[command(
    name = "pydocs-scraper",
    version,
    about = "Scrapes docs.python.org and peps.python.org into tabular reports"
)]
struct Cli {
    /// Report to build
    #[arg(value_enum)]
    mode: Mode,

    /// Where to send the report
    #[arg(short, long, value_enum, default_value = "plain")]
    output: OutputMode,

    /// Remove cached responses before running
    #[arg(short, long)]
    clear_cache: bool,

    /// Bypass the response cache for this run
    #[arg(long)]
    no_cache: bool,

    /// Path to the TOML configuration file
    #[arg(long, default_value = "pydocs-scraper.toml")]
    config: PathBuf,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    config.validate()?;

    let cache = ResponseCache::new(&config.paths.cache_dir);
    if cli.clear_cache {
        cache.clear().await?;
        log::info!("Cache cleared: {}", cache.dir().display());
    }

    let use_cache = config.cache.enabled && !cli.no_cache;
    let client = http::create_async_client(&config.http)?;
    let fetcher = HttpFetcher::new(client, use_cache.then_some(cache))
        .with_bytes_timeout(Duration::from_secs(config.http.download_timeout_secs));

    let mut ctx = ScrapeContext::new(&fetcher, config);
    ctx.show_progress = ctx.show_progress && !cli.quiet;

    pipeline::run_report(cli.mode, &ctx, cli.output).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    logging::init(cli.verbose, &config.paths.log_file);

    log::info!("Parser started");
    log::info!("Command line arguments: {:?}", cli);
    match loaded {
        Ok(_) => log::debug!("Loaded configuration from {}", cli.config.display()),
        Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", cli.config.display())
        }
        Err(e) => log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        ),
    }

    let code = match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            log::debug!("{e:?}");
            for cause in error::causes(&e).skip(1) {
                log::debug!("caused by: {cause}");
            }
            match config.run.on_error {
                ErrorPolicy::Strict => ExitCode::FAILURE,
                ErrorPolicy::Tolerant => ExitCode::SUCCESS,
            }
        }
    };

    log::info!("Parser finished");
    code
}
