use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use finder_logging::{finder_info, finder_warn};
use imagefinder_client::{CrawlStatusPoller, ReqwestDispatcher};
use imagefinder_core::CrawlError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use super::binder::{validate_input, TerminalBinder};
use super::config::{load_config, ClientConfig};
use super::logging::{self, LogDestination};
use super::ui::constants::{CANCEL_COMMAND, PROMPT};
use super::ui::render::OutputFormat;

/// Submit pages to an ImageFinder backend and list the images it finds.
///
/// With URLs on the command line each one is crawled in turn. Without any, URLs
/// are read from stdin one per line; a new line replaces the crawl in flight.
#[derive(Parser, Debug)]
#[command(name = "imagefinder", version)]
struct Cli {
    /// Pages to crawl
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Backend root, e.g. http://localhost:8080/
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// RON file with client settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Status polls allowed after the first one
    #[arg(long)]
    max_retries: Option<u32>,

    /// Fixed delay between status polls
    #[arg(long, value_name = "MS")]
    poll_interval_ms: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = match &self.config {
            Some(path) => load_config(path),
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(max_retries) = self.max_retries {
            config.max_retries = max_retries;
        }
        if let Some(poll_interval_ms) = self.poll_interval_ms {
            config.poll_interval_ms = poll_interval_ms;
        }
        config
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, finder_logging::level_for(cli.verbose));

    let config = cli.client_config();
    finder_info!(
        "Backend {} max_retries={} poll_interval_ms={}",
        config.base_url,
        config.max_retries,
        config.poll_interval_ms
    );

    let dispatcher = ReqwestDispatcher::new(config.dispatch_settings())
        .with_context(|| format!("cannot use backend {}", config.base_url))?;
    let binder = Arc::new(TerminalBinder::new(cli.output_format()));
    let poller = Arc::new(CrawlStatusPoller::new(
        Arc::new(dispatcher),
        binder,
        config.poll_config(),
    ));

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(async move {
        if cli.urls.is_empty() {
            eprintln!("{PROMPT}");
            run_interactive(poller, BufReader::new(tokio::io::stdin())).await
        } else {
            run_batch(&poller, &cli.urls).await
        }
    })
}

async fn run_batch(poller: &CrawlStatusPoller, urls: &[String]) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for raw in urls {
        let url = match validate_input(raw) {
            Ok(url) => url,
            Err(err) => {
                eprintln!("{err}");
                failures += 1;
                continue;
            }
        };
        if !matches!(poller.submit(url).await, Some(Ok(_))) {
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} crawls did not complete", urls.len());
    }
    Ok(())
}

/// What one line of interactive input asks for.
#[derive(Debug, PartialEq, Eq)]
enum LineAction {
    Cancel,
    Submit(String),
    Reject(CrawlError),
}

fn parse_line(line: &str) -> LineAction {
    if line.trim() == CANCEL_COMMAND {
        return LineAction::Cancel;
    }
    match validate_input(line) {
        Ok(url) => LineAction::Submit(url),
        Err(err) => LineAction::Reject(err),
    }
}

async fn run_interactive<R>(poller: Arc<CrawlStatusPoller>, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight: Option<JoinHandle<()>> = None;

    while let Some(line) = lines.next_line().await.context("reading input")? {
        match parse_line(&line) {
            LineAction::Cancel => poller.cancel(),
            LineAction::Submit(url) => {
                // The previous submission is superseded by the poller; its task ends on its own.
                let poller = poller.clone();
                in_flight = Some(tokio::spawn(async move {
                    poller.submit(url).await;
                }));
            }
            LineAction::Reject(err) => eprintln!("{err}"),
        }
    }

    if let Some(handle) = in_flight {
        if let Err(err) = handle.await {
            finder_warn!("Crawl task ended abnormally: {}", err);
        }
    }
    Ok(())
}
