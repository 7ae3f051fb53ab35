use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use url::Url;

use fullsize_grabber::config::{
    DEFAULT_DOMAIN_SUFFIX, DEFAULT_MIN_WIDTH, DEFAULT_OUTPUT_DIR, DEFAULT_PATH_SEGMENT,
    DEFAULT_SMALL_PREFIX, DEFAULT_START_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
use fullsize_grabber::{GrabberBuilder, LinkScope, logging};

/// Download the full-size photos of one celebrity gallery.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Gallery page to start from.
    #[arg(long, default_value = DEFAULT_START_URL)]
    start_url: Url,

    /// Directory to save images into (created if missing).
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Minimum width in pixels for a full-size save.
    #[arg(long, default_value_t = DEFAULT_MIN_WIDTH)]
    min_width: u32,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Only follow links whose host ends with this.
    #[arg(long, default_value = DEFAULT_DOMAIN_SUFFIX)]
    domain: String,

    /// Only follow links whose path contains this.
    #[arg(long, default_value = DEFAULT_PATH_SEGMENT)]
    path_segment: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Referer header; defaults to the start URL.
    #[arg(long)]
    referer: Option<String>,

    /// File name prefix for fallback copies that are below the minimum width.
    #[arg(long, default_value = DEFAULT_SMALL_PREFIX)]
    small_prefix: String,

    /// Debug-level logging for this crate.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut builder = GrabberBuilder::new(cli.start_url)
        .output_dir(cli.out_dir)
        .min_width(cli.min_width)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .scope(LinkScope::new(cli.domain, cli.path_segment))
        .user_agent(cli.user_agent)
        .small_prefix(cli.small_prefix);
    if let Some(referer) = cli.referer {
        builder = builder.referer(referer);
    }

    let grabber = builder.build().context("invalid configuration")?;
    let summary = grabber.run().await.context("grab failed")?;
    println!("{summary}");
    Ok(())
}
