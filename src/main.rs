mod api_types;
mod error;
mod models;
mod normalize;
mod orchestrator;
mod render;
mod request;
mod validate;
mod view;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::time::Duration;
use tracing::{debug, info};

use models::{CommentFilter, Mode, Platform, RequestInput};
use orchestrator::{Notice, Session, SubmitOutcome};

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Socialscope - social media comment sentiment dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Post URL (single mode) or profile/group URL (bulk mode)
    url: String,

    /// Platform the URL belongs to
    #[arg(short, long, value_enum, default_value_t = Platform::Instagram)]
    platform: Platform,

    /// Analysis mode
    #[arg(short, long, value_enum, default_value_t = Mode::Single)]
    mode: Mode,

    /// Start date for bulk analysis (YYYY-MM-DD)
    #[arg(long)]
    from_date: Option<NaiveDate>,

    /// Maximum number of posts to analyze in bulk mode (1-50)
    #[arg(long, default_value_t = request::MAX_POSTS_DEFAULT)]
    max_posts: u32,

    /// Analysis API base URL (overrides SOCIALSCOPE_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Comment list filter for the rendered dashboard
    #[arg(long, value_enum, default_value_t = CommentFilter::All)]
    filter: CommentFilter,
}

fn resolve_api_base(cli: Option<String>) -> String {
    if let Some(base) = cli {
        debug!("Using API base from --api-base argument: {}", base);
        return base;
    }
    if let Ok(base) = std::env::var("SOCIALSCOPE_API_BASE") {
        debug!("Using API base from SOCIALSCOPE_API_BASE: {}", base);
        return base;
    }
    DEFAULT_API_BASE.to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    let args = Args::parse();
    info!(
        "Starting socialscope - platform={}, mode={:?}",
        args.platform.label(),
        args.mode
    );

    let api_base = resolve_api_base(args.api_base);
    let input = match args.mode {
        Mode::Single => RequestInput::Single { url: args.url },
        Mode::Bulk => RequestInput::Bulk {
            source_url: args.url,
            from_date: args.from_date,
            max_posts: args.max_posts,
        },
    };

    let mut session = Session::new(
        args.platform,
        args.mode,
        api_base,
        Duration::from_secs(args.timeout),
    )?;

    match session.submit(input).await {
        SubmitOutcome::Rejected(err) => bail!("{}", err),
        SubmitOutcome::InFlight => bail!("a request is already in flight"),
        SubmitOutcome::Completed(Notice::Error(message)) => bail!("{}", message),
        SubmitOutcome::Completed(Notice::Success(message)) => {
            info!("{}", message);
            session.set_filter(args.filter);
            if let Some(result) = session.result() {
                println!("{}", render::render_dashboard(result, session.filter()));
            }
            Ok(())
        }
    }
}
