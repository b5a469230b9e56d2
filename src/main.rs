use clap::Parser;
use geofeed::{config::Config, geojson, IngestPolicy, JsonFileSource, Session, ViewEvent};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geofeed", about = "Inspect a geotagged event feed headlessly")]
struct Cli {
    /// Snapshot to load (JSON array of raw records).
    #[arg(long)]
    feed: PathBuf,

    /// Config file; defaults to ~/.config/geofeed/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time window in hours.
    #[arg(long)]
    hours: Option<u32>,

    /// Keep only posts containing this text.
    #[arg(long)]
    keyword: Option<String>,

    /// Keep only categories containing this text.
    #[arg(long)]
    category: Option<String>,

    /// Keep only items with one of these types. Repeatable.
    #[arg(long = "type")]
    types: Vec<String>,

    /// Highlight this item id.
    #[arg(long)]
    select: Option<String>,

    /// Stop at the first malformed record instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Print every item as a GeoJSON feature collection instead of the list view.
    #[arg(long)]
    geojson: bool,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unavailable, using defaults");
            Config::defaults()
        }),
    };

    let policy = if cli.strict { IngestPolicy::Abort } else { IngestPolicy::Skip };
    let mut session = Session::new(&config).with_policy(policy);
    session.ingest(&JsonFileSource::new(&cli.feed)).await?;

    if let Some(hours) = cli.hours {
        session.handle(ViewEvent::TimeRangeChanged(hours));
    }
    if let Some(keyword) = cli.keyword {
        session.handle(ViewEvent::KeywordChanged(keyword));
    }
    if let Some(category) = cli.category {
        session.handle(ViewEvent::CategoryChanged(category));
    }
    if !cli.types.is_empty() {
        session.handle(ViewEvent::TypesChanged(cli.types.into_iter().collect()));
    }
    if let Some(id) = cli.select {
        session.handle(ViewEvent::ItemClicked(id));
    }

    let output = if cli.geojson {
        geojson::feature_collection(session.map_props().items)
    } else {
        let center = session.center();
        let overrides = serde_json::to_value(session.highlight().overrides())?;
        let now = chrono::Utc::now().timestamp_millis();
        let list = session.list_props(now);
        serde_json::json!({
            "center": center,
            "overrides": overrides,
            "visibleItems": list.visible_items,
        })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

