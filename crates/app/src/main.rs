use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, JourneyService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Desktop shell around the learning journey map.
#[derive(Debug, Parser)]
#[command(name = "journey", version, about)]
struct Args {
    /// SQLite database holding progress records.
    #[arg(long = "db", env = "JOURNEY_DB_URL", default_value = "sqlite://journey.sqlite3")]
    db_url: String,
}

#[derive(Debug, thiserror::Error)]
enum LaunchError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Services(#[from] services::AppServicesError),
}

struct DesktopApp {
    journey: Arc<JourneyService>,
}

impl UiApp for DesktopApp {
    fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(args: Args) -> Result<(), LaunchError> {
    let db_url = normalize_sqlite_url(&args.db_url)?;
    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url).await?;
    tracing::info!(db = %db_url, "progress store ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        journey: services.journey(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learning Journey")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

/// Rewrite `sqlite://relative/path` against the working directory.
fn normalize_sqlite_url(db_url: &str) -> Result<String, LaunchError> {
    let Some(rest) = db_url.strip_prefix("sqlite://") else {
        return Ok(db_url.to_string());
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    if path.is_empty() || std::path::Path::new(path).is_absolute() {
        return Ok(db_url.to_string());
    }

    let absolute = std::env::current_dir()?.join(path);
    let mut url = format!("sqlite://{}", absolute.display());
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    Ok(url)
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), LaunchError> {
    if db_url == "sqlite::memory:" || db_url.contains("mode=memory") {
        return Ok(());
    }

    let invalid = || LaunchError::InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(args).await {
        tracing::error!(%err, "failed to launch");
        std::process::exit(2);
    }
}
