//! QA Catalogue - Binary Entry Point
//!
//! Loads the configuration, builds the search index and serves it over HTTP.

use std::env;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use qa_catalogue::api::{self, AppState};
use qa_catalogue::{AppResult, Config, SearchIndex};

/// Log to `$LOG_DIR/catalogue.log` when set, stderr otherwise
fn init_logging(default_level: &str) -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match env::var("LOG_DIR") {
        Ok(dir) if !dir.is_empty() => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(Path::new(&dir).join("catalogue.log"))?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::from_env()?;
    init_logging(&config.log_level)?;

    info!(
        environment = %config.environment,
        port = config.port,
        html_dir = %config.html_dir.display(),
        data_dir = %config.data_dir.display(),
        "configuration loaded"
    );

    // Fail fast: a partial index would silently serve wrong answers
    let index = match SearchIndex::load(config.corpus_path(), config.aliases_path()) {
        Ok(index) => index,
        Err(e) => {
            error!(error = %e, "failed to build search index");
            return Err(e.into());
        }
    };

    let state = AppState::new(Arc::new(index)).with_html_dir(&config.html_dir);
    api::serve(Arc::new(state), &config.listen_address()).await?;

    info!("server stopped");
    Ok(())
}
