//! Wiring & DI. Entry point: load config and content, inject into services, run UI.
//! No business logic here.
//!
//! Usage:
//!   truth-signals                 interactive menu
//!   truth-signals open <link>     show a shared flag card and exit
//!   truth-signals quiz <id>       play one quiz
//!   truth-signals poll <id>       vote through one poll

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use truth_signals::adapters::content::{InMemoryContent, JsonContentRepo};
use truth_signals::adapters::ui::tui::TuiInputPort;
use truth_signals::ports::{ContentPort, InputPort};
use truth_signals::shared::config::AppConfig;
use truth_signals::usecases::{CatalogService, FlagService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // --- Content: data directory if configured, bundled documents otherwise ---
    let content: Arc<dyn ContentPort> = match cfg.data_dir.as_deref() {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            info!(
                path = %dir.display(),
                quizzes = cfg.quizzes_file_or_default(),
                redflags = cfg.redflags_file_or_default(),
                "loading content from data directory"
            );
            Arc::new(JsonContentRepo::with_files(
                dir,
                cfg.quizzes_file_or_default(),
                cfg.redflags_file_or_default(),
            ))
        }
        None => {
            info!("TRUTH_SIGNALS_DATA_DIR not set, using bundled content");
            Arc::new(InMemoryContent::bundled().map_err(|e| anyhow::anyhow!("{}", e))?)
        }
    };

    let catalog = Arc::new(
        CatalogService::load(content)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    // --- Services ---
    let site_url = cfg.site_url_or_default();
    let flag_service = Arc::new(FlagService::new(Arc::clone(&catalog), site_url.clone()));

    let quiz_transition = Duration::from_millis(cfg.quiz_transition_ms_or_default());
    let poll_reveal = Duration::from_millis(cfg.poll_reveal_ms_or_default());
    info!(
        site_url = %site_url,
        quiz_transition_ms = quiz_transition.as_millis() as u64,
        poll_reveal_ms = poll_reveal.as_millis() as u64,
        "ui configured"
    );

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&catalog),
        flag_service,
        site_url,
        quiz_transition,
        poll_reveal,
    ));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [cmd, link] if cmd == "open" => input_port
            .open_shared(link)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        [cmd, id] if cmd == "quiz" => {
            truth_signals::adapters::ui::tui::apply_theme();
            input_port
                .open_quiz(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
        [cmd, id] if cmd == "poll" => {
            truth_signals::adapters::ui::tui::apply_theme();
            input_port
                .open_poll(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
        [] => {
            truth_signals::adapters::ui::init_ui();
            input_port
                .run()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
        _ => anyhow::bail!("usage: truth-signals [open <link-or-code> | quiz <id> | poll <id>]"),
    }

    Ok(())
}
