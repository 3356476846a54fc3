mod app;
mod config;
mod data;
mod error;
mod processing;
mod state;
mod ui;

use std::path::Path;

use config::{TraceConfig, CONFIG_FILE};
use state::app_state::AppState;
use state::trace_set::TraceSet;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = TraceConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let traces = TraceSet::load(&config)?;
    let state = AppState::from_traces(&traces, config.time_divisor);

    app::run(&config.window, state).map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}
