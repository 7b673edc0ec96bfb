//! Option heatmap entry point

use anyhow::Result;
use clap::Parser;
use demo_gui::logging;
use demo_gui::prelude::*;

fn main() -> Result<()> {
    let config = SessionConfig::from(Cli::parse());
    config.validate()?;

    // The TUI owns stdout, so logs only go to --log-file when given
    logging::init(&config)?;
    tracing::info!(params = ?config.params, "option heatmap starting");

    let mut app = TuiApp::new(Session::new(config.params))?;
    app.run()?;

    Ok(())
}
