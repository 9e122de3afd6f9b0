//! The `watch` command: keep the status fresh while offline.

use std::sync::Arc;
use std::time::Duration;

use crate::cli::args::{OutputFormat, WatchArgs};
use crate::core::analyzer::Analyzer;
use crate::core::config::AppConfig;
use crate::core::monitor::Monitor;
use crate::error::Result;
use crate::render::{human, robot};

/// Execute the watch command. Runs until interrupted.
pub async fn execute(
    args: &WatchArgs,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<()> {
    args.validate()?;
    let interval = Duration::from_secs(args.interval);

    let config = AppConfig::load()?;
    let analyzer = Arc::new(Analyzer::new(&config)?);

    analyzer.sweep_all().await;
    render(&analyzer, format, pretty, no_color)?;

    // Background re-probing while offline; the foreground loop only
    // renders whatever the store holds.
    let monitor = Monitor::new(Arc::clone(&analyzer), interval).spawn();

    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {
                render(&analyzer, format, pretty, no_color)?;
            }
            _ = tokio::signal::ctrl_c() => {
                monitor.abort();
                return Ok(());
            }
        }
    }
}

fn render(analyzer: &Analyzer, format: OutputFormat, pretty: bool, no_color: bool) -> Result<()> {
    let status = analyzer.status();
    match format {
        OutputFormat::Human => print!("{}", human::render_status(&status, no_color)),
        OutputFormat::Json => {
            let report = robot::StatusReport::new(status);
            println!("{}", robot::render_json(&report, pretty)?);
        }
    }
    Ok(())
}
