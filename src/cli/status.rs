//! The `status` command: probe every provider and report.

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::core::analyzer::Analyzer;
use crate::core::config::AppConfig;
use crate::error::Result;
use crate::render::{human, robot};

/// Execute the status command.
pub async fn execute(
    _args: &StatusArgs,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<()> {
    let config = AppConfig::load()?;
    let analyzer = Analyzer::new(&config)?;

    analyzer.retest_all().await;
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
