//! The `analyze` command.

use std::io::Read;

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::core::analyzer::{Analysis, AnalysisSource, Analyzer, DegradedReason};
use crate::core::config::AppConfig;
use crate::core::sample::SAMPLE_ANALYSIS;
use crate::error::{Result, SiaError};
use crate::render::{human, robot};
use crate::util::env::stdin_is_tty;

/// Execute the analyze command.
pub async fn execute(
    args: &AnalyzeArgs,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<()> {
    if args.offline {
        let analysis = Analysis {
            content: SAMPLE_ANALYSIS.to_string(),
            source: AnalysisSource::Sample(DegradedReason::AllOffline),
        };
        emit(&analysis, format, pretty, no_color)?;
        return Ok(());
    }

    let idea = read_idea(args)?;
    let config = AppConfig::load()?;
    let analyzer = Analyzer::new(&config)?;

    // Startup sweep so the orchestrator has fresh health data to walk.
    analyzer.sweep_all().await;

    let analysis = analyzer.analyze(&idea).await;
    emit(&analysis, format, pretty, no_color)
}

fn emit(analysis: &Analysis, format: OutputFormat, pretty: bool, no_color: bool) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", human::render_analysis(analysis, no_color)),
        OutputFormat::Json => {
            let report = robot::AnalyzeReport::new(analysis);
            println!("{}", robot::render_json(&report, pretty)?);
        }
    }
    Ok(())
}

/// The idea text: positional argument, or piped stdin.
fn read_idea(args: &AnalyzeArgs) -> Result<String> {
    if let Some(idea) = &args.idea {
        let trimmed = idea.trim();
        if trimmed.is_empty() {
            return Err(SiaError::Config("idea text is empty".to_string()));
        }
        return Ok(trimmed.to_string());
    }

    if stdin_is_tty() {
        return Err(SiaError::Config(
            "no idea given; pass it as an argument or pipe it on stdin".to_string(),
        ));
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err(SiaError::Config("stdin was empty".to_string()));
    }
    Ok(trimmed.to_string())
}
