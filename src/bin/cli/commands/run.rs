//! Run and list command handlers

use trade_smoke::{
    CheckContext, CheckRegistry, CheckStatus, ClientError, ClientResult, RunReport, SmokeConfig,
    SmokeRunner,
};

pub async fn handle_run_command(
    config: &SmokeConfig,
    checks: &[String],
    core_only: bool,
    format: &str,
    no_wait: bool,
) -> ClientResult<RunReport> {
    let format = OutputFormat::parse(format)?;
    let registry = if core_only {
        CheckRegistry::core()
    } else {
        CheckRegistry::default()
    };
    let selected = registry.select(checks)?;

    let runner = SmokeRunner::new(CheckContext::new(config.clone())?);
    if !(no_wait || config.skip_health_check) {
        runner.wait_until_ready().await?;
    }

    let report = runner.run(&selected).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }

    Ok(report)
}

/// Report rendering selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Resolved before any check runs, so a typo never costs a full run
    fn parse(value: &str) -> ClientResult<Self> {
        match value {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ClientError::config_error(format!(
                "Unknown output format '{}' (expected table or json)",
                other
            ))),
        }
    }
}

fn print_table(report: &RunReport) {
    println!("Smoke run against {}", report.base_url);
    println!("Started: {}", report.started_at.to_rfc3339());
    println!();

    for check in &report.reports {
        let icon = match check.status {
            CheckStatus::Passed => "✓",
            CheckStatus::Failed => "✗",
            CheckStatus::Skipped => "-",
        };
        println!(
            "  {} {:<24} {:>7}ms  {}",
            icon, check.name, check.duration_ms, check.status
        );
        if let Some(message) = &check.message {
            println!("      {}", message);
        }
    }

    println!();
    println!(
        "{} passed, {} failed, {} skipped in {}ms",
        report.passed(),
        report.failed(),
        report.skipped(),
        report.total_duration_ms()
    );
}

pub fn handle_list_command() -> ClientResult<()> {
    let core = CheckRegistry::core();
    for check in CheckRegistry::default().iter() {
        let tag = if core.get(check.name()).is_some() {
            "core"
        } else {
            "extended"
        };
        println!("{:<24} [{}] {}", check.name(), tag, check.description());
    }
    Ok(())
}
