// Logistics Plan Runner — derive a full planning scenario from the command line
//
// Usage:
//   cargo run --bin plan                                        # Default scenario
//   cargo run --bin plan -- --scenario plan.toml                # Load a TOML/JSON scenario
//   cargo run --bin plan -- --set volume.total_deliverable=250  # Override one parameter
//   cargo run --bin plan -- --json out/plan.json                # Also write the scenario as JSON
//   cargo run --bin plan -- --list-params                       # Show the parameter catalogue
//   cargo run --bin plan -- --allow-negative-remainder          # Let A% + B% > 100 propagate
//
// Log level follows RUST_LOG (default: logistics_engine=info).

mod report;

use logistics_engine::{params, EngineConfig, Planner, ScenarioError, ScenarioInput};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct CliArgs {
    scenario: Option<PathBuf>,
    overrides: Vec<(String, f64)>,
    json: Option<PathBuf>,
    list_params: bool,
    config: EngineConfig,
}

fn parse_override(raw: &str) -> Result<(String, f64), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::Usage(format!("--set expects key=value, got `{raw}`")))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("--set {key}: `{value}` is not a number")))?;
    Ok((key.trim().to_string(), value))
}

fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let mut cli = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| CliError::Usage("--scenario needs a file path".into()))?;
                cli.scenario = Some(PathBuf::from(path));
            }
            "--set" => {
                i += 1;
                let raw = args
                    .get(i)
                    .ok_or_else(|| CliError::Usage("--set needs key=value".into()))?;
                cli.overrides.push(parse_override(raw)?);
            }
            "--json" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| CliError::Usage("--json needs a file path".into()))?;
                cli.json = Some(PathBuf::from(path));
            }
            "--list-params" => cli.list_params = true,
            "--allow-negative-remainder" => cli.config.allow_negative_remainder = true,
            other => return Err(CliError::Usage(format!("unknown argument: {other}"))),
        }
        i += 1;
    }
    Ok(cli)
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn run(cli: CliArgs) -> Result<(), CliError> {
    let input = match &cli.scenario {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scenario");
            ScenarioInput::from_path(path)?
        }
        None => ScenarioInput::default(),
    };

    let mut planner = Planner::from_input(input, cli.config)?;
    for (key, value) in &cli.overrides {
        tracing::info!(key = %key, value, "applying override");
        planner.apply(key, *value)?;
    }

    if cli.list_params {
        let current = planner.input();
        report::print_params(params::parameters(), |key| current.get(key).ok().flatten());
        return Ok(());
    }

    let scenario = planner.scenario();
    println!("\n  Logistics Plan v{}", env!("CARGO_PKG_VERSION"));
    report::print_scenario(scenario);

    if let Some(path) = &cli.json {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let envelope = report::PlanReport {
            timestamp: ts.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            config: *planner.config(),
            warnings: scenario.warnings.iter().map(|w| w.message()).collect(),
            scenario,
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| CliError::Write {
                path: dir.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        })?;
        println!("  Results saved to: {}\n", path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logistics_engine=info,plan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(run);
    if let Err(err) = result {
        tracing::error!(error = %err, "plan failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_overrides_and_flags() {
        let cli = parse_args(&args(&[
            "--set",
            "volume.pct_a=35",
            "--set",
            "labour.worker_hourly_rate = 22.5",
            "--allow-negative-remainder",
            "--json",
            "out/plan.json",
        ]))
        .expect("test: valid args");
        assert_eq!(
            cli.overrides,
            vec![
                ("volume.pct_a".to_string(), 35.0),
                ("labour.worker_hourly_rate".to_string(), 22.5)
            ]
        );
        assert!(cli.config.allow_negative_remainder);
        assert_eq!(cli.json, Some(PathBuf::from("out/plan.json")));
        assert!(!cli.list_params);
    }

    #[test]
    fn rejects_malformed_override() {
        assert!(matches!(parse_args(&args(&["--set", "volume.pct_a"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args(&["--set", "volume.pct_a=lots"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args(&["--scenario"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args(&["--bogus"])), Err(CliError::Usage(_))));
    }

    #[test]
    fn run_surfaces_engine_errors() {
        let cli = CliArgs {
            overrides: vec![("volume.pct_a".to_string(), 90.0)],
            ..CliArgs::default()
        };
        assert!(matches!(run(cli), Err(CliError::Scenario(ScenarioError::NegativeRemainder { .. }))));
    }
}
