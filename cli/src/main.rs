use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use warning_gate_core::{GateConfig, OutputFormat, check_report, format_verdict, read_companion};

/// The report has a non-zero warning count.
const EXIT_WARNINGS: u8 = 1;
/// No verdict could be reached.
const EXIT_ERROR: u8 = 2;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Text => Self::Text,
            CliOutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "warning-gate", version)]
#[command(about = "Fail the build when a FindBugs report has warnings")]
struct Cli {
    /// FindBugs HTML report to check.
    report: PathBuf,
    /// Text report printed before the failure message [default: ./build/findbugs/findbugs.txt].
    #[arg(long)]
    companion: Option<PathBuf>,
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format [default: text].
    #[arg(long)]
    format: Option<CliOutputFormat>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_WARNINGS),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Returns whether the report passed.
fn run(cli: Cli) -> Result<bool, String> {
    let config = match &cli.config {
        Some(path) => GateConfig::load(path).map_err(|err| err.to_string())?,
        None => GateConfig::default(),
    }
    .with_overrides(cli.companion, cli.format.map(Into::into));
    debug!(?config, "resolved configuration");

    let verdict = check_report(&cli.report).map_err(|err| err.to_string())?;

    // The companion is only shown alongside a failing text verdict.
    let companion = if !verdict.passed() && config.format == OutputFormat::Text {
        read_companion(&config.companion_report)
    } else {
        None
    };

    let out = format_verdict(
        &verdict,
        &config.companion_report,
        companion.as_deref(),
        config.format,
    )?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|err| format!("Failed to write output: {err}"))?;

    Ok(verdict.passed())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
