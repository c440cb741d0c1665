use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_reconciler::engine::{MatchOutcome, ReconciliationEngine};
use transaction_reconciler::report::{render, ReportFormat};
use transaction_reconciler::storage::{CsvLedger, Scope};
use transaction_reconciler::types::AccountId;

/// Reconciles a ledger export against an external transaction feed.
#[derive(Parser)]
#[command(name = "transaction-reconciler", version)]
struct Args {
    /// Ledger export (id,from_account,to_account,type,amount,description)
    #[arg(short, long)]
    ledger: PathBuf,

    /// External feed (external_id,amount,type,reference)
    #[arg(short, long)]
    external: PathBuf,

    /// Only reconcile ledger transactions involving this account
    #[arg(short, long)]
    account: Option<AccountId>,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    #[arg(long, value_enum, env = "RECONCILER_LOG_LEVEL", default_value_t = LogLevel::Error)]
    log_level: LogLevel
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level.into());

    let scope = args.account.map_or(Scope::All, Scope::Account);
    let engine = ReconciliationEngine::new(Arc::new(CsvLedger::new(&args.ledger)));

    let timer = Instant::now();
    let inputs = engine.load(&args.external, scope).await?;
    let outcome = inputs.reconcile();
    let duration = timer.elapsed();

    info!("Reconciled {} in: {duration:?}", outcome.summary());

    write_report_to_stdout(&outcome, args.format)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report owns stdout, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(outcome: &MatchOutcome<'_>, format: ReportFormat) -> Result<()> {
    let report = render(outcome, format)?;
    let mut output = BufWriter::new(stdout().lock());

    write!(output, "{report}")?;

    if !report.ends_with('\n') {
        writeln!(output)?;
    }

    output.flush()?;

    Ok(())
}
