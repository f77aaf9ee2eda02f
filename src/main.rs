use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use upi_insights::{Report, Snapshot};

fn main() -> Result<()> {
    //NOTE: If I was making a much more sophisticated CLI application, I would have used the clap crate
    //      to handle the CLI parsing and execution.
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|arg| arg == "list") {
        for report in Report::ALL {
            println!("{:<32} {}", report.name(), report.description());
        }
        return Ok(());
    }

    if args.len() < 3 {
        eprintln!("Usage: upi-insights [input].csv [report] [log_level:optional] > [output].csv");
        eprintln!("       upi-insights list");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let report: Report = args[2].parse()?;

    let timer = Instant::now();
    let snapshot = Snapshot::from_path(path)?;

    info!("Loaded {} transactions in: {:?}", snapshot.len(), timer.elapsed());

    let output = BufWriter::new(stdout().lock());
    report.write_csv(snapshot.transactions(), output)?;

    info!("Generated report [{}] in: {:?}", report.name(), timer.elapsed());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
