use clap::{Parser, Subcommand, ValueEnum};
use glyph_accounts::core::{parse_digits, parse_symbols};
use glyph_accounts::entry::{render_result, DecoderParams, DEFAULT_ENTRY_WIDTH};
use glyph_accounts::glyph::render_digits;
use glyph_accounts::{init_logging, scan, ScanConfig};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "glyph-accounts",
    version,
    about = "Decode and validate seven-segment ASCII account numbers"
)]
struct Cli {
    /// Log verbosity written to stderr.
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a batch file (3 glyph rows + 1 blank line per entry).
    Scan {
        input: PathBuf,
        /// Digits per entry.
        #[arg(long, default_value_t = DEFAULT_ENTRY_WIDTH)]
        width: usize,
        /// Print the JSON report instead of plain lines.
        #[arg(long)]
        json: bool,
        /// Also write the JSON report to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Classify account numbers given as text (`?` or any non-digit is unknown).
    Check {
        #[arg(required = true)]
        numbers: Vec<String>,
    },
    /// Print the glyph rows for a digit string.
    Render { digits: String },
    /// Run a scan described by a JSON config file.
    Run {
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LevelFilter::from(cli.log_level))?;

    match cli.command {
        Command::Scan {
            input,
            width,
            json,
            output,
        } => {
            let report = scan::scan_file(&input, DecoderParams::with_width(width))?;
            if let Some(out) = output {
                report.write_json(&out)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if !report.entries.is_empty() {
                println!("{}", report.render_text());
            }
        }
        Command::Check { numbers } => {
            for number in numbers {
                println!("{}", render_result(&parse_symbols(&number)));
            }
        }
        Command::Render { digits } => {
            let digits = parse_digits(&digits)?;
            for row in render_digits(&digits) {
                println!("{row}");
            }
        }
        Command::Run { config } => {
            let cfg = ScanConfig::load_json(&config)?;
            let report = scan::run_config(&cfg)?;
            if !report.entries.is_empty() {
                println!("{}", report.render_text());
            }
        }
    }

    Ok(())
}
