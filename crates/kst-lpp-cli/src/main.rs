use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use kst_lpp_core::samples::SAMPLES;
use kst_lpp_core::{DecodeOptions, DecodeReport, HeaderRadix, Outcome, decode_report};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("KST_LPP_BUILD_COMMIT"),
    ", ",
    env!("KST_LPP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "kst-lpp")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for KST33xx LPP sensor uplinks (distance, battery, accelerometer, GPS).",
    long_about = None,
    after_help = "Examples:\n  kst-lpp decode 01820036\n  kst-lpp decode --input uplink.hex -o report.json\n  kst-lpp samples"
)]
struct Cli {
    /// Log decoder diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one hex payload into a versioned JSON report.
    #[command(
        after_help = "Examples:\n  kst-lpp decode 018805F371F006170372EE\n  kst-lpp decode --input uplink.hex -o report.json --pretty\n  kst-lpp decode 0A820036 --header-radix hex"
    )]
    Decode {
        /// Hex payload, e.g. 01820036
        #[arg(required_unless_present = "input")]
        payload: Option<String>,

        /// Read the payload from a file (one hex payload, whitespace ignored)
        #[arg(short = 'i', long, conflicts_with = "payload")]
        input: Option<PathBuf>,

        /// Output report path (JSON); stdout when omitted
        #[arg(short = 'o', long)]
        report: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Base used to read the channel and type tag bytes
        #[arg(long, value_enum, default_value_t = RadixArg::Decimal)]
        header_radix: RadixArg,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if the payload does not decode
        #[arg(long)]
        strict: bool,
    },
    /// Decode the built-in sample uplinks and print labeled results.
    Samples {
        /// Base used to read the channel and type tag bytes
        #[arg(long, value_enum, default_value_t = RadixArg::Decimal)]
        header_radix: RadixArg,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RadixArg {
    Decimal,
    Hex,
}

impl From<RadixArg> for HeaderRadix {
    fn from(value: RadixArg) -> Self {
        match value {
            RadixArg::Decimal => HeaderRadix::Decimal,
            RadixArg::Hex => HeaderRadix::Hex,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            payload,
            input,
            report,
            pretty,
            compact,
            header_radix,
            quiet,
            strict,
        } => cmd_decode(DecodeArgs {
            payload,
            input,
            report,
            pretty,
            compact,
            options: DecodeOptions::with_header_radix(header_radix.into()),
            quiet,
            strict,
        }),
        Commands::Samples {
            header_radix,
            pretty,
        } => cmd_samples(
            &DecodeOptions::with_header_radix(header_radix.into()),
            pretty,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

struct DecodeArgs {
    payload: Option<String>,
    input: Option<PathBuf>,
    report: Option<PathBuf>,
    pretty: bool,
    compact: bool,
    options: DecodeOptions,
    quiet: bool,
    strict: bool,
}

fn cmd_decode(args: DecodeArgs) -> Result<(), CliError> {
    let payload = match (args.payload, args.input.as_ref()) {
        (Some(payload), _) => payload.trim().to_string(),
        (None, Some(input)) => {
            let resolved = resolve_input_path(input)?;
            if let Some(report) = args.report.as_ref() {
                ensure_distinct_paths(&resolved, report)?;
            }
            read_payload_file(&resolved)?
        }
        (None, None) => {
            return Err(CliError::new(
                "missing payload",
                Some("pass a hex payload or use -i/--input".to_string()),
            ));
        }
    };

    let mut rep = decode_report(&payload, &args.options);
    if args.report.is_some() {
        rep.generated_at = now_rfc3339()?;
    }
    let json = serialize_report(&rep, args.pretty, args.compact)?;

    if !args.quiet {
        if let Outcome::Failed(failure) = &rep.result {
            eprintln!("warning: payload did not decode: {}", failure.error);
        }
    }

    match args.report {
        None => println!("{}", json),
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report, json)
                .with_context(|| format!("Failed to write report: {}", report.display()))?;
            if !args.quiet {
                eprintln!("OK: report written -> {}", report.display());
            }
        }
    }

    if args.strict && !rep.result.is_decoded() {
        return Err(CliError::new(
            "payload could not be decoded",
            Some("run without --strict to inspect the error report".to_string()),
        ));
    }
    Ok(())
}

fn cmd_samples(options: &DecodeOptions, pretty: bool) -> Result<(), CliError> {
    println!();
    println!(
        "KST3320 LPP decoder (v{}, commit {})",
        env!("CARGO_PKG_VERSION"),
        env!("KST_LPP_BUILD_COMMIT")
    );
    println!();
    println!("Decoded LPP sample messages appear below.");
    println!();
    for sample in SAMPLES {
        let rep = decode_report(sample.payload, options);
        let json = if pretty {
            serde_json::to_string_pretty(&rep.result)
        } else {
            serde_json::to_string(&rep.result)
        }
        .context("JSON serialization failed")?;

        println!("---------------------------------");
        println!("{:^33}", sample.label);
        println!("---------------------------------");
        if let Some(note) = sample.note {
            println!("NOTE: {}", note);
        }
        println!("{} -> {}", sample.payload, json);
        println!();
    }
    Ok(())
}

fn serialize_report(rep: &DecodeReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn now_rfc3339() -> Result<String, CliError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("Failed to format report timestamp")
        .map_err(Into::into)
}

fn read_payload_file(input: &Path) -> Result<String, CliError> {
    if !input.is_file() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a file holding one hex payload".to_string()),
        ));
    }
    debug!(path = %input.display(), "reading payload file");
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let payload: String = raw.split_whitespace().collect();
    if payload.is_empty() {
        return Err(CliError::new(
            format!("input file is empty: {}", input.display()),
            Some("pass a file holding one hex payload".to_string()),
        ));
    }
    Ok(payload)
}

fn ensure_distinct_paths(input: &Path, report: &Path) -> Result<(), CliError> {
    let input_abs = match fs::canonicalize(input) {
        Ok(path) => path,
        Err(_) => return Ok(()),
    };
    let report_abs = match fs::canonicalize(report) {
        Ok(path) => path,
        Err(_) => return Ok(()),
    };
    if input_abs == report_abs {
        return Err(CliError::new(
            format!("report path must differ from input: {}", report.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single payload file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
