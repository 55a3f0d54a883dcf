//! CLI: args, input reading, and run logic.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::logging::init_logging;
use crate::normalizer::{
    NormalizationConfig, DEFAULT_MATCH_FLAGS, DEFAULT_REPLACE_PATTERN, DEFAULT_VALIDATION_PATTERN,
};
use crate::sync::{SyncAdapter, SyncOutcome, ValueControl};
use clap::Parser;

#[derive(Parser)]
#[command(name = "replace-chars")]
#[command(about = "Fold accented characters to ASCII, drop disallowed characters, tidy whitespace.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Values to normalize (default when omitted: --file, else one value per stdin line)
    #[arg(value_name = "VALUE", conflicts_with = "file")]
    pub values: Vec<String>,

    /// Read values from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Characters to substitute with their ASCII equivalent
    #[arg(long, value_name = "PAT", default_value = DEFAULT_REPLACE_PATTERN)]
    pub replace_pattern: String,

    /// Single-character pattern; characters that do not match are dropped
    #[arg(long, value_name = "PAT", default_value = DEFAULT_VALIDATION_PATTERN)]
    pub validation_pattern: String,

    /// Flags for --replace-pattern: g (all matches), i, m, s, u, d
    #[arg(long = "flags", value_name = "FLAGS", default_value = DEFAULT_MATCH_FLAGS)]
    pub match_flags: String,

    /// Remove whitespace instead of collapsing runs to a single space
    #[arg(long)]
    pub no_spaces: bool,

    /// Write through a bound form control instead of the input value
    #[arg(long)]
    pub bind: bool,

    /// Print nothing; exit with code 1 if any value would change
    #[arg(short, long)]
    pub check: bool,

    /// Verbose: -v = info, -vv = each write, -vvv = unchanged values too
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> NormalizationConfig {
        NormalizationConfig::default()
            .with_replace_pattern(&self.replace_pattern)
            .with_validation_pattern(&self.validation_pattern)
            .with_match_flags(&self.match_flags)
            .with_allow_spaces(!self.no_spaces)
    }
}

fn read_lines(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

fn read_values(args: &Args) -> std::io::Result<Vec<String>> {
    if !args.values.is_empty() {
        return Ok(args.values.clone());
    }
    match &args.file {
        Some(path) => read_file_values(path),
        None => read_lines(std::io::stdin().lock()),
    }
}

fn read_file_values(path: &Path) -> std::io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    read_lines(std::io::BufReader::new(file))
}

/// Value the host field shows after the event was handled.
fn synced_value<'a>(
    adapter: &'a SyncAdapter<Option<ValueControl>>,
    input: &'a str,
    outcome: SyncOutcome,
) -> &'a str {
    match outcome {
        SyncOutcome::Control => adapter
            .binding()
            .as_ref()
            .map(ValueControl::value)
            .unwrap_or(input),
        SyncOutcome::Target | SyncOutcome::Unchanged => input,
    }
}

/// Run with output to `out`. Returns the process exit code.
pub fn run_with_output(args: Args, out: &mut dyn Write) -> i32 {
    init_logging(args.verbose);

    let binding = args.bind.then(|| ValueControl::new(""));
    let mut adapter = SyncAdapter::with_binding(args.config(), binding);
    if let Err(e) = adapter.prepare() {
        eprintln!("Error: {}", e);
        return 2;
    }

    let values = match read_values(&args) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };
    tracing::info!(count = values.len(), bind = args.bind, "normalizing values");

    let mut changed = 0usize;

    for value in values {
        let mut input = value;
        let outcome = match adapter.on_input(&mut input) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 2;
            }
        };
        if outcome != SyncOutcome::Unchanged {
            changed += 1;
        }
        if args.check {
            continue;
        }
        if let Err(e) = writeln!(out, "{}", synced_value(&adapter, &input, outcome)) {
            eprintln!("Error: {}", e);
            return 2;
        }
    }

    tracing::info!(changed, "done");
    if args.check && changed > 0 {
        1
    } else {
        0
    }
}

pub fn run(args: Args) -> i32 {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}
