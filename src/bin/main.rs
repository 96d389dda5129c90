//! Batch session driver.
//!
//! Reads a command script, feeds each line to the scheduling engine, and
//! writes the rendered event stream to `<input stem>_output_file.txt`
//! next to the input (or to an explicit `--output` path).

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use runway_sched::command::{self, Command, ParseError};
use runway_sched::scheduler::RunwayScheduler;

#[derive(Parser, Debug)]
#[command(name = "runway-sched", about = "Deterministic runway scheduling engine")]
struct Args {
    /// Path to the command script.
    input: PathBuf,

    /// Output path; defaults to `<input stem>_output_file.txt` beside the input.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());
    input.with_file_name(format!("{stem}_output_file.txt"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));

    let reader = BufReader::new(File::open(&args.input)?);
    let mut writer = BufWriter::new(File::create(&output_path)?);

    let mut engine = RunwayScheduler::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match command::parse_line(&line) {
            Ok(command) => command,
            Err(ParseError::UnknownCommand(name)) => {
                warn!(%name, "unknown command");
                writeln!(writer, "Unknown command: {name}")?;
                continue;
            }
            Err(err) => {
                warn!(%line, %err, "malformed command");
                writeln!(writer, "Error processing line '{}': {err}", line.trim())?;
                continue;
            }
        };

        let quitting = matches!(command, Command::Quit);
        for event in engine.apply(command) {
            writeln!(writer, "{event}")?;
        }
        if quitting {
            break;
        }
    }

    writer.flush()?;
    info!(output = %output_path.display(), "session complete");
    Ok(())
}
