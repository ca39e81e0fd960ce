//! CLI tool for splitting batch EDI files into two balanced halves.
//!
//! # Usage
//!
//! ```bash
//! # Split a specific file
//! edi_split --input orders.txt
//!
//! # Discover *.txt files in the working directory; a menu is shown
//! # when more than one candidate exists
//! edi_split
//! ```

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use edifile::prelude::*;
use tracing::debug;

/// Split a batch EDI file into two halves with recomputed footers.
///
/// Reads the whole input file, classifies lines by record prefix,
/// divides the D1 detail records in half and writes two self-consistent
/// files next to the input.
#[derive(Parser, Debug)]
#[command(name = "edi_split")]
#[command(version, about)]
struct Args {
    /// Input file path. If not specified, *.txt files in the working
    /// directory are discovered and offered for selection.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The selection prompt blocks on stdin; Ctrl+C during the wait is
    // a cancellation, not a crash.
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nOperation cancelled.");
        std::process::exit(0);
    }) {
        debug!(%e, "failed to set Ctrl+C handler");
    }

    // All status reporting goes to stdout, and the exit status does not
    // distinguish validation failures from success.
    if let Err(e) = run() {
        println!("Error processing file: {e:#}");
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match &args.input {
        Some(input) => {
            println!("Processing: {}", input.display());
            split_file(input)
        }
        None => drive(Path::new("."), &mut StdinPrompt),
    }
}

/// Splits one batch file and reports progress on stdout.
///
/// Detail records are divided in half; each output file keeps the three
/// header lines verbatim and gets a footer with its own record count.
/// Validation failures abort the run before any output file is created.
fn split_file(input: &Path) -> Result<()> {
    let batch = BatchFile::read(input)?;
    println!("Found {} detail records to split", batch.detail_count());

    let plan = SplitPlan::new(&batch.details);
    println!("Part 1: {} records", plan.part1.len());
    println!("Part 2: {} records", plan.part2.len());

    let footer = FooterTemplate::parse(&batch.footer)?;
    let (part1_path, part2_path) = part_paths(input);

    println!("\nCreating {}...", part1_path.display());
    let total1 = write_part_file(&part1_path, &batch, &footer, plan.part1)
        .with_context(|| format!("write {}", part1_path.display()))?;

    println!("Creating {}...", part2_path.display());
    let total2 = write_part_file(&part2_path, &batch, &footer, plan.part2)
        .with_context(|| format!("write {}", part2_path.display()))?;

    println!("\nFiles created successfully:");
    println!(
        "- {}: {} detail records + 2 headers = {} total",
        part1_path.display(),
        plan.part1.len(),
        total1
    );
    println!(
        "- {}: {} detail records + 2 headers = {} total",
        part2_path.display(),
        plan.part2.len(),
        total2
    );

    // Read-back echo of the first line of each written file. This is a
    // reporting aid, not a structural verification.
    println!("\nVerification:");
    let echo1 = first_line(&part1_path)
        .with_context(|| format!("read back {}", part1_path.display()))?;
    println!("Part 1 starts with: {}", echo1.trim());
    let echo2 = first_line(&part2_path)
        .with_context(|| format!("read back {}", part2_path.display()))?;
    println!("Part 2 starts with: {}", echo2.trim());

    Ok(())
}

/// Result of mapping one line of prompt input onto the candidate list.
#[derive(Debug, PartialEq, Eq)]
enum Selection<'a> {
    /// A file was chosen.
    Chosen(&'a Path),
    /// Numeric choice outside the menu range.
    InvalidChoice,
    /// The prompt received non-numeric input.
    NonNumeric,
    /// The prompt was cancelled (input closed).
    Cancelled,
}

/// Provider of one line of selection input.
///
/// The interactive prompt is pluggable so the driver logic can be
/// tested without console I/O.
trait SelectionPrompt {
    /// Reads one line of input; `None` means the input was closed.
    fn read_choice(&mut self) -> io::Result<Option<String>>;
}

/// Blocking console prompt.
struct StdinPrompt;

impl SelectionPrompt for StdinPrompt {
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        print!("\nEnter file number: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

/// Discovers batch candidates (`*.txt`) in `dir`, sorted by name.
fn discover_batches(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    // read_dir order is OS-dependent; sort so menus are deterministic
    files.sort();
    debug!(count = files.len(), "discovered batch candidates");
    Ok(files)
}

/// Discovery driver: zero candidates reports and returns, one candidate
/// is processed automatically, several candidates go through the menu.
fn drive(dir: &Path, prompt: &mut dyn SelectionPrompt) -> Result<()> {
    let files = discover_batches(dir)?;

    println!("Found {} .txt files in directory:", files.len());
    for file in &files {
        println!("  - {}", file.display());
    }

    match files.as_slice() {
        [] => {
            println!("No .txt files found in current directory.");
            Ok(())
        }
        [single] => {
            println!("\nProcessing: {}", single.display());
            split_file(single)
        }
        _ => {
            println!("\nSelect a file to process:");
            for (i, file) in files.iter().enumerate() {
                println!("{}. {}", i + 1, file.display());
            }

            match choose(&files, prompt)? {
                Selection::Chosen(path) => {
                    println!("\nProcessing: {}", path.display());
                    split_file(path)
                }
                Selection::InvalidChoice => {
                    println!("Invalid selection.");
                    Ok(())
                }
                Selection::NonNumeric => {
                    println!("Invalid input. Please enter a number.");
                    Ok(())
                }
                Selection::Cancelled => {
                    println!("\nOperation cancelled.");
                    Ok(())
                }
            }
        }
    }
}

/// Maps one line of prompt input onto the candidate list.
fn choose<'a>(
    files: &'a [PathBuf],
    prompt: &mut dyn SelectionPrompt,
) -> io::Result<Selection<'a>> {
    let Some(line) = prompt.read_choice()? else {
        return Ok(Selection::Cancelled);
    };

    let Ok(number) = line.trim().parse::<i64>() else {
        return Ok(Selection::NonNumeric);
    };

    let chosen = number
        .checked_sub(1)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| files.get(idx));
    match chosen {
        Some(path) => Ok(Selection::Chosen(path)),
        None => Ok(Selection::InvalidChoice),
    }
}
