//! unblank CLI - remove blank pages from PDF documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unblank::{clean_document, scan, CleanOutcome, PdfSource, ScanObserver, TextSource, Verdict};

#[derive(Parser)]
#[command(name = "unblank")]
#[command(version)]
#[command(about = "Remove blank pages from PDF documents", long_about = None)]
struct Cli {
    /// Input PDF files
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Directory for cleaned files (next to each input if not set)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove blank pages and write cleaned copies
    Clean {
        /// Input PDF files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for cleaned files (next to each input if not set)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// File name prefix for cleaned copies
        #[arg(long, default_value = "cleaned_")]
        prefix: String,
    },

    /// List blank pages without writing anything
    Scan {
        /// Input PDF files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Emit one JSON report per file
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Clean {
            inputs,
            output,
            prefix,
        }) => cmd_clean(&inputs, output.as_deref(), &prefix),
        Some(Commands::Scan { inputs, json }) => cmd_scan(&inputs, json),
        None => {
            // Default behavior: clean if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: unblank <FILE>...".yellow());
                println!("       unblank --help for more information");
                Ok(())
            } else {
                cmd_clean(&cli.inputs, cli.output.as_deref(), "cleaned_")
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Progress bar driven by the scan observer hook, one tick per page.
struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    fn for_pages(total: u32) -> Self {
        let bar = ProgressBar::new(u64::from(total));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl ScanObserver for ProgressObserver {
    fn on_page(&mut self, page: u32, total: u32, _verdict: Verdict) {
        self.bar
            .set_message(format!("Processing page {page}/{total}..."));
        self.bar.inc(1);
    }
}

fn display_name(input: &Path) -> String {
    input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

fn cleaned_path(input: &Path, output: Option<&Path>, prefix: &str) -> PathBuf {
    let file_name = format!("{}{}", prefix, display_name(input));
    match output {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn cmd_clean(
    inputs: &[PathBuf],
    output: Option<&Path>,
    prefix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    // One document at a time; a failure never blocks the rest of the batch.
    let mut failed = 0usize;
    for input in inputs {
        if let Err(e) = clean_one(input, output, prefix) {
            eprintln!("{}: {}: {}", "Error".red().bold(), input.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn clean_one(
    input: &Path,
    output: Option<&Path>,
    prefix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = display_name(input);

    let source = PdfSource::load_file(input)?;
    let mut observer = ProgressObserver::for_pages(source.page_count());
    let outcome = clean_document(source, &mut observer)?;
    observer.bar.finish_and_clear();

    for warning in &outcome.report().warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }

    let summary = outcome.summary(&name);
    match &outcome {
        CleanOutcome::AlreadyClean { .. } => {
            println!("{}", summary.blue());
        }
        CleanOutcome::Cleaned { pdf, .. } => {
            let out_path = cleaned_path(input, output, prefix);
            fs::write(&out_path, pdf)?;
            println!("{} {}", "✓".green().bold(), summary);
            println!("  {} {}", "Saved to".green(), out_path.display());
        }
    }
    Ok(())
}

fn cmd_scan(inputs: &[PathBuf], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = 0usize;
    for input in inputs {
        if let Err(e) = scan_one(input, json) {
            eprintln!("{}: {}: {}", "Error".red().bold(), input.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn scan_one(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let name = display_name(input);

    let source = PdfSource::load_file(input)?;
    let report = scan(&source);

    if json {
        let value = serde_json::json!({
            "file": name,
            "total_pages": report.total_pages,
            "blank_pages": report.blank_pages,
            "kept_pages": report.kept(),
            "verdicts": report.verdicts,
            "warnings": report.warnings,
        });
        println!("{}", serde_json::to_string(&value)?);
        return Ok(());
    }

    println!("{}", name.cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: PDF {}", "Format".bold(), source.version());
    println!("{}: {}", "Pages".bold(), report.total_pages);
    println!("{}: {}", "Blank".bold(), report.removed());
    if !report.blank_pages.is_empty() {
        let listed: Vec<String> = report.blank_pages.iter().map(|p| p.to_string()).collect();
        println!("{}: {}", "Blank pages".bold(), listed.join(", "));
    }
    for warning in &report.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }
    println!();
    Ok(())
}
