//! Document masking CLI.
//!
//! This binary is the interactive adapter around the library pipeline:
//! it resolves the three paths (input document, word list, output file),
//! invokes the pipeline, and renders either the output path or a single
//! error message.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use docmask::{MaskError, MaskPipeline};

/// Sensitive Data Masking Tool
///
/// Extracts text from a document (.pdf, .docx, .xls, .xlsx, .txt),
/// masks configured sensitive words plus IP addresses, emails, and
/// phone numbers, and writes the masked text to the output file.
/// Use the 'extract' subcommand to inspect extraction alone.
#[derive(Parser)]
#[command(name = "docmask")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input document path
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Config file with one sensitive word per line
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output text file path (created or overwritten)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a document without masking (for debugging)
    Extract {
        /// Input document path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Masking command handler around the library pipeline.
struct MaskHandler {
    pipeline: MaskPipeline,
    verbose: bool,
}

impl MaskHandler {
    fn new(verbose: bool) -> Self {
        Self {
            pipeline: MaskPipeline::with_default_extractors(),
            verbose,
        }
    }

    /// Executes the full mask-and-save operation.
    fn mask(&self, input: &Path, config: &Path, output: &Path) -> Result<()> {
        if self.verbose {
            println!("Input:  {}", input.display());
            println!("Config: {}", config.display());
            println!("Output: {}", output.display());
        }

        let report = self
            .pipeline
            .run(input, config, output)
            .with_context(|| "Masking failed")?;

        if self.verbose {
            println!("\nMasking Summary:");
            println!("  Words loaded:    {}", report.words_loaded);
            println!("  Literal matches: {}", report.literal_matches);
            println!("  Pattern matches: {}", report.pattern_matches);
        }

        if report.has_matches() {
            println!(
                "✓ Masked {} sensitive span(s) → {}",
                report.total_matches(),
                output.display()
            );
        } else {
            println!(
                "⚠ No sensitive content found; wrote unmodified text → {}",
                output.display()
            );
        }

        Ok(())
    }

    /// Extracts text from a document without masking.
    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let text = self
            .pipeline
            .extract_text(input)
            .with_context(|| "Text extraction failed")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handler = MaskHandler::new(cli.verbose);

    match &cli.command {
        Some(Commands::Extract { input, output }) => {
            handler.extract(input, output.as_deref())?;
        }
        None => {
            // Default: mask-and-save mode
            let input = cli.input.as_ref().ok_or(MaskError::MissingInput("input"))?;
            let config = cli
                .config
                .as_ref()
                .ok_or(MaskError::MissingInput("config"))?;
            let output = cli
                .output
                .as_ref()
                .ok_or(MaskError::MissingInput("output"))?;

            handler.mask(input, config, output)?;
        }
    }

    Ok(())
}
