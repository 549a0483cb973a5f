use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::errors::ClipError;
use crate::parsers::SECTION_SEPARATOR;
use crate::pipeline::convert;
use crate::render::OutputFormat;
use crate::storage::{read_clippings, save_documents};
use crate::utils::format_path_with_tilde;

const DEFAULT_INPUT: &str = "My Clippings.txt";
const DEFAULT_OUTPUT_DIR: &str = "./books/";

#[derive(Parser)]
#[command(name = "klipper")]
#[command(version = "0.1.0")]
#[command(about = "Parse and sort a Kindle \"My Clippings.txt\" file into one document per book", long_about = None)]
pub struct Cli {
    /// Kindle "My Clippings" file [default: "My Clippings.txt"]
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Kindle "My Clippings" file, as an option
    #[arg(long = "input", value_name = "FILE", conflicts_with = "input_file")]
    pub input: Option<PathBuf>,

    /// Output folder
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Output formatter (html, json, kindle)
    #[arg(
        short = 'f',
        long = "formatter",
        value_name = "FORMAT",
        default_value = "html",
        value_parser = parse_format
    )]
    pub format: OutputFormat,
}

impl Cli {
    pub fn input_path(&self) -> PathBuf {
        self.input_file
            .clone()
            .or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }
}

/// Checked by clap while reading arguments, before any file is opened
fn parse_format(name: &str) -> Result<OutputFormat, ClipError> {
    name.parse()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert_file(&cli.input_path(), &cli.output, cli.format)
}

/// Convert one clippings export into per-title documents under `output_dir`
pub fn convert_file(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<()> {
    let raw = read_clippings(input)?;
    let documents = convert(&raw, SECTION_SEPARATOR, format)
        .with_context(|| format!("Failed to convert clippings file: {}", input.display()))?;
    let written = save_documents(output_dir, &documents)?;

    println!(
        "Wrote {} {} document(s) to {}",
        written.len(),
        format,
        format_path_with_tilde(output_dir)
    );

    Ok(())
}
