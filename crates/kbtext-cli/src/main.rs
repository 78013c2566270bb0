use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kbtext_core::{PdfTextExtractor, config_file};
use kbtext_mupdf::MupdfBackend;

mod output;
mod settings;

use settings::{CliOverrides, Settings};

/// Print the plain text of every page of a PDF, in page order
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF (default: $KBTEXT_PDF_PATH, then the config file's
    /// input.default_path, then the built-in knowledge-base path)
    pdf_path: Option<PathBuf>,

    /// Config file to use instead of the platform and ./.kbtext.toml cascade
    /// (default: $KBTEXT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the text to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with an error (stderr, status 1) when extraction fails, instead
    /// of printing the failure description as the output
    #[arg(long)]
    strict: bool,

    /// Replace typographic ligatures (ﬁ, ﬂ, ...) with plain letters
    #[arg(long)]
    expand_ligatures: bool,

    /// Fraction of page height from the top to drop as header
    #[arg(long, value_parser = parse_ratio)]
    header_exclusion: Option<f32>,

    /// Fraction of page height from the bottom to drop as footer
    #[arg(long, value_parser = parse_ratio)]
    footer_exclusion: Option<f32>,
}

fn parse_ratio(s: &str) -> Result<f32, String> {
    let ratio: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not in the range [0.0, 1.0)"))
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| std::env::var(settings::CONFIG_ENV).ok().map(PathBuf::from));
    let config = match config_path {
        Some(ref path) => config_file::load_explicit(path)?,
        None => config_file::load_config(),
    };

    let settings = settings::resolve(
        CliOverrides {
            pdf_path: cli.pdf_path,
            expand_ligatures: cli.expand_ligatures,
            header_exclusion: cli.header_exclusion,
            footer_exclusion: cli.footer_exclusion,
        },
        std::env::var(settings::PDF_PATH_ENV).ok(),
        &config,
    );
    tracing::debug!(?settings, "resolved settings");

    run(&settings, cli.output, cli.strict)
}

fn run(settings: &Settings, output: Option<PathBuf>, strict: bool) -> anyhow::Result<()> {
    let backend = MupdfBackend::new()
        .with_header_exclusion(settings.header_exclusion)
        .with_footer_exclusion(settings.footer_exclusion);
    let extractor =
        PdfTextExtractor::new(backend).with_ligature_expansion(settings.expand_ligatures);

    let text = if strict {
        extractor
            .extract(&settings.pdf_path)
            .with_context(|| format!("failed to extract text from {}", settings.pdf_path.display()))?
    } else {
        extractor.extract_lossy(&settings.pdf_path)
    };

    let mut writer = output::open_writer(output.as_deref())?;
    output::print_text(&mut *writer, &text)?;
    Ok(())
}

/// Logs go to stderr so stdout carries only the extracted text.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
