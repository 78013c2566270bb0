use std::path::PathBuf;

use kbtext_core::{ConfigFile, DEFAULT_PDF_PATH};

/// Environment variable naming the PDF to read when no path argument is given.
pub const PDF_PATH_ENV: &str = "KBTEXT_PDF_PATH";
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "KBTEXT_CONFIG";

/// Extraction settings after merging CLI flags, environment and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pdf_path: PathBuf,
    pub expand_ligatures: bool,
    pub header_exclusion: f32,
    pub footer_exclusion: f32,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub pdf_path: Option<PathBuf>,
    pub expand_ligatures: bool,
    pub header_exclusion: Option<f32>,
    pub footer_exclusion: Option<f32>,
}

/// Resolve configuration: CLI flags > env vars > config file > defaults.
pub fn resolve(cli: CliOverrides, env_pdf_path: Option<String>, config: &ConfigFile) -> Settings {
    let pdf_path = cli
        .pdf_path
        .or_else(|| env_pdf_path.filter(|p| !p.is_empty()).map(PathBuf::from))
        .or_else(|| config.default_path().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH));

    Settings {
        pdf_path,
        expand_ligatures: cli.expand_ligatures || config.expand_ligatures().unwrap_or(false),
        header_exclusion: cli
            .header_exclusion
            .or(config.header_exclusion())
            .unwrap_or(0.0),
        footer_exclusion: cli
            .footer_exclusion
            .or(config.footer_exclusion())
            .unwrap_or(0.0),
    }
}
