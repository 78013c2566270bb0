pub mod backend;
pub mod config_file;
pub mod extractor;
pub mod mock;
pub mod text_processing;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use config_file::{ConfigError, ConfigFile};
pub use extractor::{ExtractError, PdfTextExtractor};
pub use text_processing::{expand_ligatures, join_pages};

/// PDF read when neither the command line, the environment nor a config
/// file names one.
pub const DEFAULT_PDF_PATH: &str = r"e:\KnowledgeBase\展品展项知识库体系.pdf";
