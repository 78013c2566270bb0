use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Write the extracted text followed by a single newline, with no header
/// or other decoration.
pub fn print_text(w: &mut dyn Write, text: &str) -> std::io::Result<()> {
    writeln!(w, "{}", text)?;
    w.flush()
}

/// Open the destination: the file at `output` if given, stdout otherwise.
pub fn open_writer(output: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    })
}
