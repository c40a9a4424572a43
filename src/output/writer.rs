//! Output file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::error::WriteError;

/// Fixed output file name, overwritten on every run
pub const OUTPUT_FILE_NAME: &str = "output_utf8.txt";

/// The output file inside the platform temp directory
pub fn default_output_path() -> PathBuf {
    std::env::temp_dir().join(OUTPUT_FILE_NAME)
}

/// Write `content` as UTF-8 to `path`, replacing any previous file
pub fn write_output(path: &Path, content: &str) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}
