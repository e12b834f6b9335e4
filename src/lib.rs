//! qif2json: convert Quicken Interchange Format (QIF) exports to JSON.
//!
//! Input bytes are fully decoded, scanned into raw records, and
//! materialized into the output document before anything is written;
//! a failed conversion never leaves partial JSON behind.

use std::fs;
use std::path::Path;

pub mod model;
pub mod qif;

pub use model::document::{Document, FieldPolicy};
pub use model::errors::{ConvertError, MalformedInput};
pub use qif::encoding::Encoding;

use qif::materializer;
use qif::scanner::Scanner;

/// Quicken export extensions accepted: Windows `.qif` and Mac `.qmtf`.
const SUPPORTED_EXTENSIONS: &[&str] = &["qif", "qmtf"];

/// Parse already-decoded QIF text into the output document.
pub fn convert_str(text: &str, policy: FieldPolicy) -> Result<Document, ConvertError> {
    if text.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let text = qif::encoding::normalize_newlines(text);
    let document = materializer::materialize(Scanner::new(&text), policy)?;
    Ok(document)
}

/// Decode raw bytes under `encoding`, then parse.
pub fn convert_bytes(
    bytes: &[u8],
    encoding: Encoding,
    policy: FieldPolicy,
) -> Result<Document, ConvertError> {
    let text = qif::encoding::decode(bytes, encoding)?;
    convert_str(&text, policy)
}

/// Whether `path` carries a supported Quicken export extension
/// (case-insensitive).
pub fn file_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Convert a QIF file on disk into a pretty-printed JSON file.
pub fn convert_file(
    input: &Path,
    output: &Path,
    encoding: Encoding,
    policy: FieldPolicy,
) -> Result<(), ConvertError> {
    if !file_supported(input) {
        return Err(ConvertError::UnsupportedExtension(
            input.display().to_string(),
        ));
    }
    let bytes = fs::read(input)?;
    let document = convert_bytes(&bytes, encoding, policy)?;
    let file = fs::File::create(output)?;
    serde_json::to_writer_pretty(file, &document)?;
    Ok(())
}
