use clap::ValueEnum;
use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::model::errors::ConvertError;

/// Character encoding of the input file. Quicken for Windows exports
/// cp1252; Mac exports (`.qmtf`) are UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    #[value(name = "utf-8")]
    Utf8,
    #[value(name = "cp1252")]
    Cp1252,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Cp1252
    }
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Cp1252 => "cp1252",
        }
    }
}

/// Decode raw input bytes under `encoding`. Undecodable byte sequences
/// are a fatal error, never replaced. A leading byte-order mark is
/// dropped.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String, ConvertError> {
    let codec = match encoding {
        Encoding::Utf8 => UTF_8,
        Encoding::Cp1252 => WINDOWS_1252,
    };
    let text = codec
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(ConvertError::Decoding(encoding.name()))?;
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text.into_owned()),
    }
}

/// Normalize CRLF and lone CR line endings to LF. Quicken exports are
/// not consistent about line endings across platforms, so this runs
/// once before scanning.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
