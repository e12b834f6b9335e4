/// Input decoding and newline normalization.
pub mod encoding;
/// Record materializer: raw records into the output document.
pub mod materializer;
/// Line classifier and record splitter.
pub mod scanner;
/// Fixed tag-code lookup tables.
pub mod tags;
