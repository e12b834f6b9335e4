/// Output document model and the default-field policy.
pub mod document;
/// Crate-wide error types.
pub mod errors;
