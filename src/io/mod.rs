//! Input/output operations, configuration and error handling

/// Command-line parsing and the single-file driver
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Progress display
pub mod progress;
