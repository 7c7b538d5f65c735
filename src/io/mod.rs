/// Command-line parsing and batch orchestration
pub mod cli;
/// Layout constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Progress display
pub mod progress;
