/// Command-line parsing and the solve command
pub mod cli;
/// Format and rendering constants
pub mod configuration;
/// Plain-text grid rendering
pub mod display;
/// Error types for loading and exporting
pub mod error;
/// Bitmap font used by image export
pub mod glyphs;
/// PNG export of filled grids
pub mod image;
/// Structure and word list file loading
pub mod loader;
/// Search progress spinner
pub mod progress;
