//! Input format, rendering and runtime configuration defaults

// Structure and text rendering
/// Character marking a fillable cell in structure files
pub const OPEN_CELL: char = '_';
/// Character printed for blocked cells
pub const BLOCK_GLYPH: char = '█';
/// Character printed for open cells no word covers
pub const EMPTY_GLYPH: char = ' ';

// Image rendering
/// Side length of one grid cell in pixels
pub const CELL_SIZE: u32 = 100;
/// Width of the dark border around each open cell in pixels
pub const CELL_BORDER: u32 = 2;
/// Share of the cell interior height taken by a letter, in percent
pub const GLYPH_HEIGHT_PERCENT: u32 = 60;
/// Background and letter colour
pub const INK_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Open cell colour
pub const PAPER_COLOR: [u8; 4] = [255, 255, 255, 255];

// Default values for configurable parameters
/// Fixed seed for reproducible tie-breaking
pub const DEFAULT_SEED: u64 = 42;

// Progress spinner settings
/// Search steps between spinner message refreshes
pub const PROGRESS_REFRESH_STEPS: usize = 256;
/// Spinner animation interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
