//! Defaults and limits used throughout the application

/// Log filter used when `RUST_LOG` is not set
pub const LOGGING_LEVEL_DEFAULT: &str = "info";

pub const DEFAULT_DATA_DIR: &str = "data";

// Sudoku
pub const SUDOKU_SIZE: usize = 9;
/// The chance for each cell of a generated Sudoku to be blanked
pub const SUDOKU_PERCENT_TO_REMOVE: f64 = 0.6;
pub const SUDOKU_MAX_SIZE: usize = 25;
pub const SUDOKU_GENERATE_ATTEMPTS: u32 = 1000;

// KenKen
/// Cage IDs are the letters A-Z
pub const KENKEN_MAX_SIZE: usize = 26;

// Wordle
pub const WORD_LENGTH: usize = 5;
pub const WORDLE_ATTEMPTS: u32 = 6;
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

// Strands
pub const STRANDS_MIN_WORD_LENGTH: usize = 4;
/// Board cells are tracked in a 64 bit mask
pub const STRANDS_MAX_CELLS: usize = 64;

// Connections
pub const CONNECTIONS_GROUP_SIZE: usize = 4;
pub const CONNECTIONS_GROUP_COUNT: usize = 4;

// Colours
pub const CORRECT_COLOUR: (u8, u8, u8) = (93, 162, 113);
pub const POSITION_COLOUR: (u8, u8, u8) = (242, 129, 35);
pub const WRONG_COLOUR: (u8, u8, u8) = (128, 128, 128);
pub const FONT_COLOUR: (u8, u8, u8) = (214, 214, 214);
