use thiserror::Error;

/// Construction-time configuration failures. Fatal: no partially built board
/// or config is usable after one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfig {
    #[error("board size must be at least 1, got {size}")]
    BoardSize { size: u8 },

    #[error("win size {win_size} must be between 1 and the board size {size}")]
    WinSize { win_size: u8, size: u8 },

    #[error("blocked cell ({x}, {y}) is outside the {size}x{size} board")]
    BlockedCell { x: u8, y: u8, size: u8 },

    #[error("time budget must be a positive number of seconds, got {seconds}")]
    TimeBudget { seconds: f64 },

    #[error("malformed board diagram: {0}")]
    Diagram(String),

    #[error("malformed configuration: {0}")]
    Parse(String),
}

/// A rejected move at the application boundary. Recoverable: the caller picks
/// another move. Search never produces these; it only probes cells it has
/// already checked to be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("({x}, {y}) is outside the board")]
    OutOfRange { x: u8, y: u8 },

    #[error("({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    #[error("({x}, {y}) is blocked")]
    Blocked { x: u8, y: u8 },
}
