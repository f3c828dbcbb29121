use std::io;

use thiserror::Error;

/// Errors that stop a session from starting or the terminal from being driven.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("grid of {cols}x{rows} cells cannot hold the starting snake and a food cell")]
    GridTooSmall { cols: u16, rows: u16 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("logger could not be installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T, E = SnakeError> = std::result::Result<T, E>;
