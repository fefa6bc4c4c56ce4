use std::io;

use thiserror::Error;

/// Failures the frontend can hit while setting up or driving the terminal.
///
/// Core gameplay has no error states; game over is a normal transition.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "terminal is {actual_cols}x{actual_rows} but the board needs \
         {needed_cols}x{needed_rows}; enlarge the terminal and retry"
    )]
    TerminalTooSmall {
        needed_cols: u16,
        needed_rows: u16,
        actual_cols: u16,
        actual_rows: u16,
    },

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
