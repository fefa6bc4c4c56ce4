use std::time::Duration;

use ratatui::style::Color;

/// Number of cells along each axis of the square board.
pub const GRID_COUNT: i32 = 25;

/// Width of one board cell in terminal columns.
///
/// Terminal cells are roughly twice as tall as they are wide, so a board
/// cell spans two columns and one row to read as square.
pub const CELL_WIDTH: u16 = 2;

/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 1;

/// Horizontal gap between the window edge and the play field, in columns.
pub const PADDING_X: u16 = 4;

/// Vertical gap between the window edge and the play field, in rows.
///
/// The top band also carries the title and score line.
pub const PADDING_Y: u16 = 2;

/// Window title and on-screen banner text.
pub const WINDOW_TITLE: &str = "Esnake";

/// Interval between accepted gameplay ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Render loop pacing; drawing and input polling run at this cadence.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Points granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 5;

/// Colors applied to every drawn element.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Window background fill.
    pub background: Color,
    /// Title and score text.
    pub text: Color,
    /// Play-field border outline.
    pub border: Color,
    /// Snake body segments.
    pub snake: Color,
    /// Food cell.
    pub food: Color,
}

/// Classic palette: light field, blue snake, red food, sky-blue border.
pub const THEME_CLASSIC: Theme = Theme {
    background: Color::White,
    text: Color::Black,
    border: Color::LightBlue,
    snake: Color::Blue,
    food: Color::Red,
};
