use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::{Theme, WINDOW_TITLE};
use crate::game::GameState;
use crate::grid::{Cell, Grid};

/// Renders one full frame from immutable state.
///
/// Per frame: background fill, border outline around the play field, title
/// and score text in the top band, one cell-sized rectangle for the food
/// and for every snake segment.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::new().bg(theme.background)),
        area,
    );

    let grid = state.grid();
    let window = window_rect(area, grid);

    render_banner(frame, window, grid, state.score, theme);
    render_border(frame, window, grid, theme);

    render_cell(frame, window, grid, state.food.position, theme.food);
    for segment in state.snake.segments() {
        render_cell(frame, window, grid, *segment, theme.snake);
    }
}

/// Centers the fixed board window inside the terminal area.
fn window_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid.window_width().min(area.width);
    let height = grid.window_height().min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Title on the left, running score on the right, inside the top band.
fn render_banner(frame: &mut Frame<'_>, window: Rect, grid: Grid, score: u32, theme: &Theme) {
    let band = Rect {
        x: window.x + grid.padding_x,
        y: window.y,
        width: window.width.saturating_sub(2 * grid.padding_x),
        height: 1,
    }
    .intersection(window);
    if band.width == 0 {
        return;
    }

    let text_style = Style::new().fg(theme.text).bg(theme.background);
    frame.render_widget(Paragraph::new(WINDOW_TITLE).style(text_style), band);
    frame.render_widget(
        Paragraph::new(format!("Score: {score}"))
            .alignment(Alignment::Right)
            .style(text_style),
        band,
    );
}

/// Outline one cell outside the play field, so the field itself stays clear.
fn render_border(frame: &mut Frame<'_>, window: Rect, grid: Grid, theme: &Theme) {
    let field_width = grid.window_width() - 2 * grid.padding_x;
    let field_height = grid.window_height() - 2 * grid.padding_y;

    let outline = Rect {
        x: window.x + grid.padding_x - 1,
        y: window.y + grid.padding_y - 1,
        width: field_width + 2,
        height: field_height + 2,
    }
    .intersection(window);

    frame.render_widget(
        Block::bordered().border_style(Style::new().fg(theme.border)),
        outline,
    );
}

/// Draws one board cell as a solid rectangle.
fn render_cell(frame: &mut Frame<'_>, window: Rect, grid: Grid, cell: Cell, color: Color) {
    // Off-board cells only exist transiently and are not drawn.
    let Some((dx, dy)) = grid.cell_origin(cell) else {
        return;
    };

    let rect = Rect {
        x: window.x + dx,
        y: window.y + dy,
        width: grid.cell_width,
        height: grid.cell_height,
    }
    .intersection(window);

    frame.render_widget(Block::new().style(Style::new().bg(color)), rect);
}
