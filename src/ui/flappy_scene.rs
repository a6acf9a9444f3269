//! UI rendering for the Flappy Bird game.
//!
//! The renderer only borrows the game immutably. Playfield coordinates are
//! sampled at the centre of each terminal cell, so the picture scales with
//! the terminal size.

use crate::ui::game_common::{
    create_game_layout, render_game_over_box, render_info_panel_frame, render_status_bar,
};
use flappy::game::types::{Bounds, FlappyGame, GameOverCause};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Bird,
    Obstacle,
    Coin,
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if let Some(cause) = game.state.game_over {
        let message = match cause {
            GameOverCause::Obstacle => format!("Hit an obstacle. Score: {}", game.state.score),
            GameOverCause::OutOfBounds => format!("Left the sky. Score: {}", game.state.score),
        };
        render_game_over_box(frame, layout.content, &message, "Press SPACE to restart");
    }
}

/// Sample the playfield into a `rows` x `cols` grid of cells.
pub fn build_play_grid(game: &FlappyGame, cols: u16, rows: u16) -> Vec<Vec<Cell>> {
    let (cols, rows) = (cols as i32, rows as i32);
    let (width, height) = (game.config.width, game.config.height);
    let state = &game.state;

    let mut grid = vec![vec![Cell::Empty; cols as usize]; rows as usize];
    if cols == 0 || rows == 0 {
        return grid;
    }

    // Map a playfield point to the cell containing it.
    let cell_of = |px: i32, py: i32| -> Option<(usize, usize)> {
        let col = px * cols / width;
        let row = py * rows / height;
        ((0..cols).contains(&col) && (0..rows).contains(&row)).then_some((row as usize, col as usize))
    };

    for (row, line) in grid.iter_mut().enumerate() {
        let py = ((2 * row as i32 + 1) * height) / (2 * rows);
        for (col, cell) in line.iter_mut().enumerate() {
            let px = ((2 * col as i32 + 1) * width) / (2 * cols);

            *cell = if state.bird.bounds().contains_point(px, py) {
                Cell::Bird
            } else if state
                .coin
                .is_some_and(|coin| in_inscribed_circle(&coin.bounds, px, py))
            {
                Cell::Coin
            } else if state
                .obstacles
                .iter()
                .any(|o| o.bounds.contains_point(px, py))
            {
                Cell::Obstacle
            } else {
                Cell::Empty
            };
        }
    }

    // Small sprites can fall between sample points; always mark their centre.
    if let Some(coin) = state.coin {
        let (cx, cy) = coin.bounds.center();
        if let Some((row, col)) = cell_of(cx, cy) {
            if grid[row][col] != Cell::Bird {
                grid[row][col] = Cell::Coin;
            }
        }
    }
    let (bx, by) = state.bird.bounds().center();
    if let Some((row, col)) = cell_of(bx, by) {
        grid[row][col] = Cell::Bird;
    }

    grid
}

fn in_inscribed_circle(bounds: &Bounds, px: i32, py: i32) -> bool {
    let (cx, cy) = bounds.center();
    let r = bounds.width.min(bounds.height) / 2;
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

/// Render the main play area with bird, obstacles and coin.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = build_play_grid(game, area.width, area.height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Bird => Span::styled("█", bird_style),
                    Cell::Obstacle => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Coin => Span::styled("●", Style::default().fg(Color::Yellow)),
                    Cell::Empty => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.state.is_game_over() {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.state.score),
            Color::Red,
            &[("[Space]", "Restart"), ("[Esc/q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.state.score),
            Color::Green,
            &[("[Any key]", "Flap"), ("[Esc/q]", "Quit")],
        );
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let coin_text = if game.state.coin.is_some() {
        Span::styled("in flight", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("none", label)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", game.state.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(" Coin: ", label), coin_text]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                format!("{}", game.state.obstacles.len() / 2),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::raw(format!("{}", game.state.bird.velocity)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
