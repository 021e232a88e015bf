//! Character-grid renderer
//!
//! Each frame is composed into plain strings first, then written row by row.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use game_core::driver::Renderer;
use game_core::{Field, GameState};

use crate::camera::Camera;

const PADDLE: char = '█';
const BALL: char = 'O';
/// Left edge is the unguarded side
const OPEN_EDGE: char = ':';

pub const HELP: &str = "Up/Down or W/S to move, Q to quit";
pub const GAME_OVER: &str = "GAME OVER - press any key";
pub const QUIT: &str = "Bye!";

/// Build every terminal row for a field, status line last
pub fn compose(field: &Field, camera: &Camera, status: &str) -> Vec<String> {
    let cols = usize::from(camera.cols);
    let rows = usize::from(camera.rows);
    let mut grid = vec![vec![' '; cols]; rows];

    let paddle = &field.paddle;
    let (pcols, prows) = camera.rect_cells(paddle.pos, paddle.size);
    for row in prows {
        for col in pcols.clone() {
            grid[usize::from(row)][usize::from(col)] = PADDLE;
        }
    }

    if let Some(ball) = field.ball.ball() {
        let (bcols, brows) = camera.rect_cells(ball.pos, ball.size);
        for row in brows {
            for col in bcols.clone() {
                grid[usize::from(row)][usize::from(col)] = BALL;
            }
        }
    }

    let border = format!("+{}+", "-".repeat(cols));
    let mut lines = Vec::with_capacity(rows + 3);
    lines.push(border.clone());
    for row in grid {
        let mut line = String::with_capacity(cols + 2);
        line.push(OPEN_EDGE);
        line.extend(row);
        line.push('|');
        lines.push(line);
    }
    lines.push(border);

    let status: String = status.chars().take(cols + 2).collect();
    lines.push(format!("{status:<width$}", width = cols + 2));
    lines
}

/// Draws the field to a terminal writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    size: (u16, u16),
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, size: (u16, u16)) -> Self {
        Self { out, size }
    }

    /// Pick up terminal resizes, clearing leftovers from the old layout
    fn refresh_size(&mut self) -> io::Result<()> {
        if let Ok(size) = terminal::size() {
            if size != self.size {
                log::debug!("Terminal resized to {}x{}", size.0, size.1);
                self.size = size;
                queue!(self.out, Clear(ClearType::All))?;
            }
        }
        Ok(())
    }

    fn present(&mut self, field: &Field, status: &str) -> io::Result<()> {
        let camera = Camera::fit(field.width, field.height, self.size.0, self.size.1);
        for (row, line) in compose(field, &camera, status).iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, cursor::MoveTo(0, row), Print(line))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn draw(&mut self, field: &Field) -> Result<(), Self::Error> {
        self.refresh_size()?;
        self.present(field, HELP)
    }

    fn finish(&mut self, state: &GameState) -> Result<(), Self::Error> {
        let status = if state.is_over() { GAME_OVER } else { QUIT };
        self.present(state.field(), status)
    }
}
