//! Turns a `GameState` into a terminal-sized grid of glyphs. Pure, so it can
//! be tested without a terminal; `term.rs` only has to print the difference
//! between two frames.

use crossterm::style::Color;

use crate::cell::Cell;
use crate::direction::Direction::*;
use crate::state::{GameState, Mode};
use crate::{GridInt, TermInt};

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '●';
const DEAD_SNAKE_CHAR: char = 'X';
const BORDER_LIT_CHAR: char = '▒';
const BORDER_DARK_CHAR: char = '░';

pub const INTRO_LINES: &[&str] = &[
    "Arrow keys or WASD to move",
    "Space or Esc to pause",
    "Enter to restart after a crash",
    "q or CTRL+C to quit",
    "",
    "Press any key to begin",
];

const PAUSED_LINES: &[&str] = &["GAME PAUSED", "Press Space to resume"];
const OVER_LINES: &[&str] = &["GAME OVER!", "Press Enter to restart"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph { ch: ' ', color: Color::Reset };

    pub const fn new(ch: char, color: Color) -> Self {
        Glyph { ch, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: TermInt,
    height: TermInt,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn blank(width: TermInt, height: TermInt) -> Self {
        Frame { width, height, glyphs: vec![Glyph::BLANK; width as usize * height as usize] }
    }

    /// Draws the border, food, snake and any mode overlay. Each grid cell is
    /// `cell_width` columns wide and one row tall.
    pub fn compose(state: &GameState, cell_width: TermInt, width: TermInt, height: TermInt) -> Self {
        let mut frame = Frame::blank(width, height);
        let cw = cell_width.max(1);

        frame.draw_border(state.cols(), state.rows(), cw);
        frame.fill_cell(state.food(), cw, Glyph::new(FOOD_CHAR, Color::Red));

        let snake = state.snake();
        if state.mode() == Mode::Over {
            for &pos in snake.body() {
                frame.fill_cell(pos, cw, Glyph::new(DEAD_SNAKE_CHAR, Color::DarkRed));
            }
        } else {
            for &pos in snake.body().iter().skip(1) {
                frame.fill_cell(pos, cw, Glyph::new(SNAKE_BODY_CHAR, Color::Green));
            }
            frame.fill_cell(snake.head(), cw, Glyph::new(head_char(state), Color::White));
        }

        match state.mode() {
            Mode::Running => {}
            Mode::Paused => frame.show_message(PAUSED_LINES),
            Mode::Over => frame.show_message(OVER_LINES),
        }

        frame
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn get(&self, x: TermInt, y: TermInt) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.glyphs[self.index(x, y)])
    }

    /// Writes a glyph; anything outside the frame is dropped.
    pub fn put(&mut self, x: TermInt, y: TermInt, glyph: Glyph) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.glyphs[i] = glyph;
        }
    }

    /// Centred box of text on top of whatever is already drawn.
    pub fn show_message(&mut self, lines: &[&str]) {
        let msg_height = lines.len() as TermInt + 2;
        let msg_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as TermInt + 2;
        let left = (self.width / 2).saturating_sub(msg_width / 2);
        let top = (self.height / 2).saturating_sub(msg_height / 2);

        for y_diff in 0..msg_height {
            for x_diff in 0..msg_width {
                self.put(left + x_diff, top + y_diff, Glyph::BLANK);
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{: ^width$}", line, width = msg_width as usize);
            let y = top + i as TermInt + 1;
            for (x_diff, ch) in padded.chars().enumerate() {
                self.put(left + x_diff as TermInt, y, Glyph::new(ch, Color::White));
            }
        }
    }

    /// One row as plain text, colours dropped.
    pub fn row_text(&self, y: TermInt) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).map(|g| g.ch).collect()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, x: TermInt, y: TermInt) -> usize {
        self.width as usize * y as usize + x as usize
    }

    fn fill_cell(&mut self, cell: Cell, cell_width: TermInt, glyph: Glyph) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }

        let x0 = cell.x as usize * cell_width as usize;
        let y = cell.y as usize;
        if x0 >= self.width as usize || y >= self.height as usize {
            return;
        }

        let x1 = (x0 + cell_width as usize).min(self.width as usize);
        for x in x0..x1 {
            self.put(x as TermInt, y as TermInt, glyph);
        }
    }

    fn draw_border(&mut self, cols: GridInt, rows: GridInt, cell_width: TermInt) {
        for y in 0..rows {
            for x in 0..cols {
                if x > 0 && y > 0 && x < cols - 1 && y < rows - 1 {
                    continue;
                }

                let glyph = if (x + y) % 2 == 0 {
                    Glyph::new(BORDER_LIT_CHAR, Color::DarkGreen)
                } else {
                    Glyph::new(BORDER_DARK_CHAR, Color::DarkGrey)
                };
                self.fill_cell(Cell::new(x, y), cell_width, glyph);
            }
        }
    }
}

/// The head's "eyes" look the way the snake last moved.
fn head_char(state: &GameState) -> char {
    match state.snake().heading() {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
        Still => 'o',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Snake;

    fn scripted(cols: GridInt, rows: GridInt) -> GameState {
        let mut state = GameState::with_seed(cols, rows, 9).unwrap();
        state.set_snake(Snake::from_cells(vec![Cell::new(3, 2), Cell::new(2, 2)], Right).unwrap());
        state.set_food(Cell::new(1, 1));
        state
    }

    #[test]
    fn draws_border_food_and_snake() {
        let state = scripted(6, 5);
        let frame = Frame::compose(&state, 2, 12, 5);

        assert_eq!(frame.row_text(0), "▒▒░░▒▒░░▒▒░░");
        assert_eq!(frame.row_text(1), "░░●●      ▒▒");
        assert_eq!(frame.row_text(2), "▒▒  ██>>  ░░");
    }

    #[test]
    fn dead_snake_is_marked() {
        let mut state = scripted(6, 5);
        state.set_snake(Snake::from_cells(vec![Cell::new(5, 2)], Right).unwrap());
        state.tick();
        assert_eq!(state.mode(), Mode::Over);

        let frame = Frame::compose(&state, 1, 40, 10);
        assert_eq!(frame.get(5, 2).map(|g| g.ch), Some(DEAD_SNAKE_CHAR));
    }

    #[test]
    fn overlay_matches_mode() {
        let mut state = scripted(20, 10);
        state.toggle_pause();

        let frame = Frame::compose(&state, 2, 40, 10);
        let text: Vec<String> = (0..10).map(|y| frame.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains("GAME PAUSED")));
        assert!(!text.iter().any(|row| row.contains("GAME OVER")));
    }

    #[test]
    fn cells_outside_the_terminal_are_clipped() {
        let mut state = scripted(30, 20);
        state.set_food(Cell::new(28, 18));

        // Terminal only shows the top-left corner of the grid.
        let frame = Frame::compose(&state, 2, 10, 4);
        assert_eq!(frame.width(), 10);
        assert_eq!(frame.height(), 4);
        assert_eq!(frame.get(10, 0), None);
    }

    #[test]
    fn message_larger_than_frame_does_not_panic() {
        let mut frame = Frame::blank(5, 2);
        frame.show_message(INTRO_LINES);
        assert_eq!(frame.row_text(0).chars().count(), 5);
    }
}
