use std::{
    io::{self, Write},
    ops::Range,
};

use cpong_shared::{
    game_state::{WINDOW_HEIGHT, WINDOW_WIDTH},
    scene::{DrawCommand, Rect, Scene},
};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tracing::debug;

const BACKGROUND: char = ' ';
const FOREGROUND: char = '█';

/// a grid of terminal cells that the playfield is scaled onto.
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BACKGROUND; cols as usize * rows as usize],
        }
    }

    pub fn apply(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear => self.cells.fill(BACKGROUND),
            DrawCommand::FillRect(rect) => self.fill_rect(rect),
            DrawCommand::Text { text, y } => self.print_centred(text, *y),
        }
    }

    fn fill_rect(&mut self, rect: &Rect) {
        let cols = scale_span(rect.x, rect.w, self.cols, WINDOW_WIDTH);
        for row in scale_span(rect.y, rect.h, self.rows, WINDOW_HEIGHT) {
            let offset = row * self.cols as usize;
            self.cells[offset + cols.start..offset + cols.end].fill(FOREGROUND);
        }
    }

    fn print_centred(&mut self, text: &str, y: i32) {
        let Some(row) = scale_span(y, 1, self.rows, WINDOW_HEIGHT).next() else {
            return;
        };
        let len = text.chars().count();
        let start = (self.cols as usize).saturating_sub(len) / 2;
        let offset = row * self.cols as usize;
        for (col, c) in (start..self.cols as usize).zip(text.chars()) {
            self.cells[offset + col] = c;
        }
    }

    pub fn row(&self, row: u16) -> String {
        let offset = row as usize * self.cols as usize;
        self.cells[offset..offset + self.cols as usize]
            .iter()
            .collect()
    }
}

/// maps `start..start + len` in playfield units onto `0..cells` terminal cells.
/// anything that is on screen and has a non-zero length covers at least one cell.
fn scale_span(start: i32, len: i32, cells: u16, extent: i32) -> Range<usize> {
    let cells = i64::from(cells);
    let extent = i64::from(extent);
    let first = (i64::from(start) * cells).div_euclid(extent);
    let last = (i64::from(start + len) * cells + extent - 1).div_euclid(extent);
    let last = if len > 0 { last.max(first + 1) } else { first };
    first.clamp(0, cells) as usize..last.clamp(0, cells) as usize
}

/// draws scenes onto a terminal by redrawing every cell each frame.
pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: Canvas,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            canvas: Canvas::new(cols, rows),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        debug!(cols, rows, "terminal resized");
        self.canvas = Canvas::new(cols, rows);
        queue!(self.out, Clear(ClearType::All))
    }

    pub fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        for command in scene {
            self.canvas.apply(command);
        }
        queue!(
            self.out,
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::White),
        )?;
        for row in 0..self.canvas.rows {
            queue!(self.out, MoveTo(0, row), Print(self.canvas.row(row)))?;
        }
        self.out.flush()
    }
}
