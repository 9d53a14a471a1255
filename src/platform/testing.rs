//! In-memory platform for tests

use std::collections::VecDeque;
use std::io;

use super::{Clock, Display, Input, Key};
use crate::consts::*;

/// Records drawn cells and feeds scripted keys
#[derive(Debug)]
pub struct FakeTerminal {
    cells: Vec<Vec<char>>,
    /// Text drawn since the last clear
    pub texts: Vec<String>,
    pub presents: usize,
    pub keys: VecDeque<Key>,
}

impl FakeTerminal {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            cells: vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT],
            texts: Vec::new(),
            presents: 0,
            keys: keys.into_iter().collect(),
        }
    }

    pub fn char_at(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }

    fn put(&mut self, row: u16, col: u16, symbol: char) {
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *cell = symbol;
        }
    }
}

impl Display for FakeTerminal {
    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.texts.clear();
        Ok(())
    }

    fn draw_cell(&mut self, row: u16, col: u16, symbol: char) -> io::Result<()> {
        self.put(row, col, symbol);
        Ok(())
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i as u16, ch);
        }
        self.texts.push(text.to_string());
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.presents += 1;
        Ok(())
    }
}

impl Input for FakeTerminal {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }
}

/// Records sleeps instead of sleeping
#[derive(Debug, Default)]
pub struct FakeClock {
    pub sleeps: Vec<u64>,
}

impl Clock for FakeClock {
    fn sleep_micros(&mut self, micros: u64) {
        self.sleeps.push(micros);
    }
}
