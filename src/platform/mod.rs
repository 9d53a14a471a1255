//! Platform abstraction layer
//!
//! The simulation never touches the terminal directly. It draws through
//! `Display`, reads keys through `Input` and paces itself through `Clock`:
//! - `terminal`: crossterm backend for both display and input
//! - `SystemClock`: thread sleep
//! - `LogBuffer`: holds log output while the terminal is in raw mode

use std::io;
use std::time::Duration;

use crate::sim::{Command, Direction};

pub mod log_buffer;
pub mod terminal;
#[cfg(test)]
pub mod testing;

pub use log_buffer::LogBuffer;
pub use terminal::Terminal;

/// Character-cell output
pub trait Display {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_cell(&mut self, row: u16, col: u16, symbol: char) -> io::Result<()>;
    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;
    /// Flush everything drawn since the last clear
    fn present(&mut self) -> io::Result<()>;
}

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
}

impl Key {
    pub fn command(self) -> Command {
        match self {
            Key::Up => Command::Move(Direction::Up),
            Key::Down => Command::Move(Direction::Down),
            Key::Left => Command::Move(Direction::Left),
            Key::Right => Command::Move(Direction::Right),
            Key::Quit => Command::Quit,
        }
    }
}

/// Non-blocking key source
pub trait Input {
    /// Next pending key, `None` if nothing recognised is waiting
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
}

/// Blocking sleeps
pub trait Clock {
    fn sleep_micros(&mut self, micros: u64);
}

/// Wall-clock sleeps
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep_micros(&mut self, micros: u64) {
        std::thread::sleep(Duration::from_micros(micros));
    }
}
