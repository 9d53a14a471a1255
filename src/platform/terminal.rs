//! Crossterm terminal backend
//!
//! Entering puts the terminal in raw mode on the alternate screen with the
//! cursor hidden. Dropping the `Terminal` restores it, including on error
//! paths and panics that unwind.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use super::{Display, Input, Key};

pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        log::debug!("Terminal in raw mode");
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("Terminal restored");
    }
}

impl Display for Terminal {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn draw_cell(&mut self, row: u16, col: u16, symbol: char) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row), Print(symbol))
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row), Print(text))
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Input for Terminal {
    /// Consumes at most one pending event
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(decode_key(key)),
            _ => Ok(None),
        }
    }
}

/// Arrow keys move, `q` quits. Raw mode swallows SIGINT so Ctrl-C quits too.
pub fn decode_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char('q') => Some(Key::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        _ => None,
    }
}
