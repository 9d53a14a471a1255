//! In-memory log sink
//!
//! stderr shares the tty with the game screen, so log records are held here
//! while the terminal is in raw mode and written out once it is restored.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to a shared byte buffer
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write everything buffered so far to `out` and empty the buffer
    pub fn drain_into<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut bytes = self.lock()?;
        out.write_all(&bytes)?;
        out.flush()?;
        bytes.clear();
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().map(|b| b.is_empty()).unwrap_or(true)
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Vec<u8>>> {
        self.bytes
            .lock()
            .map_err(|_| io::Error::other("log buffer lock poisoned"))
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
