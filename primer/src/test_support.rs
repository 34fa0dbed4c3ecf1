//! Test-only helpers for building people, line sources, and config files.

use std::cell::Cell;
use std::fs;
use std::io::{self, BufRead, Cursor, Read};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::person::Person;

/// A person with an explicit age.
pub fn aged(name: &str, age: i32) -> Person {
    Person::with_age(name, age)
}

/// A person whose age is absent.
pub fn ageless(name: &str) -> Person {
    Person::new(name)
}

/// Write `contents` to `primer.toml` inside a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the path to stay valid.
pub fn write_config_file(contents: &str) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    let path = temp.path().join("primer.toml");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((temp, path))
}

/// In-memory line source that counts how many times it is released.
pub struct TrackedSource {
    inner: Cursor<Vec<u8>>,
    drops: Rc<Cell<usize>>,
}

impl TrackedSource {
    pub fn new(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            inner: Cursor::new(bytes.to_vec()),
            drops: Rc::new(Cell::new(0)),
        }
    }

    /// Shared release counter; still readable after the source is consumed.
    pub fn drops(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.drops)
    }
}

impl Read for TrackedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for TrackedSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
    }
}

impl Drop for TrackedSource {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Line source whose every read fails; counts releases like `TrackedSource`.
pub struct FailingSource {
    drops: Rc<Cell<usize>>,
}

impl FailingSource {
    pub fn new() -> Self {
        Self {
            drops: Rc::new(Cell::new(0)),
        }
    }

    pub fn drops(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.drops)
    }
}

impl Default for FailingSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Read for FailingSource {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("source unavailable"))
    }
}

impl BufRead for FailingSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("source unavailable"))
    }

    fn consume(&mut self, _amt: usize) {}
}

impl Drop for FailingSource {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
