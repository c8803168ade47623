use std::io::{self, Write};

use super::target::PackTarget;
use super::Container;
use crate::core::error::PackResult;

/// Path of an entry and the bytes written to it so far.
#[derive(Debug)]
pub(super) struct Entry {
    path: String,
    bytes: Vec<u8>,
}

impl Entry {
    pub(super) fn new(path: String) -> Self {
        Self {
            path,
            bytes: Vec::new(),
        }
    }

    pub(super) fn into_parts(self) -> (String, Vec<u8>) {
        (self.path, self.bytes)
    }
}

/// Handle to the open entry of a [`Container`].
///
/// Bytes are buffered and reach the target only through
/// [`commit`](Self::commit). A handle dropped without being committed
/// discards its entry, which leaves the pack incomplete until the path is
/// written again.
pub struct OpenEntry<'c, T: PackTarget> {
    container: &'c mut Container<T>,
    entry: Option<Entry>,
}

impl<'c, T: PackTarget> OpenEntry<'c, T> {
    pub(super) fn new(container: &'c mut Container<T>, entry: Entry) -> Self {
        Self {
            container,
            entry: Some(entry),
        }
    }

    pub fn path(&self) -> &str {
        self.entry.as_ref().map_or("", |entry| entry.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entry.as_ref().map_or(0, |entry| entry.bytes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hands the buffered bytes to the target.
    ///
    /// If the target rejects them the entry is discarded and the error is
    /// returned with the entry's path.
    pub fn commit(mut self) -> PackResult<()> {
        match self.entry.take() {
            Some(entry) => self.container.commit(entry),
            None => Ok(()),
        }
    }

    /// Drops the entry without committing anything.
    pub fn discard(mut self) {
        if let Some(entry) = self.entry.take() {
            self.container.discard(entry);
        }
    }
}

impl<'c, T: PackTarget> Write for OpenEntry<'c, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.entry {
            Some(entry) => {
                entry.bytes.extend_from_slice(buf);
                Ok(buf.len())
            }
            None => Err(io::Error::new(io::ErrorKind::Other, "entry already released")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'c, T: PackTarget> Drop for OpenEntry<'c, T> {
    fn drop(&mut self) {
        if let Some(entry) = self.entry.take() {
            self.container.discard(entry);
        }
    }
}
