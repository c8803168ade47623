use std::collections::BTreeMap;

use crate::core::error::PackResult;

/// Destination that receives fully written entries.
///
/// A target sees each path at most once and only ever whole entries;
/// uniqueness and single-writer discipline are enforced by
/// [`Container`](super::Container).
pub trait PackTarget {
    type Output;

    fn commit(&mut self, path: &str, bytes: &[u8]) -> PackResult<()>;

    /// Seals the output once every entry has been committed.
    fn finish(self) -> PackResult<Self::Output>;
}

/// Keeps every entry in memory, keyed by path.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }
}

impl PackTarget for MemoryTarget {
    type Output = BTreeMap<String, Vec<u8>>;

    fn commit(&mut self, path: &str, bytes: &[u8]) -> PackResult<()> {
        self.entries.insert(path.to_string(), bytes.to_vec());
        Ok(())
    }

    fn finish(self) -> PackResult<Self::Output> {
        Ok(self.entries)
    }
}
