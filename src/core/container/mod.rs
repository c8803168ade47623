mod archive;
mod directory;
mod entry;
mod target;

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, warn};

pub use archive::{archive_sha1, sha1_hex, ZipTarget};
pub use directory::DirectoryTarget;
pub use entry::OpenEntry;
pub use target::{MemoryTarget, PackTarget};

use crate::core::error::{PackError, PackResult};
use crate::core::paths::validate_entry_path;
use entry::Entry;

#[derive(Debug, PartialEq, Eq)]
enum ContainerState {
    Idle,
    EntryOpen { path: String },
}

/// Hierarchical output of a pack build.
///
/// Hands out one [`OpenEntry`] at a time, keeps every path unique for the
/// lifetime of the container and forwards an entry's bytes to the target
/// only when the entry is committed. Discarded entries and rejected paths
/// are remembered so that [`finish`](Self::finish) can report an
/// incomplete pack.
pub struct Container<T: PackTarget> {
    target: T,
    state: ContainerState,
    paths: HashSet<String>,
    failed: BTreeSet<String>,
}

impl<T: PackTarget> Container<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            state: ContainerState::Idle,
            paths: HashSet::new(),
            failed: BTreeSet::new(),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether `path` is taken by an open or committed entry.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of paths taken, including an open entry.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path of the currently open entry.
    pub fn open_entry(&self) -> Option<&str> {
        match &self.state {
            ContainerState::Idle => None,
            ContainerState::EntryOpen { path } => Some(path),
        }
    }

    /// Paths that keep the pack from being sealed: discarded entries not
    /// committed since, and paths rejected as duplicate, invalid or
    /// unsupported.
    pub fn failed_entries(&self) -> impl Iterator<Item = &str> {
        self.failed.iter().map(String::as_str)
    }

    /// Opens the entry at `path`.
    ///
    /// A duplicate or malformed path is rejected and recorded, so the pack
    /// can no longer be sealed.
    pub fn open(&mut self, path: &str) -> PackResult<OpenEntry<'_, T>> {
        if let ContainerState::EntryOpen { path: open } = &self.state {
            return Err(PackError::EntryAlreadyOpen {
                open: open.clone(),
                requested: path.to_string(),
            });
        }
        if let Err(e) = validate_entry_path(path) {
            self.reject(path);
            return Err(e);
        }
        if self.paths.contains(path) {
            self.reject(path);
            return Err(PackError::DuplicatePath {
                path: path.to_string(),
            });
        }

        self.paths.insert(path.to_string());
        self.state = ContainerState::EntryOpen {
            path: path.to_string(),
        };
        Ok(OpenEntry::new(self, Entry::new(path.to_string())))
    }

    /// Opens `path`, runs `write` against the entry and commits it if `write`
    /// succeeds. Any error, or a panic inside `write`, discards the entry.
    pub fn with_entry<R>(
        &mut self,
        path: &str,
        write: impl FnOnce(&mut OpenEntry<'_, T>) -> PackResult<R>,
    ) -> PackResult<R> {
        let mut entry = self.open(path)?;
        match write(&mut entry) {
            Ok(result) => {
                entry.commit()?;
                Ok(result)
            }
            Err(e) => {
                entry.discard();
                Err(e.at(path))
            }
        }
    }

    /// Marks `path` as a fatal failure of this build without opening it.
    pub(crate) fn reject(&mut self, path: &str) {
        warn!("Rejected entry {}", path);
        self.failed.insert(path.to_string());
    }

    /// Seals the target. Fails while an entry is open or if any path is
    /// still recorded as failed.
    pub fn finish(self) -> PackResult<T::Output> {
        if let ContainerState::EntryOpen { path } = self.state {
            return Err(PackError::IncompleteBuild { failed: vec![path] });
        }
        if !self.failed.is_empty() {
            return Err(PackError::IncompleteBuild {
                failed: self.failed.into_iter().collect(),
            });
        }

        let count = self.paths.len();
        let output = self.target.finish()?;
        info!("Pack finished with {} entries", count);
        Ok(output)
    }

    fn commit(&mut self, entry: Entry) -> PackResult<()> {
        let (path, bytes) = entry.into_parts();
        self.state = ContainerState::Idle;

        match self.target.commit(&path, &bytes) {
            Ok(()) => {
                debug!("Committed {} ({} bytes)", path, bytes.len());
                self.failed.remove(&path);
                Ok(())
            }
            Err(e) => {
                self.forget(&path);
                Err(e.at(&path))
            }
        }
    }

    fn discard(&mut self, entry: Entry) {
        let (path, _) = entry.into_parts();
        self.state = ContainerState::Idle;
        self.forget(&path);
    }

    /// Releases the path of a discarded entry and marks the pack incomplete.
    fn forget(&mut self, path: &str) {
        warn!("Discarded entry {}", path);
        self.paths.remove(path);
        self.failed.insert(path.to_string());
    }
}
