use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use super::target::PackTarget;
use crate::core::error::{PackError, PackResult};

/// Writes entries as a loose directory tree under `root`.
///
/// Each entry is written to a uniquely named temp file next to its final
/// location and renamed into place, so a failed write never leaves a
/// truncated file behind.
#[derive(Debug)]
pub struct DirectoryTarget {
    root: PathBuf,
}

impl DirectoryTarget {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PackTarget for DirectoryTarget {
    type Output = PathBuf;

    fn commit(&mut self, path: &str, bytes: &[u8]) -> PackResult<()> {
        let dest = self.root.join(path);
        let parent = dest.parent().unwrap_or(&self.root).to_path_buf();
        fs::create_dir_all(&parent).map_err(|source| PackError::Io {
            path: parent.clone(),
            source,
        })?;

        let file_name = dest
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let temp = parent.join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) = write_file(&temp, bytes) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        fs::rename(&temp, &dest).map_err(|source| {
            let _ = fs::remove_file(&temp);
            PackError::Io {
                path: dest.clone(),
                source,
            }
        })?;

        debug!("Wrote {:?} ({} bytes)", dest, bytes.len());
        Ok(())
    }

    fn finish(self) -> PackResult<PathBuf> {
        Ok(self.root)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> PackResult<()> {
    let io_err = |source| PackError::Io {
        path: path.to_path_buf(),
        source,
    };
    // The handle is closed before the caller renames the file.
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_creates_parents_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut target = DirectoryTarget::new(dir.path());
        target
            .commit("assets/ns/lang/en_us.json", b"{}")
            .unwrap();

        let lang_dir = dir.path().join("assets/ns/lang");
        assert_eq!(fs::read(lang_dir.join("en_us.json")).unwrap(), b"{}");
        let names: Vec<_> = fs::read_dir(&lang_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
        assert_eq!(target.finish().unwrap(), dir.path());
    }
}
