use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use sha1::{Digest, Sha1};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::target::PackTarget;
use crate::core::error::{PackError, PackResult};
use crate::core::settings::{ArchiveCompression, WriterSettings};

/// Writes entries as members of a zip archive.
///
/// Member timestamps are fixed so identical packs produce identical bytes
/// (and therefore identical SHA-1 digests). Each member is flushed to `W`
/// when committed; a failure to write the central directory surfaces from
/// [`finish`](PackTarget::finish) as an [`PackError::Archive`] with an
/// empty path.
pub struct ZipTarget<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> ZipTarget<W> {
    pub fn new(inner: W, settings: &WriterSettings) -> Self {
        let method = match settings.compression {
            ArchiveCompression::Stored => CompressionMethod::Stored,
            ArchiveCompression::Deflated => CompressionMethod::Deflated,
        };
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .compression_level(settings.compression_level)
            .last_modified_time(DateTime::default());

        Self {
            zip: ZipWriter::new(inner),
            options,
        }
    }
}

impl ZipTarget<BufWriter<File>> {
    /// Creates (or truncates) the archive file at `path`.
    pub fn create(path: &Path, settings: &WriterSettings) -> PackResult<Self> {
        let file = File::create(path).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), settings))
    }
}

impl<W: Write + Seek> PackTarget for ZipTarget<W> {
    type Output = W;

    fn commit(&mut self, path: &str, bytes: &[u8]) -> PackResult<()> {
        self.zip
            .start_file(path, self.options)
            .map_err(|source| PackError::Archive {
                path: path.to_string(),
                source,
            })?;
        // Flushing pushes the member through any buffering in `W`, so a
        // failing device is reported against this entry, not a later one.
        if let Err(source) = self.zip.write_all(bytes).and_then(|()| self.zip.flush()) {
            // Drop the half-written member so it never shows up in the archive.
            let _ = self.zip.abort_file();
            return Err(PackError::Io {
                path: path.into(),
                source,
            });
        }
        debug!("Added {} to archive ({} bytes)", path, bytes.len());
        Ok(())
    }

    fn finish(self) -> PackResult<W> {
        let mut inner = self.zip.finish().map_err(|source| PackError::Archive {
            path: String::new(),
            source,
        })?;
        inner.flush()?;
        Ok(inner)
    }
}

/// Hex-encoded SHA-1 of a built pack, the digest servers advertise to clients.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// SHA-1 of the archive file at `path`.
pub fn archive_sha1(path: &Path) -> PackResult<String> {
    let bytes = std::fs::read(path).map_err(|source| PackError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sha1_hex(&bytes))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, SeekFrom};

    use super::*;

    /// In-memory device that refuses writes past `limit` bytes.
    struct FullDevice {
        inner: Cursor<Vec<u8>>,
        limit: u64,
    }

    impl Write for FullDevice {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.inner.position() + buf.len() as u64 > self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
            }
            self.inner.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for FullDevice {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    fn build(settings: &WriterSettings) -> Vec<u8> {
        let mut target = ZipTarget::new(Cursor::new(Vec::new()), settings);
        target.commit("pack.mcmeta", b"{\"pack\":{}}").unwrap();
        target.commit("assets/ns/textures/a.png", &[1, 2, 3]).unwrap();
        target.finish().unwrap().into_inner()
    }

    #[test]
    fn members_can_be_read_back() {
        let bytes = build(&WriterSettings::default());
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut meta = String::new();
        archive
            .by_name("pack.mcmeta")
            .unwrap()
            .read_to_string(&mut meta)
            .unwrap();
        assert_eq!(meta, "{\"pack\":{}}");

        let mut png = Vec::new();
        archive
            .by_name("assets/ns/textures/a.png")
            .unwrap()
            .read_to_end(&mut png)
            .unwrap();
        assert_eq!(png, vec![1, 2, 3]);
    }

    #[test]
    fn buffered_device_failure_is_reported_on_the_member_that_caused_it() {
        let settings = WriterSettings {
            compression: ArchiveCompression::Stored,
            ..WriterSettings::default()
        };
        let device = FullDevice {
            inner: Cursor::new(Vec::new()),
            limit: 1024,
        };
        let mut target = ZipTarget::new(BufWriter::new(device), &settings);
        target.commit("pack.mcmeta", b"{}").unwrap();

        let err = target
            .commit("assets/ns/textures/big.png", &[0u8; 4096])
            .unwrap_err();
        match err {
            PackError::Io { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("assets/ns/textures/big.png"))
            }
            other => panic!("expected io error, got {other}"),
        }
    }

    #[test]
    fn identical_packs_hash_identically() {
        let settings = WriterSettings {
            compression: ArchiveCompression::Stored,
            ..WriterSettings::default()
        };
        let first = build(&settings);
        let second = build(&settings);
        assert_eq!(sha1_hex(&first), sha1_hex(&second));
        assert_eq!(sha1_hex(&first).len(), 40);
    }

    #[test]
    fn sha1_of_known_input() {
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn archive_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack.zip");
        let mut target = ZipTarget::create(&path, &WriterSettings::default()).unwrap();
        target.commit("pack.mcmeta", b"{}").unwrap();
        target.finish().unwrap();

        let digest = archive_sha1(&path).unwrap();
        assert_eq!(digest, sha1_hex(&std::fs::read(&path).unwrap()));
        let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }
}
