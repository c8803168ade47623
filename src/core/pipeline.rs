// ─── Resource Pack Writer ───
// Derives each asset's path, opens one entry at a time and drives the
// matching encoder into it.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::container::{Container, DirectoryTarget, MemoryTarget, PackTarget, ZipTarget};
use crate::core::encode::{encode, Document, TextureSidecar};
use crate::core::error::{PackError, PackResult};
use crate::core::key::Key;
use crate::core::model::{BlockState, Font, Language, Model, PackMeta, SoundRegistry, Texture};
use crate::core::paths::{self, AssetKind, PACK_META};
use crate::core::settings::WriterSettings;
use crate::core::writer::StructuredWriter;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Writes domain assets into a [`Container`].
///
/// Synchronous and single-threaded: every call opens, fills and closes its
/// entries before returning. The first error is returned as-is; the pack can
/// only be sealed through [`finish`](Self::finish), which reports entries
/// that never made it in.
pub struct ResourcePackWriter<T: PackTarget> {
    container: Container<T>,
    settings: WriterSettings,
}

impl ResourcePackWriter<MemoryTarget> {
    pub fn in_memory(settings: WriterSettings) -> Self {
        Self::new(MemoryTarget::new(), settings)
    }
}

impl ResourcePackWriter<DirectoryTarget> {
    pub fn directory(root: impl Into<PathBuf>, settings: WriterSettings) -> Self {
        Self::new(DirectoryTarget::new(root), settings)
    }
}

impl ResourcePackWriter<ZipTarget<BufWriter<File>>> {
    pub fn zip_file(path: &Path, settings: WriterSettings) -> PackResult<Self> {
        let target = ZipTarget::create(path, &settings)?;
        Ok(Self::new(target, settings))
    }
}

impl ResourcePackWriter<ZipTarget<Cursor<Vec<u8>>>> {
    pub fn zip_in_memory(settings: WriterSettings) -> Self {
        let target = ZipTarget::new(Cursor::new(Vec::new()), &settings);
        Self::new(target, settings)
    }
}

impl<T: PackTarget> ResourcePackWriter<T> {
    pub fn new(target: T, settings: WriterSettings) -> Self {
        Self {
            container: Container::new(target),
            settings,
        }
    }

    pub fn container(&self) -> &Container<T> {
        &self.container
    }

    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    /// `pack.mcmeta`
    pub fn meta(&mut self, meta: &PackMeta) -> PackResult<()> {
        self.document(PACK_META, meta)
    }

    pub fn font(&mut self, key: &Key, font: &Font) -> PackResult<()> {
        let path = self.asset_path(AssetKind::Font, key)?;
        self.document(&path, font)
    }

    pub fn language(&mut self, key: &Key, language: &Language) -> PackResult<()> {
        let path = self.asset_path(AssetKind::Language, key)?;
        self.document(&path, language)
    }

    pub fn model(&mut self, key: &Key, model: &Model) -> PackResult<()> {
        let path = self.asset_path(AssetKind::Model, key)?;
        self.document(&path, model)
    }

    /// Block state files are not produced yet: nothing is written.
    // TODO: decide the variants/multipart output format before encoding block states.
    pub fn block_state(&mut self, key: &Key, _state: &BlockState) -> PackResult<()> {
        warn!("Block state {} skipped: block state encoding is not supported", key);
        Ok(())
    }

    /// `assets/<namespace>/sounds.json`
    pub fn sounds(&mut self, namespace: &str, registry: &SoundRegistry) -> PackResult<()> {
        let path = paths::sound_registry(namespace);
        self.document(&path, registry)
    }

    /// Raw OGG data of a sound, `assets/<ns>/sounds/<value>.ogg`.
    pub fn sound_file(&mut self, key: &Key, ogg: &[u8]) -> PackResult<()> {
        let path = self.asset_path(AssetKind::SoundFile, key)?;
        self.file(&path, ogg)
    }

    /// Writes the PNG and, only when the texture carries metadata, the
    /// `.png.mcmeta` sidecar.
    pub fn texture(&mut self, key: &Key, texture: &Texture) -> PackResult<()> {
        let path = self.asset_path(AssetKind::Texture, key)?;
        if !texture.data.starts_with(&PNG_SIGNATURE) {
            self.container.reject(&path);
            return Err(PackError::UnsupportedVariant {
                kind: "texture",
                variant: format!("non-PNG image data for {}", key),
            });
        }

        self.file(&path, &texture.data)?;

        if texture.has_metadata() {
            let sidecar = self.asset_path(AssetKind::TextureMeta, key)?;
            self.document(&sidecar, &TextureSidecar(texture))?;
        }
        Ok(())
    }

    /// Arbitrary bytes at `path`.
    pub fn file(&mut self, path: &str, bytes: &[u8]) -> PackResult<()> {
        self.container.with_entry(path, |entry| {
            entry.write_all(bytes)?;
            Ok(())
        })?;
        debug!("Wrote file {}", path);
        Ok(())
    }

    /// Seals the container and returns the target's output. Fails with
    /// [`PackError::IncompleteBuild`] if any asset was rejected or lost.
    pub fn finish(self) -> PackResult<T::Output> {
        self.container.finish()
    }

    fn document<D: Document + ?Sized>(&mut self, path: &str, doc: &D) -> PackResult<()> {
        let pretty = self.settings.pretty;
        self.container.with_entry(path, |entry| {
            if pretty {
                encode(doc, StructuredWriter::pretty(entry))?;
            } else {
                encode(doc, StructuredWriter::new(entry))?;
            }
            Ok(())
        })?;
        debug!("Wrote document {}", path);
        Ok(())
    }

    /// Entry path of `key`; a key that maps to no path is recorded as a
    /// failed asset.
    fn asset_path(&mut self, kind: AssetKind, key: &Key) -> PackResult<String> {
        match kind.path(key) {
            Ok(path) => Ok(path),
            Err(e) => {
                self.container.reject(&key.to_string());
                Err(e)
            }
        }
    }
}
