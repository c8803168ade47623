pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::container::{
    archive_sha1, sha1_hex, Container, DirectoryTarget, MemoryTarget, OpenEntry, PackTarget,
    ZipTarget,
};
pub use crate::core::encode::{to_json, Document, TextureSidecar};
pub use crate::core::error::{PackError, PackResult, Violation};
pub use crate::core::key::Key;
pub use crate::core::paths::AssetKind;
pub use crate::core::pipeline::ResourcePackWriter;
pub use crate::core::settings::{ArchiveCompression, WriterSettings};
pub use crate::core::writer::{Primitive, StructuredWriter};

/// Installs a `tracing` subscriber filtered by `RUST_LOG`
/// (default `info,packwriter=debug`). Later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,packwriter=debug")),
        )
        .try_init();

    tracing::debug!("packwriter logging initialised");
}
