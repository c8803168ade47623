use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the pack writer.
/// Every module returns `Result<T, PackError>`.
#[derive(Debug, Error)]
pub enum PackError {
    // ── Document structure ──────────────────────────────
    #[error("Structural violation: {0}")]
    Structural(#[from] Violation),

    // ── Container ───────────────────────────────────────
    #[error("Duplicate entry path: {path}")]
    DuplicatePath { path: String },

    #[error("Cannot open {requested}: entry {open} is still open")]
    EntryAlreadyOpen { open: String, requested: String },

    #[error("Invalid entry path: {0:?}")]
    InvalidEntryPath(String),

    #[error("Pack is incomplete, entries failed: {failed:?}")]
    IncompleteBuild { failed: Vec<String> },

    // ── Assets ──────────────────────────────────────────
    #[error("Unsupported {kind} variant: {variant}")]
    UnsupportedVariant { kind: &'static str, variant: String },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Archive ─────────────────────────────────────────
    #[error("Zip error at {path}: {source}")]
    Archive {
        path: String,
        source: zip::result::ZipError,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type PackResult<T> = Result<T, PackError>;

impl From<std::io::Error> for PackError {
    fn from(source: std::io::Error) -> Self {
        PackError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl PackError {
    /// Attach an entry path to an IO error raised without one.
    pub(crate) fn at(self, path: &str) -> Self {
        match self {
            PackError::Io { path: p, source } if p.as_os_str().is_empty() => PackError::Io {
                path: PathBuf::from(path),
                source,
            },
            other => other,
        }
    }
}

/// The writer call that broke document nesting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("key {0:?} written inside an array")]
    KeyInArray(String),

    #[error("key {0:?} written outside of any object")]
    KeyOutsideObject(String),

    #[error("key {requested:?} written while key {pending:?} has no value")]
    KeyAlreadyPending { pending: String, requested: String },

    #[error("value written in an object without a key")]
    ValueWithoutKey,

    #[error("end of {closing} while the innermost scope is {open}")]
    MismatchedEnd {
        open: &'static str,
        closing: &'static str,
    },

    #[error("end of object while key {0:?} has no value")]
    DanglingKey(String),

    #[error("end of {0} with no open scope")]
    NothingToClose(&'static str),

    #[error("document already complete")]
    DocumentComplete,

    #[error("unbalanced document: {0} scope(s) still open")]
    Unbalanced(usize),

    #[error("empty document")]
    EmptyDocument,

    #[error("non-finite number {0}")]
    NonFiniteNumber(f64),
}
