use std::collections::BTreeMap;

/// Contents of `pack.mcmeta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackMeta {
    pub format: PackFormat,
    pub description: String,
    /// Locales the pack adds, keyed by locale code (`en_us`).
    pub languages: BTreeMap<String, LanguageEntry>,
}

impl PackMeta {
    pub fn new(format: PackFormat, description: impl Into<String>) -> Self {
        Self {
            format,
            description: description.into(),
            languages: BTreeMap::new(),
        }
    }
}

/// Supported pack format versions, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackFormat {
    pub min: i32,
    pub max: i32,
}

impl PackFormat {
    pub fn single(format: i32) -> Self {
        Self {
            min: format,
            max: format,
        }
    }

    pub fn range(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub region: String,
    pub bidirectional: bool,
}
