use std::collections::BTreeMap;

/// Translations of one locale, translation key to text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Language {
    pub translations: BTreeMap<String, String>,
}

impl Language {
    pub fn new(translations: BTreeMap<String, String>) -> Self {
        Self { translations }
    }
}
