use std::fmt;

use crate::core::error::{PackError, PackResult};

pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier, `namespace:value`.
///
/// Namespaces allow `[a-z0-9_.-]`; values additionally allow `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    namespace: String,
    value: String,
}

impl Key {
    pub fn new(namespace: impl Into<String>, value: impl Into<String>) -> PackResult<Self> {
        let namespace = namespace.into();
        let value = value.into();

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(PackError::InvalidKey(format!(
                "namespace {:?} must match [a-z0-9_.-]+",
                namespace
            )));
        }
        if value.is_empty() || !value.chars().all(|c| is_namespace_char(c) || c == '/') {
            return Err(PackError::InvalidKey(format!(
                "value {:?} must match [a-z0-9_.-/]+",
                value
            )));
        }

        Ok(Self { namespace, value })
    }

    /// Parse `namespace:value`; a bare `value` lands in the `minecraft` namespace.
    pub fn parse(raw: &str) -> PackResult<Self> {
        match raw.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::new(DEFAULT_NAMESPACE, raw),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}
