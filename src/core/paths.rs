// ─── Path Derivation ───
// Maps (namespace, value, kind) to the entry path inside a pack.

use crate::core::error::{PackError, PackResult};
use crate::core::key::Key;

pub const PACK_META: &str = "pack.mcmeta";
pub const MCMETA_EXT: &str = ".mcmeta";

const ASSETS: &str = "assets";

/// Kinds of asset that live under `assets/<namespace>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Font,
    Language,
    Model,
    SoundRegistry,
    SoundFile,
    Texture,
    TextureMeta,
}

impl AssetKind {
    /// Entry path of the asset identified by `key`.
    ///
    /// Model values must begin with `/`; the template is
    /// `assets/<ns>/models<value>.json`.
    pub fn path(self, key: &Key) -> PackResult<String> {
        let ns = key.namespace();
        let value = key.value();
        let path = match self {
            AssetKind::Font => format!("{ASSETS}/{ns}/font/{value}"),
            AssetKind::Language => format!("{ASSETS}/{ns}/lang/{value}.json"),
            AssetKind::Model => {
                if !value.starts_with('/') {
                    return Err(PackError::InvalidKey(format!(
                        "model value {:?} must start with '/'",
                        value
                    )));
                }
                format!("{ASSETS}/{ns}/models{value}.json")
            }
            AssetKind::SoundRegistry => sound_registry(ns),
            AssetKind::SoundFile => format!("{ASSETS}/{ns}/sounds/{value}.ogg"),
            AssetKind::Texture => format!("{ASSETS}/{ns}/textures/{value}.png"),
            AssetKind::TextureMeta => format!("{ASSETS}/{ns}/textures/{value}.png{MCMETA_EXT}"),
        };
        Ok(path)
    }
}

/// `assets/<namespace>/sounds.json`
pub fn sound_registry(namespace: &str) -> String {
    format!("{ASSETS}/{namespace}/sounds.json")
}

/// Checks that `path` is a relative, `/`-separated entry path that cannot
/// escape the pack root.
pub fn validate_entry_path(path: &str) -> PackResult<()> {
    let invalid = path.is_empty()
        || path.contains('\\')
        || path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
    if invalid {
        return Err(PackError::InvalidEntryPath(path.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> Key {
        Key::parse(raw).unwrap()
    }

    #[test]
    fn derives_documented_templates() {
        assert_eq!(
            AssetKind::Font.path(&key("creative:default.json")).unwrap(),
            "assets/creative/font/default.json"
        );
        assert_eq!(
            AssetKind::Language.path(&key("creative:en_us")).unwrap(),
            "assets/creative/lang/en_us.json"
        );
        assert_eq!(
            AssetKind::Model.path(&key("creative:/item/sword")).unwrap(),
            "assets/creative/models/item/sword.json"
        );
        assert_eq!(
            AssetKind::SoundRegistry.path(&key("creative:ignored")).unwrap(),
            "assets/creative/sounds.json"
        );
        assert_eq!(
            AssetKind::SoundFile.path(&key("creative:music/theme")).unwrap(),
            "assets/creative/sounds/music/theme.ogg"
        );
        assert_eq!(
            AssetKind::Texture.path(&key("creative:item/sword")).unwrap(),
            "assets/creative/textures/item/sword.png"
        );
        assert_eq!(
            AssetKind::TextureMeta.path(&key("creative:item/sword")).unwrap(),
            "assets/creative/textures/item/sword.png.mcmeta"
        );
    }

    #[test]
    fn derivation_is_deterministic_and_injective() {
        let a = key("one:item/a");
        let b = key("two:item/a");
        let c = key("one:item/b");
        for kind in [AssetKind::Language, AssetKind::Texture, AssetKind::Font] {
            assert_eq!(kind.path(&a).unwrap(), kind.path(&a).unwrap());
            assert_ne!(kind.path(&a).unwrap(), kind.path(&b).unwrap());
            assert_ne!(kind.path(&a).unwrap(), kind.path(&c).unwrap());
        }
    }

    #[test]
    fn model_value_without_slash_is_rejected() {
        assert!(matches!(
            AssetKind::Model.path(&key("creative:item/sword")),
            Err(PackError::InvalidKey(_))
        ));
    }

    #[test]
    fn entry_paths_cannot_escape_root() {
        assert!(validate_entry_path("assets/ns/lang/en_us.json").is_ok());
        assert!(validate_entry_path(PACK_META).is_ok());
        for bad in ["", "/abs", "a//b", "a/../b", "./a", "a\\b", "dir/"] {
            assert!(
                matches!(validate_entry_path(bad), Err(PackError::InvalidEntryPath(_))),
                "{bad}"
            );
        }
    }
}
