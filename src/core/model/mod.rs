mod font;
mod lang;
mod models;
mod pack;
mod sound;
mod texture;

pub use font::{BitMapFont, Font, FontProvider, LegacyUnicodeFont, TrueTypeFont};
pub use lang::Language;
pub use models::{
    Axis, BlockModel, BlockState, BlockTexture, CubeFace, DisplayType, Element, ElementFace,
    ElementRotation, GuiLight, ItemModel, ItemOverride, ItemPredicate, ItemTexture, Model,
    ModelDisplay, ModelProperties,
};
pub use pack::{LanguageEntry, PackFormat, PackMeta};
pub use sound::{Sound, SoundEvent, SoundRegistry, SoundType};
pub use texture::{AnimationFrame, AnimationMeta, Texture, TextureMeta, VillagerMeta};
