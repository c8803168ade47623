use crate::core::key::Key;
use crate::core::rules::BITMAP_FONT_HEIGHT;

/// A font definition: an ordered list of glyph providers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    pub providers: Vec<FontProvider>,
}

impl Font {
    pub fn new(providers: Vec<FontProvider>) -> Self {
        Self { providers }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FontProvider {
    BitMap(BitMapFont),
    LegacyUnicode(LegacyUnicodeFont),
    TrueType(TrueTypeFont),
}

/// Glyphs cut from a bitmap texture.
#[derive(Debug, Clone, PartialEq)]
pub struct BitMapFont {
    pub file: Key,
    pub height: i32,
    pub ascent: i32,
    /// One string per texture row.
    pub characters: Vec<String>,
}

impl BitMapFont {
    pub fn new(file: Key, ascent: i32, characters: Vec<String>) -> Self {
        Self {
            file,
            height: BITMAP_FONT_HEIGHT,
            ascent,
            characters,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyUnicodeFont {
    pub sizes: Key,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrueTypeFont {
    pub file: Key,
    pub shift: [f32; 2],
    pub size: f32,
    pub oversample: f32,
    pub skip: Vec<String>,
}
