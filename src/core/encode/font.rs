use std::io::Write;

use serde_json::ser::Formatter;

use super::{write_unless_default, Document};
use crate::core::error::PackResult;
use crate::core::model::{BitMapFont, Font, FontProvider, LegacyUnicodeFont, TrueTypeFont};
use crate::core::rules::RuleTarget;
use crate::core::writer::StructuredWriter;

impl Document for Font {
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()> {
        w.start_object()?.key("providers")?.start_array()?;
        for provider in &self.providers {
            w.start_object()?;
            match provider {
                FontProvider::BitMap(font) => bitmap(font, w)?,
                FontProvider::LegacyUnicode(font) => legacy_unicode(font, w)?,
                FontProvider::TrueType(font) => true_type(font, w)?,
            }
            w.end_object()?;
        }
        w.end_array()?.end_object()?;
        Ok(())
    }
}

fn bitmap<W: Write, F: Formatter>(
    font: &BitMapFont,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.key("type")?
        .value("bitmap")?
        .key("file")?
        .value(&font.file.to_string())?;
    write_unless_default(w, RuleTarget::BitMapFont, "height", "height", font.height)?;
    w.key("ascent")?
        .value(font.ascent)?
        .key("chars")?
        .value(&font.characters)?;
    Ok(())
}

fn legacy_unicode<W: Write, F: Formatter>(
    font: &LegacyUnicodeFont,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.key("type")?
        .value("legacy_unicode")?
        .key("sizes")?
        .value(&font.sizes.to_string())?
        .key("template")?
        .value(&font.template)?;
    Ok(())
}

fn true_type<W: Write, F: Formatter>(
    font: &TrueTypeFont,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.key("type")?
        .value("ttf")?
        .key("file")?
        .value(&font.file.to_string())?
        .key("shift")?
        .value(&font.shift)?
        .key("size")?
        .value(font.size)?
        .key("oversample")?
        .value(font.oversample)?
        .key("skip")?
        .value(&font.skip)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::to_json;
    use super::*;
    use crate::core::key::Key;

    fn key(raw: &str) -> Key {
        Key::parse(raw).unwrap()
    }

    #[test]
    fn bitmap_with_default_height_omits_height() {
        let font = Font::new(vec![FontProvider::BitMap(BitMapFont::new(
            key("creative:font/glyphs.png"),
            7,
            vec!["ab".into(), "cd".into()],
        ))]);
        assert_eq!(
            to_json(&font).unwrap(),
            r#"{"providers":[{"type":"bitmap","file":"creative:font/glyphs.png","ascent":7,"chars":["ab","cd"]}]}"#
        );
    }

    #[test]
    fn bitmap_with_custom_height_writes_it() {
        let mut bitmap = BitMapFont::new(key("creative:font/big.png"), 12, vec!["x".into()]);
        bitmap.height = 16;
        let json = to_json(&Font::new(vec![FontProvider::BitMap(bitmap)])).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["providers"][0]["height"], 16);
    }

    #[test]
    fn every_provider_kind_is_written_in_order() {
        let font = Font::new(vec![
            FontProvider::LegacyUnicode(LegacyUnicodeFont {
                sizes: key("minecraft:font/glyph_sizes.bin"),
                template: "minecraft:font/unicode_page_%s.png".into(),
            }),
            FontProvider::TrueType(TrueTypeFont {
                file: key("creative:font/sans.ttf"),
                shift: [0.5, -1.0],
                size: 11.0,
                oversample: 2.0,
                skip: vec!["ab".into()],
            }),
        ]);
        assert_eq!(
            to_json(&font).unwrap(),
            concat!(
                r#"{"providers":["#,
                r#"{"type":"legacy_unicode","sizes":"minecraft:font/glyph_sizes.bin","template":"minecraft:font/unicode_page_%s.png"},"#,
                r#"{"type":"ttf","file":"creative:font/sans.ttf","shift":[0.5,-1.0],"size":11.0,"oversample":2.0,"skip":["ab"]}"#,
                r#"]}"#
            )
        );
    }
}
