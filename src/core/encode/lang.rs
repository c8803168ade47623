use std::io::Write;

use serde_json::ser::Formatter;

use super::Document;
use crate::core::error::PackResult;
use crate::core::model::Language;
use crate::core::writer::StructuredWriter;

impl Document for Language {
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()> {
        w.start_object()?;
        for (key, text) in &self.translations {
            w.key(key)?.value(text)?;
        }
        w.end_object()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::to_json;
    use crate::core::model::Language;

    #[test]
    fn translations_are_a_flat_object() {
        let mut language = Language::default();
        language
            .translations
            .insert("item.creative.sword".into(), "Sword \"of\" Light".into());
        language
            .translations
            .insert("block.creative.ore".into(), "Ore".into());
        assert_eq!(
            to_json(&language).unwrap(),
            r#"{"block.creative.ore":"Ore","item.creative.sword":"Sword \"of\" Light"}"#
        );
    }

    #[test]
    fn empty_language_is_empty_object() {
        assert_eq!(to_json(&Language::default()).unwrap(), "{}");
    }
}
