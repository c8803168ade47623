use std::io::Write;

use serde_json::ser::Formatter;

use super::Document;
use crate::core::error::PackResult;
use crate::core::model::PackMeta;
use crate::core::writer::StructuredWriter;

impl Document for PackMeta {
    // {"pack":{"format":?,"description":?},"language":{...}?}
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()> {
        w.start_object()?.key("pack")?.start_object()?.key("format")?;
        if self.format.is_single() {
            w.value(self.format.min)?;
        } else {
            w.value(&[self.format.min, self.format.max])?;
        }
        w.key("description")?.value(&self.description)?.end_object()?;

        if !self.languages.is_empty() {
            w.key("language")?.start_object()?;
            for (code, language) in &self.languages {
                w.key(code)?
                    .start_object()?
                    .key("name")?
                    .value(&language.name)?
                    .key("region")?
                    .value(&language.region)?
                    .key("bidirectional")?
                    .value(language.bidirectional)?
                    .end_object()?;
            }
            w.end_object()?;
        }

        w.end_object()?;
        Ok(())
    }
}
