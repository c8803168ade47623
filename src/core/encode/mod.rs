// ─── Encoders ───
// One pure mapping per asset kind from domain fields to writer calls.

mod font;
mod lang;
mod model;
mod pack;
mod sound;
mod texture;

use std::io::Write;

use serde_json::ser::Formatter;

pub use texture::TextureSidecar;

use crate::core::error::PackResult;
use crate::core::rules::{self, RuleTarget, RuleValue};
use crate::core::writer::StructuredWriter;

/// An asset that serializes to exactly one JSON document.
pub trait Document {
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()>;
}

/// Drives `doc` through `writer` and closes the document, returning the sink.
pub fn encode<D, W, F>(doc: &D, mut writer: StructuredWriter<W, F>) -> PackResult<W>
where
    D: Document + ?Sized,
    W: Write,
    F: Formatter,
{
    doc.write(&mut writer)?;
    writer.finish()
}

/// Encodes `doc` into its canonical compact text.
pub fn to_json<D: Document + ?Sized>(doc: &D) -> PackResult<String> {
    let bytes = encode(doc, StructuredWriter::new(Vec::new()))?;
    // The writer only emits UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `key: value` unless `value` equals the declared default of `field`.
fn write_unless_default<W: Write, F: Formatter>(
    w: &mut StructuredWriter<W, F>,
    target: RuleTarget,
    field: &str,
    key: &str,
    value: impl Into<RuleValue>,
) -> PackResult<()> {
    let value = value.into();
    if rules::should_write(target, field, value) {
        w.key(key)?.value(value)?;
    }
    Ok(())
}
