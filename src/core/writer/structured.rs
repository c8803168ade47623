use std::io::{self, Write};

use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use super::state::{Scope, ScopeStack, Slot};
use super::value::Primitive;
use crate::core::error::PackResult;

/// Nesting-aware JSON builder for one document.
///
/// Calls are checked against a scope stack before any byte is produced, so an
/// illegal call fails with [`PackError::Structural`](crate::core::error::PackError::Structural)
/// and leaves the output untouched by that call. Keys are held until their
/// value arrives and are emitted in call order.
///
/// Punctuation and numbers go through a [`serde_json::ser::Formatter`]; the
/// default [`CompactFormatter`] produces the canonical text, [`PrettyFormatter`]
/// only adds whitespace.
pub struct StructuredWriter<W, F = CompactFormatter> {
    out: W,
    formatter: F,
    state: ScopeStack,
}

impl<W: Write> StructuredWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_formatter(out, CompactFormatter)
    }
}

impl<W: Write> StructuredWriter<W, PrettyFormatter<'static>> {
    pub fn pretty(out: W) -> Self {
        Self::with_formatter(out, PrettyFormatter::new())
    }
}

impl<W: Write, F: Formatter> StructuredWriter<W, F> {
    pub fn with_formatter(out: W, formatter: F) -> Self {
        Self {
            out,
            formatter,
            state: ScopeStack::default(),
        }
    }

    /// Number of scopes currently open.
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    pub fn start_object(&mut self) -> PackResult<&mut Self> {
        self.start(Scope::Object)
    }

    pub fn end_object(&mut self) -> PackResult<&mut Self> {
        self.end(Scope::Object)
    }

    pub fn start_array(&mut self) -> PackResult<&mut Self> {
        self.start(Scope::Array)
    }

    pub fn end_array(&mut self) -> PackResult<&mut Self> {
        self.end(Scope::Array)
    }

    pub fn key(&mut self, name: &str) -> PackResult<&mut Self> {
        self.state.key(name)?;
        Ok(self)
    }

    pub fn value<'v>(&mut self, value: impl Into<Primitive<'v>>) -> PackResult<&mut Self> {
        let value = value.into();
        value.check_finite()?;
        let slot = self.state.begin_value()?;
        self.open_slot(&slot)?;
        self.write_primitive(value)?;
        self.close_slot(&slot)?;
        self.state.end_value();
        Ok(self)
    }

    /// Closes the document and hands back the destination.
    ///
    /// Fails if a scope is still open or nothing was written.
    pub fn finish(mut self) -> PackResult<W> {
        self.state.finish()?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn start(&mut self, scope: Scope) -> PackResult<&mut Self> {
        let slot = self.state.begin_value()?;
        self.open_slot(&slot)?;
        match scope {
            Scope::Object => self.formatter.begin_object(&mut self.out)?,
            Scope::Array => self.formatter.begin_array(&mut self.out)?,
        }
        self.state.push(scope);
        Ok(self)
    }

    fn end(&mut self, scope: Scope) -> PackResult<&mut Self> {
        let parent = self.state.pop(scope)?;
        match scope {
            Scope::Object => self.formatter.end_object(&mut self.out)?,
            Scope::Array => self.formatter.end_array(&mut self.out)?,
        }
        match parent {
            Some(Scope::Object) => self.formatter.end_object_value(&mut self.out)?,
            Some(Scope::Array) => self.formatter.end_array_value(&mut self.out)?,
            None => {}
        }
        Ok(self)
    }

    fn open_slot(&mut self, slot: &Slot) -> io::Result<()> {
        match slot {
            Slot::Root => Ok(()),
            Slot::Element { first } => self.formatter.begin_array_value(&mut self.out, *first),
            Slot::Member { first, key } => {
                self.formatter.begin_object_key(&mut self.out, *first)?;
                self.write_str(key)?;
                self.formatter.end_object_key(&mut self.out)?;
                self.formatter.begin_object_value(&mut self.out)
            }
        }
    }

    fn close_slot(&mut self, slot: &Slot) -> io::Result<()> {
        match slot {
            Slot::Root => Ok(()),
            Slot::Element { .. } => self.formatter.end_array_value(&mut self.out),
            Slot::Member { .. } => self.formatter.end_object_value(&mut self.out),
        }
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, s).map_err(io::Error::from)
    }

    fn write_primitive(&mut self, value: Primitive<'_>) -> io::Result<()> {
        match value {
            Primitive::Str(v) => self.write_str(v),
            Primitive::Bool(v) => self.formatter.write_bool(&mut self.out, v),
            Primitive::I32(v) => self.formatter.write_i32(&mut self.out, v),
            Primitive::I64(v) => self.formatter.write_i64(&mut self.out, v),
            Primitive::F32(v) => self.formatter.write_f32(&mut self.out, v),
            Primitive::F64(v) => self.formatter.write_f64(&mut self.out, v),
            Primitive::Strs(vs) => self.inline_array(vs, |w, v| w.write_str(v)),
            Primitive::Bools(vs) => {
                self.inline_array(vs, |w, v| w.formatter.write_bool(&mut w.out, *v))
            }
            Primitive::I32s(vs) => {
                self.inline_array(vs, |w, v| w.formatter.write_i32(&mut w.out, *v))
            }
            Primitive::I64s(vs) => {
                self.inline_array(vs, |w, v| w.formatter.write_i64(&mut w.out, *v))
            }
            Primitive::F32s(vs) => {
                self.inline_array(vs, |w, v| w.formatter.write_f32(&mut w.out, *v))
            }
            Primitive::F64s(vs) => {
                self.inline_array(vs, |w, v| w.formatter.write_f64(&mut w.out, *v))
            }
        }
    }

    fn inline_array<T>(
        &mut self,
        items: &[T],
        mut write_item: impl FnMut(&mut Self, &T) -> io::Result<()>,
    ) -> io::Result<()> {
        self.formatter.begin_array(&mut self.out)?;
        for (i, item) in items.iter().enumerate() {
            self.formatter.begin_array_value(&mut self.out, i == 0)?;
            write_item(self, item)?;
            self.formatter.end_array_value(&mut self.out)?;
        }
        self.formatter.end_array(&mut self.out)
    }
}
