use crate::core::error::Violation;

/// A scalar, or a homogeneous inline array of scalars, accepted by
/// [`StructuredWriter::value`](super::StructuredWriter::value).
///
/// Inline arrays exist for compact coordinate triples (`from`, `to`,
/// `rotation`, ...) so encoders do not need a start/end pair for each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Str(&'a str),
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Strs(&'a [String]),
    Bools(&'a [bool]),
    I32s(&'a [i32]),
    I64s(&'a [i64]),
    F32s(&'a [f32]),
    F64s(&'a [f64]),
}

impl Primitive<'_> {
    /// JSON has no representation for NaN or infinities.
    pub(crate) fn check_finite(&self) -> Result<(), Violation> {
        let bad = match *self {
            Primitive::F32(v) => (!v.is_finite()).then_some(v as f64),
            Primitive::F64(v) => (!v.is_finite()).then_some(v),
            Primitive::F32s(vs) => vs.iter().find(|v| !v.is_finite()).map(|v| *v as f64),
            Primitive::F64s(vs) => vs.iter().copied().find(|v| !v.is_finite()),
            _ => None,
        };
        match bad {
            Some(v) => Err(Violation::NonFiniteNumber(v)),
            None => Ok(()),
        }
    }
}

impl<'a> From<&'a str> for Primitive<'a> {
    fn from(v: &'a str) -> Self {
        Primitive::Str(v)
    }
}

impl<'a> From<&'a String> for Primitive<'a> {
    fn from(v: &'a String) -> Self {
        Primitive::Str(v)
    }
}

impl From<bool> for Primitive<'_> {
    fn from(v: bool) -> Self {
        Primitive::Bool(v)
    }
}

impl From<i32> for Primitive<'_> {
    fn from(v: i32) -> Self {
        Primitive::I32(v)
    }
}

impl From<i64> for Primitive<'_> {
    fn from(v: i64) -> Self {
        Primitive::I64(v)
    }
}

impl From<u32> for Primitive<'_> {
    fn from(v: u32) -> Self {
        Primitive::I64(v as i64)
    }
}

impl From<f32> for Primitive<'_> {
    fn from(v: f32) -> Self {
        Primitive::F32(v)
    }
}

impl From<f64> for Primitive<'_> {
    fn from(v: f64) -> Self {
        Primitive::F64(v)
    }
}

impl<'a> From<&'a [String]> for Primitive<'a> {
    fn from(v: &'a [String]) -> Self {
        Primitive::Strs(v)
    }
}

impl<'a> From<&'a Vec<String>> for Primitive<'a> {
    fn from(v: &'a Vec<String>) -> Self {
        Primitive::Strs(v)
    }
}

impl<'a> From<&'a [bool]> for Primitive<'a> {
    fn from(v: &'a [bool]) -> Self {
        Primitive::Bools(v)
    }
}

impl<'a> From<&'a [i32]> for Primitive<'a> {
    fn from(v: &'a [i32]) -> Self {
        Primitive::I32s(v)
    }
}

impl<'a> From<&'a Vec<i32>> for Primitive<'a> {
    fn from(v: &'a Vec<i32>) -> Self {
        Primitive::I32s(v)
    }
}

impl<'a> From<&'a [i64]> for Primitive<'a> {
    fn from(v: &'a [i64]) -> Self {
        Primitive::I64s(v)
    }
}

impl<'a> From<&'a [f32]> for Primitive<'a> {
    fn from(v: &'a [f32]) -> Self {
        Primitive::F32s(v)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for Primitive<'a> {
    fn from(v: &'a [f32; N]) -> Self {
        Primitive::F32s(v)
    }
}

impl<'a, const N: usize> From<&'a [i32; N]> for Primitive<'a> {
    fn from(v: &'a [i32; N]) -> Self {
        Primitive::I32s(v)
    }
}

impl<'a> From<&'a [f64]> for Primitive<'a> {
    fn from(v: &'a [f64]) -> Self {
        Primitive::F64s(v)
    }
}
