// ─── Encoding Rules ───
// Declared defaults per asset field. A field equal to its default is left out
// of the output; consumers read its absence as "use the engine default".

use crate::core::writer::Primitive;

pub const SOUND_VOLUME: f32 = 1.0;
pub const SOUND_PITCH: f32 = 1.0;
pub const SOUND_WEIGHT: i32 = 1;
pub const SOUND_STREAM: bool = false;
pub const SOUND_ATTENUATION_DISTANCE: i32 = 0;
pub const SOUND_PRELOAD: bool = false;
pub const SOUND_TYPE: &str = "sound";
pub const ELEMENT_SHADE: bool = true;
pub const ELEMENT_ROTATION_RESCALE: bool = false;
pub const ELEMENT_FACE_ROTATION: i32 = 0;
pub const BLOCK_MODEL_AMBIENT_OCCLUSION: bool = true;
pub const ITEM_MODEL_GUI_LIGHT: &str = "side";
pub const BITMAP_FONT_HEIGHT: i32 = 8;

/// Owner of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    Sound,
    Element,
    ElementRotation,
    ElementFace,
    BlockModel,
    ItemModel,
    BitMapFont,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Name(&'static str),
}

/// How a field value is compared against its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Same kind and same value.
    Exact,
    /// Numeric equality, integers and floats compare by value.
    Numeric,
}

#[derive(Debug, Clone, Copy)]
pub struct EncodingRule {
    pub target: RuleTarget,
    pub field: &'static str,
    pub default: RuleValue,
    pub comparison: Comparison,
}

const fn rule(
    target: RuleTarget,
    field: &'static str,
    default: RuleValue,
    comparison: Comparison,
) -> EncodingRule {
    EncodingRule {
        target,
        field,
        default,
        comparison,
    }
}

pub static ENCODING_RULES: &[EncodingRule] = &[
    rule(RuleTarget::Sound, "volume", RuleValue::Float(SOUND_VOLUME), Comparison::Numeric),
    rule(RuleTarget::Sound, "pitch", RuleValue::Float(SOUND_PITCH), Comparison::Numeric),
    rule(RuleTarget::Sound, "weight", RuleValue::Int(SOUND_WEIGHT as i64), Comparison::Numeric),
    rule(RuleTarget::Sound, "stream", RuleValue::Bool(SOUND_STREAM), Comparison::Exact),
    rule(
        RuleTarget::Sound,
        "attenuation_distance",
        RuleValue::Int(SOUND_ATTENUATION_DISTANCE as i64),
        Comparison::Numeric,
    ),
    rule(RuleTarget::Sound, "preload", RuleValue::Bool(SOUND_PRELOAD), Comparison::Exact),
    rule(RuleTarget::Sound, "type", RuleValue::Name(SOUND_TYPE), Comparison::Exact),
    rule(RuleTarget::Element, "shade", RuleValue::Bool(ELEMENT_SHADE), Comparison::Exact),
    rule(
        RuleTarget::ElementRotation,
        "rescale",
        RuleValue::Bool(ELEMENT_ROTATION_RESCALE),
        Comparison::Exact,
    ),
    rule(
        RuleTarget::ElementFace,
        "rotation",
        RuleValue::Int(ELEMENT_FACE_ROTATION as i64),
        Comparison::Numeric,
    ),
    rule(
        RuleTarget::BlockModel,
        "ambient_occlusion",
        RuleValue::Bool(BLOCK_MODEL_AMBIENT_OCCLUSION),
        Comparison::Exact,
    ),
    rule(
        RuleTarget::ItemModel,
        "gui_light",
        RuleValue::Name(ITEM_MODEL_GUI_LIGHT),
        Comparison::Exact,
    ),
    rule(
        RuleTarget::BitMapFont,
        "height",
        RuleValue::Int(BITMAP_FONT_HEIGHT as i64),
        Comparison::Numeric,
    ),
];

impl RuleValue {
    fn as_f64(self) -> Option<f64> {
        match self {
            RuleValue::Int(v) => Some(v as f64),
            RuleValue::Float(v) => Some(v as f64),
            RuleValue::Bool(_) | RuleValue::Name(_) => None,
        }
    }
}

impl Comparison {
    pub fn matches(self, value: RuleValue, default: RuleValue) -> bool {
        match self {
            Comparison::Exact => value == default,
            Comparison::Numeric => match (value.as_f64(), default.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => value == default,
            },
        }
    }
}

pub fn lookup(target: RuleTarget, field: &str) -> Option<&'static EncodingRule> {
    ENCODING_RULES
        .iter()
        .find(|r| r.target == target && r.field == field)
}

/// Whether `field` must be written. Fields without a declared default are
/// always written.
pub fn should_write(target: RuleTarget, field: &str, value: impl Into<RuleValue>) -> bool {
    match lookup(target, field) {
        Some(rule) => !rule.comparison.matches(value.into(), rule.default),
        None => true,
    }
}

impl From<bool> for RuleValue {
    fn from(v: bool) -> Self {
        RuleValue::Bool(v)
    }
}

impl From<i32> for RuleValue {
    fn from(v: i32) -> Self {
        RuleValue::Int(v as i64)
    }
}

impl From<f32> for RuleValue {
    fn from(v: f32) -> Self {
        RuleValue::Float(v)
    }
}

impl From<&'static str> for RuleValue {
    fn from(v: &'static str) -> Self {
        RuleValue::Name(v)
    }
}

impl From<RuleValue> for Primitive<'static> {
    fn from(v: RuleValue) -> Self {
        match v {
            RuleValue::Bool(v) => Primitive::Bool(v),
            RuleValue::Int(v) => Primitive::I64(v),
            RuleValue::Float(v) => Primitive::F32(v),
            RuleValue::Name(v) => Primitive::Str(v),
        }
    }
}
