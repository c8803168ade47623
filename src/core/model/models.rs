use std::collections::BTreeMap;

use crate::core::key::Key;
use crate::core::rules::{
    BLOCK_MODEL_AMBIENT_OCCLUSION, ELEMENT_FACE_ROTATION, ELEMENT_ROTATION_RESCALE, ELEMENT_SHADE,
};

/// Block or item model. New kinds are added here and in the model encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Item(ItemModel),
    Block(BlockModel),
}

impl Model {
    pub fn properties(&self) -> &ModelProperties {
        match self {
            Model::Item(model) => &model.properties,
            Model::Block(model) => &model.properties,
        }
    }
}

/// Fields shared by item and block models.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelProperties {
    pub parent: Option<Key>,
    pub display: BTreeMap<DisplayType, ModelDisplay>,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayType {
    ThirdPersonRighthand,
    ThirdPersonLefthand,
    FirstPersonRighthand,
    FirstPersonLefthand,
    Gui,
    Head,
    Ground,
    Fixed,
}

impl DisplayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayType::ThirdPersonRighthand => "thirdperson_righthand",
            DisplayType::ThirdPersonLefthand => "thirdperson_lefthand",
            DisplayType::FirstPersonRighthand => "firstperson_righthand",
            DisplayType::FirstPersonLefthand => "firstperson_lefthand",
            DisplayType::Gui => "gui",
            DisplayType::Head => "head",
            DisplayType::Ground => "ground",
            DisplayType::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelDisplay {
    pub rotation: [f32; 3],
    pub translation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for ModelDisplay {
    fn default() -> Self {
        Self {
            rotation: [0.0; 3],
            translation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub from: [f32; 3],
    pub to: [f32; 3],
    pub rotation: Option<ElementRotation>,
    pub shade: bool,
    pub faces: BTreeMap<CubeFace, ElementFace>,
}

impl Element {
    pub fn new(from: [f32; 3], to: [f32; 3]) -> Self {
        Self {
            from,
            to,
            rotation: None,
            shade: ELEMENT_SHADE,
            faces: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRotation {
    pub origin: [f32; 3],
    pub axis: Axis,
    pub angle: f32,
    pub rescale: bool,
}

impl ElementRotation {
    pub fn new(origin: [f32; 3], axis: Axis, angle: f32) -> Self {
        Self {
            origin,
            axis,
            angle,
            rescale: ELEMENT_ROTATION_RESCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CubeFace {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl CubeFace {
    pub fn as_str(self) -> &'static str {
        match self {
            CubeFace::North => "north",
            CubeFace::East => "east",
            CubeFace::South => "south",
            CubeFace::West => "west",
            CubeFace::Up => "up",
            CubeFace::Down => "down",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementFace {
    pub uv: Option<[f32; 4]>,
    /// Texture variable reference, e.g. `#side`.
    pub texture: String,
    pub cullface: Option<CubeFace>,
    pub rotation: i32,
    pub tintindex: Option<i32>,
}

impl ElementFace {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            uv: None,
            texture: texture.into(),
            cullface: None,
            rotation: ELEMENT_FACE_ROTATION,
            tintindex: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuiLight {
    Front,
    #[default]
    Side,
}

impl GuiLight {
    pub fn as_str(self) -> &'static str {
        match self {
            GuiLight::Front => "front",
            GuiLight::Side => "side",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemModel {
    pub properties: ModelProperties,
    pub textures: ItemTexture,
    pub gui_light: GuiLight,
    pub overrides: Vec<ItemOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemTexture {
    pub particle: Option<Key>,
    /// Written as `layer0`, `layer1`, ...
    pub layers: Vec<Key>,
    pub variables: BTreeMap<String, Key>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemOverride {
    pub predicate: Vec<ItemPredicate>,
    pub model: Key,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemPredicate {
    pub name: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockModel {
    pub properties: ModelProperties,
    pub ambient_occlusion: bool,
    pub textures: BlockTexture,
}

impl Default for BlockModel {
    fn default() -> Self {
        Self {
            properties: ModelProperties::default(),
            ambient_occlusion: BLOCK_MODEL_AMBIENT_OCCLUSION,
            textures: BlockTexture::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockTexture {
    pub particle: Option<Key>,
    pub variables: BTreeMap<String, Key>,
}

/// Block state definition, variant name to model. Not encoded yet; see
/// `ResourcePackWriter::block_state`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockState {
    pub variants: BTreeMap<String, Key>,
}
