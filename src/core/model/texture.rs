/// PNG image data plus optional `.png.mcmeta` sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Texture {
    pub data: Vec<u8>,
    pub meta: Option<TextureMeta>,
    pub animation: Option<AnimationMeta>,
    pub villager: Option<VillagerMeta>,
}

impl Texture {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn has_metadata(&self) -> bool {
        self.meta.is_some() || self.animation.is_some() || self.villager.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextureMeta {
    pub blur: bool,
    pub clamp: bool,
    pub mipmaps: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationMeta {
    pub interpolate: bool,
    pub width: i32,
    pub height: i32,
    /// Ticks per frame for frames that do not override it.
    pub frametime: i32,
    pub frames: Vec<AnimationFrame>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    pub index: i32,
    pub time: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VillagerMeta {
    pub hat: Option<String>,
}
