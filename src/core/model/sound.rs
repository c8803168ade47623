use std::collections::BTreeMap;

use crate::core::key::Key;
use crate::core::rules::{
    SOUND_ATTENUATION_DISTANCE, SOUND_PITCH, SOUND_PRELOAD, SOUND_STREAM, SOUND_VOLUME,
    SOUND_WEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundType {
    /// `name` points at a sound file.
    #[default]
    Sound,
    /// `name` points at another sound event.
    Event,
}

impl SoundType {
    pub fn as_str(self) -> &'static str {
        match self {
            SoundType::Sound => "sound",
            SoundType::Event => "event",
        }
    }
}

/// One candidate sound of a sound event.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub name: Key,
    pub volume: f32,
    pub pitch: f32,
    pub weight: i32,
    pub stream: bool,
    pub attenuation_distance: i32,
    pub preload: bool,
    pub kind: SoundType,
}

impl Sound {
    /// A sound with every field at its default.
    pub fn new(name: Key) -> Self {
        Self {
            name,
            volume: SOUND_VOLUME,
            pitch: SOUND_PITCH,
            weight: SOUND_WEIGHT,
            stream: SOUND_STREAM,
            attenuation_distance: SOUND_ATTENUATION_DISTANCE,
            preload: SOUND_PRELOAD,
            kind: SoundType::Sound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoundEvent {
    pub replace: bool,
    pub subtitle: Option<String>,
    pub sounds: Vec<Sound>,
}

/// The `sounds.json` of one namespace, event name to event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoundRegistry {
    pub sounds: BTreeMap<String, SoundEvent>,
}
