use std::io::Write;

use serde_json::ser::Formatter;

use super::Document;
use crate::core::error::PackResult;
use crate::core::model::{Sound, SoundEvent, SoundRegistry};
use crate::core::rules::{self, RuleTarget, RuleValue};
use crate::core::writer::StructuredWriter;

impl Document for SoundRegistry {
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()> {
        w.start_object()?;
        for (name, event) in &self.sounds {
            w.key(name)?;
            write_event(event, w)?;
        }
        w.end_object()?;
        Ok(())
    }
}

fn write_event<W: Write, F: Formatter>(
    event: &SoundEvent,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.start_object()?.key("replace")?.value(event.replace)?;
    if let Some(subtitle) = &event.subtitle {
        w.key("subtitle")?.value(subtitle)?;
    }
    w.key("sounds")?.start_array()?;
    for sound in &event.sounds {
        write_sound(sound, w)?;
    }
    w.end_array()?.end_object()?;
    Ok(())
}

/// Fields of a sound that carry a declared default, in output order.
fn rule_fields(sound: &Sound) -> [(&'static str, RuleValue); 7] {
    [
        ("volume", sound.volume.into()),
        ("pitch", sound.pitch.into()),
        ("weight", sound.weight.into()),
        ("stream", sound.stream.into()),
        ("attenuation_distance", sound.attenuation_distance.into()),
        ("preload", sound.preload.into()),
        ("type", sound.kind.as_str().into()),
    ]
}

/// A sound with every field at its default collapses to its bare name.
fn write_sound<W: Write, F: Formatter>(
    sound: &Sound,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    let name = sound.name.to_string();
    let changed: Vec<_> = rule_fields(sound)
        .into_iter()
        .filter(|(field, value)| rules::should_write(RuleTarget::Sound, field, *value))
        .collect();

    if changed.is_empty() {
        w.value(&name)?;
        return Ok(());
    }

    w.start_object()?.key("name")?.value(&name)?;
    for (field, value) in changed {
        w.key(field)?.value(value)?;
    }
    w.end_object()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::to_json;
    use super::*;
    use crate::core::key::Key;
    use crate::core::model::SoundType;

    fn registry(sounds: Vec<Sound>) -> SoundRegistry {
        let mut registry = SoundRegistry::default();
        registry.sounds.insert(
            "ambient.cave".into(),
            SoundEvent {
                replace: false,
                subtitle: None,
                sounds,
            },
        );
        registry
    }

    fn sound() -> Sound {
        Sound::new(Key::parse("creative:ambient/cave1").unwrap())
    }

    #[test]
    fn all_default_sound_is_bare_name() {
        assert_eq!(
            to_json(&registry(vec![sound()])).unwrap(),
            r#"{"ambient.cave":{"replace":false,"sounds":["creative:ambient/cave1"]}}"#
        );
    }

    #[test]
    fn only_non_default_fields_are_written() {
        let mut quiet = sound();
        quiet.volume = 0.5;
        let mut loud = sound();
        loud.weight = 3;
        loud.stream = true;
        loud.kind = SoundType::Event;
        assert_eq!(
            to_json(&registry(vec![quiet, loud])).unwrap(),
            concat!(
                r#"{"ambient.cave":{"replace":false,"sounds":["#,
                r#"{"name":"creative:ambient/cave1","volume":0.5},"#,
                r#"{"name":"creative:ambient/cave1","weight":3,"stream":true,"type":"event"}"#,
                r#"]}}"#
            )
        );
    }

    #[test]
    fn every_field_round_trips_through_json() {
        let mut custom = sound();
        custom.volume = 0.25;
        custom.pitch = 1.5;
        custom.weight = 2;
        custom.stream = true;
        custom.attenuation_distance = 24;
        custom.preload = true;
        custom.kind = SoundType::Event;
        let mut registry = registry(vec![custom]);
        if let Some(event) = registry.sounds.get_mut("ambient.cave") {
            event.replace = true;
            event.subtitle = Some("subtitles.ambient.cave".into());
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&to_json(&registry).unwrap()).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "ambient.cave": {
                    "replace": true,
                    "subtitle": "subtitles.ambient.cave",
                    "sounds": [{
                        "name": "creative:ambient/cave1",
                        "volume": 0.25,
                        "pitch": 1.5,
                        "weight": 2,
                        "stream": true,
                        "attenuation_distance": 24,
                        "preload": true,
                        "type": "event"
                    }]
                }
            })
        );
    }
}
