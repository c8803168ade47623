use std::io::Write;

use serde_json::ser::Formatter;

use super::Document;
use crate::core::error::PackResult;
use crate::core::model::{AnimationMeta, Texture, TextureMeta, VillagerMeta};
use crate::core::writer::StructuredWriter;

/// The `.png.mcmeta` document of a texture.
pub struct TextureSidecar<'a>(pub &'a Texture);

impl Document for TextureSidecar<'_> {
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()> {
        let texture = self.0;
        w.start_object()?;
        if let Some(meta) = &texture.meta {
            texture_section(meta, w)?;
        }
        if let Some(animation) = &texture.animation {
            animation_section(animation, w)?;
        }
        if let Some(villager) = &texture.villager {
            villager_section(villager, w)?;
        }
        w.end_object()?;
        Ok(())
    }
}

fn texture_section<W: Write, F: Formatter>(
    meta: &TextureMeta,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.key("texture")?
        .start_object()?
        .key("blur")?
        .value(meta.blur)?
        .key("clamp")?
        .value(meta.clamp)?
        .key("mipmaps")?
        .value(&meta.mipmaps)?
        .end_object()?;
    Ok(())
}

fn animation_section<W: Write, F: Formatter>(
    animation: &AnimationMeta,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.key("animation")?
        .start_object()?
        .key("interpolate")?
        .value(animation.interpolate)?
        .key("width")?
        .value(animation.width)?
        .key("height")?
        .value(animation.height)?
        .key("frametime")?
        .value(animation.frametime)?
        .key("frames")?
        .start_array()?;

    for frame in &animation.frames {
        if frame.time == animation.frametime {
            w.value(frame.index)?;
        } else {
            w.start_object()?
                .key("index")?
                .value(frame.index)?
                .key("time")?
                .value(frame.time)?
                .end_object()?;
        }
    }

    w.end_array()?.end_object()?;
    Ok(())
}

fn villager_section<W: Write, F: Formatter>(
    villager: &VillagerMeta,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.key("villager")?.start_object()?;
    if let Some(hat) = &villager.hat {
        w.key("hat")?.value(hat)?;
    }
    w.end_object()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::to_json;
    use super::*;
    use crate::core::model::AnimationFrame;

    #[test]
    fn frames_at_default_time_collapse_to_index() {
        let mut texture = Texture::new(Vec::new());
        texture.animation = Some(AnimationMeta {
            interpolate: false,
            width: 16,
            height: 16,
            frametime: 2,
            frames: vec![
                AnimationFrame { index: 0, time: 2 },
                AnimationFrame { index: 1, time: 5 },
            ],
        });
        let json = to_json(&TextureSidecar(&texture)).unwrap();
        assert!(json.contains(r#""frames":[0,{"index":1,"time":5}]"#), "{json}");
        assert_eq!(
            json,
            r#"{"animation":{"interpolate":false,"width":16,"height":16,"frametime":2,"frames":[0,{"index":1,"time":5}]}}"#
        );
    }

    #[test]
    fn all_sections_in_fixed_order() {
        let texture = Texture {
            data: Vec::new(),
            meta: Some(TextureMeta {
                blur: true,
                clamp: false,
                mipmaps: vec![0, 1],
            }),
            animation: None,
            villager: Some(VillagerMeta {
                hat: Some("partial".into()),
            }),
        };
        assert_eq!(
            to_json(&TextureSidecar(&texture)).unwrap(),
            r#"{"texture":{"blur":true,"clamp":false,"mipmaps":[0,1]},"villager":{"hat":"partial"}}"#
        );
    }

    #[test]
    fn villager_without_hat_is_empty_object() {
        let mut texture = Texture::new(Vec::new());
        texture.villager = Some(VillagerMeta::default());
        assert_eq!(
            to_json(&TextureSidecar(&texture)).unwrap(),
            r#"{"villager":{}}"#
        );
    }
}
