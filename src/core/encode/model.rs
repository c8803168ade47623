use std::io::Write;

use serde_json::ser::Formatter;

use super::{write_unless_default, Document};
use crate::core::error::PackResult;
use crate::core::model::{BlockModel, Element, ItemModel, Model, ModelProperties};
use crate::core::rules::RuleTarget;
use crate::core::writer::StructuredWriter;

impl Document for Model {
    fn write<W: Write, F: Formatter>(&self, w: &mut StructuredWriter<W, F>) -> PackResult<()> {
        w.start_object()?;
        write_properties(self.properties(), w)?;
        match self {
            Model::Item(model) => write_item(model, w)?,
            Model::Block(model) => write_block(model, w)?,
        }
        w.end_object()?;
        Ok(())
    }
}

fn write_properties<W: Write, F: Formatter>(
    properties: &ModelProperties,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    if let Some(parent) = &properties.parent {
        w.key("parent")?.value(&parent.to_string())?;
    }

    w.key("display")?.start_object()?;
    for (slot, display) in &properties.display {
        w.key(slot.as_str())?
            .start_object()?
            .key("rotation")?
            .value(&display.rotation)?
            .key("translation")?
            .value(&display.translation)?
            .key("scale")?
            .value(&display.scale)?
            .end_object()?;
    }
    w.end_object()?;

    w.key("elements")?.start_array()?;
    for element in &properties.elements {
        write_element(element, w)?;
    }
    w.end_array()?;
    Ok(())
}

fn write_element<W: Write, F: Formatter>(
    element: &Element,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    w.start_object()?
        .key("from")?
        .value(&element.from)?
        .key("to")?
        .value(&element.to)?;

    if let Some(rotation) = &element.rotation {
        w.key("rotation")?
            .start_object()?
            .key("origin")?
            .value(&rotation.origin)?
            .key("axis")?
            .value(rotation.axis.as_str())?
            .key("angle")?
            .value(rotation.angle)?;
        write_unless_default(
            w,
            RuleTarget::ElementRotation,
            "rescale",
            "rescale",
            rotation.rescale,
        )?;
        w.end_object()?;
    }

    write_unless_default(w, RuleTarget::Element, "shade", "shade", element.shade)?;

    w.key("faces")?.start_object()?;
    for (side, face) in &element.faces {
        w.key(side.as_str())?.start_object()?;
        if let Some(uv) = &face.uv {
            w.key("uv")?.value(uv)?;
        }
        w.key("texture")?.value(&face.texture)?;
        if let Some(cullface) = face.cullface {
            w.key("cullface")?.value(cullface.as_str())?;
        }
        write_unless_default(w, RuleTarget::ElementFace, "rotation", "rotation", face.rotation)?;
        if let Some(tintindex) = face.tintindex {
            w.key("tintindex")?.value(tintindex)?;
        }
        w.end_object()?;
    }
    w.end_object()?;

    w.end_object()?;
    Ok(())
}

fn write_item<W: Write, F: Formatter>(
    model: &ItemModel,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    let textures = &model.textures;
    w.key("textures")?.start_object()?;
    if let Some(particle) = &textures.particle {
        w.key("particle")?.value(&particle.to_string())?;
    }
    for (i, layer) in textures.layers.iter().enumerate() {
        w.key(&format!("layer{i}"))?.value(&layer.to_string())?;
    }
    for (name, texture) in &textures.variables {
        w.key(name)?.value(&texture.to_string())?;
    }
    w.end_object()?;

    write_unless_default(
        w,
        RuleTarget::ItemModel,
        "gui_light",
        "gui_light",
        model.gui_light.as_str(),
    )?;

    w.key("overrides")?.start_array()?;
    for item_override in &model.overrides {
        w.start_object()?.key("predicate")?.start_object()?;
        for predicate in &item_override.predicate {
            w.key(&predicate.name)?.value(predicate.value)?;
        }
        w.end_object()?
            .key("model")?
            .value(&item_override.model.to_string())?
            .end_object()?;
    }
    w.end_array()?;
    Ok(())
}

fn write_block<W: Write, F: Formatter>(
    model: &BlockModel,
    w: &mut StructuredWriter<W, F>,
) -> PackResult<()> {
    write_unless_default(
        w,
        RuleTarget::BlockModel,
        "ambient_occlusion",
        "ambientocclusion",
        model.ambient_occlusion,
    )?;

    let textures = &model.textures;
    w.key("textures")?.start_object()?;
    if let Some(particle) = &textures.particle {
        w.key("particle")?.value(&particle.to_string())?;
    }
    for (name, texture) in &textures.variables {
        w.key(name)?.value(&texture.to_string())?;
    }
    w.end_object()?;
    Ok(())
}
