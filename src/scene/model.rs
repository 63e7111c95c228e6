use crate::foundation::core::{Resolution, Rgba8};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of a render description: where to write, at which scales, and what.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub output_path: PathBuf,
    pub resolutions: Vec<Resolution>,
    pub images: Vec<ImageSpec>,
}

/// One named image. `width`/`height` scale a resolution's base dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub background: Rgba8,
    pub elements: Vec<Element>, // painted in order, later over earlier
}

/// Renderable layer primitive, tagged by `"type"` in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rectangle(Rectangle),
}

/// Axis-aligned rectangle in canvas-relative (0..1) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub colour: Rgba8,
}
