//! sidle renders declarative image manifests into raster files.
//!
//! A [`Manifest`] names a set of images, each a flat background plus ordered rectangle
//! layers in relative (0..1) coordinates, and a list of target [`Resolution`]s. Rendering
//! produces one TGA file per (image, resolution) pair under `res{W}x{H}/`.
//!
//! # Pipeline
//!
//! 1. **Load**: `JSON -> Manifest` ([`Manifest::from_path`], colours parsed eagerly)
//! 2. **Plan**: `Manifest -> [RenderJob]` (resolutions outer, images inner)
//! 3. **Render**: `ImageSpec + Resolution -> FrameRGBA` ([`render_image`])
//! 4. **Encode**: `FrameRGBA -> .tga` through an [`ImageSink`]
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod render;
mod scene;
mod session;

pub use encode::sink::{ImageSink, InMemorySink, WriteReceipt};
pub use encode::tga::{TGA_EXTENSION, TgaFileSink, encode_tga};
pub use foundation::core::{Resolution, Rgba8, scale_to_extent, scale_to_pixels};
pub use foundation::error::{SidleError, SidleResult};
pub use foundation::paths::normalize_lexically;
pub use render::backend::FrameRGBA;
pub use render::canvas::{Canvas, pixel_span};
pub use render::cpu::render_image;
pub use scene::model::{Element, ImageSpec, Manifest, Rectangle};
pub use session::batch::{
    BatchOpts, BatchReport, BatchSession, BatchStats, RenderJob, RenderedOutput,
};
