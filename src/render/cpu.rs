use crate::encode::tga::check_dimensions;
use crate::foundation::core::{Resolution, scale_to_extent};
use crate::foundation::error::SidleResult;
use crate::render::backend::FrameRGBA;
use crate::render::canvas::Canvas;
use crate::scene::model::{Element, ImageSpec};

impl Element {
    /// Paint this element onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Element::Rectangle(rect) => canvas.fill_rect(rect),
        }
    }
}

/// Render one image at one resolution.
///
/// Output dimensions are `round(spec.dim * resolution.dim)` (half away from zero), clamped
/// at 0. A side above the TGA limit is rejected before the canvas is allocated. The
/// background is filled first, then elements are drawn in declaration order.
#[tracing::instrument(skip(spec), fields(image = %spec.name))]
pub fn render_image(spec: &ImageSpec, resolution: Resolution) -> SidleResult<FrameRGBA> {
    let width = scale_to_extent(spec.width, resolution.width);
    let height = scale_to_extent(spec.height, resolution.height);
    check_dimensions(width, height)?;

    let mut canvas = Canvas::new(width, height)?;
    canvas.fill(spec.background);
    for element in &spec.elements {
        element.draw(&mut canvas);
    }

    tracing::trace!(width, height, elements = spec.elements.len(), "rendered");
    Ok(canvas.into_frame())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
