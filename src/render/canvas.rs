use crate::foundation::core::{Rgba8, scale_to_pixels};
use crate::foundation::error::{SidleError, SidleResult};
use crate::render::backend::FrameRGBA;
use crate::scene::model::Rectangle;
use std::ops::Range;

/// Owned RGBA8 pixel buffer for a single (image, resolution) render.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a zeroed `width * height` canvas.
    pub fn new(width: u32, height: u32) -> SidleResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                SidleError::validation(format!("canvas {width}x{height} is too large"))
            })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn fill(&mut self, colour: Rgba8) {
        let px = colour.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Overwrite the canvas region covered by a relative rectangle.
    ///
    /// Geometry is clamped to the canvas, never rejected. Pixels are replaced, not blended,
    /// so a translucent colour stores its alpha as-is.
    pub fn fill_rect(&mut self, rect: &Rectangle) {
        let cols = pixel_span(rect.x, rect.width, self.width);
        let rows = pixel_span(rect.y, rect.height, self.height);
        if cols.is_empty() || rows.is_empty() {
            return;
        }

        let px = rect.colour.to_array();
        let stride = self.width as usize * 4;
        for y in rows {
            let row = &mut self.data[y * stride..(y + 1) * stride];
            for d in row[cols.start * 4..cols.end * 4].chunks_exact_mut(4) {
                d.copy_from_slice(&px);
            }
        }
    }

    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.data,
        }
    }
}

/// Pixel range `[start, end)` covered along one axis of length `dim`.
///
/// `start = round(offset * dim)` and `end = min(start + round(extent * dim), dim)`; the
/// range is empty when `start >= end`. A negative start is clamped to 0, so a rectangle
/// hanging off the leading edge keeps its visible part.
pub fn pixel_span(offset: f64, extent: f64, dim: u32) -> Range<usize> {
    let start = scale_to_pixels(offset, dim);
    let end = start
        .saturating_add(scale_to_pixels(extent, dim))
        .min(i64::from(dim));
    let lo = start.max(0);
    if lo >= end {
        return 0..0;
    }
    // 0 <= lo < end <= dim
    lo as usize..end as usize
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
