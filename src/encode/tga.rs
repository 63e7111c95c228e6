use crate::encode::sink::{ImageSink, WriteReceipt};
use crate::foundation::error::{SidleError, SidleResult};
use crate::render::backend::FrameRGBA;
use std::io::Cursor;
use std::path::Path;

/// File extension of every output image.
pub const TGA_EXTENSION: &str = "tga";

const HEADER_LEN: usize = 18;

/// Reject dimensions a TGA header cannot store.
pub(crate) fn check_dimensions(width: u32, height: u32) -> SidleResult<()> {
    let max = u32::from(u16::MAX);
    if width > max || height > max {
        return Err(SidleError::encode(format!(
            "{width}x{height} exceeds the TGA limit of {max}x{max}"
        )));
    }
    Ok(())
}

/// Encode a frame as a 32-bit RLE TGA file.
///
/// TGA stores dimensions as `u16`; larger frames are rejected. Zero-area frames encode to a
/// header-only file.
pub fn encode_tga(frame: &FrameRGBA) -> SidleResult<Vec<u8>> {
    check_dimensions(frame.width, frame.height)?;
    if frame.width == 0 || frame.height == 0 {
        return Ok(empty_tga(frame.width as u16, frame.height as u16).to_vec());
    }

    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Tga,
    )
    .map_err(|e| SidleError::encode(format!("tga: {e}")))?;
    Ok(out.into_inner())
}

// The image codec refuses zero dimensions, so degenerate frames get a bare
// uncompressed true-colour header: 32 bpp, 8 alpha bits, top-left origin.
fn empty_tga(width: u16, height: u16) -> [u8; HEADER_LEN] {
    let mut h = [0u8; HEADER_LEN];
    h[2] = 2;
    h[12..14].copy_from_slice(&width.to_le_bytes());
    h[14..16].copy_from_slice(&height.to_le_bytes());
    h[16] = 32;
    h[17] = 0x28;
    h
}

/// Writes each frame as a TGA file at the requested path.
#[derive(Clone, Copy, Debug, Default)]
pub struct TgaFileSink;

impl ImageSink for TgaFileSink {
    fn write_image(&self, path: &Path, frame: &FrameRGBA) -> SidleResult<WriteReceipt> {
        let bytes = encode_tga(frame)?;
        std::fs::write(path, &bytes)
            .map_err(|e| SidleError::io(format!("write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote image");
        Ok(WriteReceipt::for_bytes(&bytes))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/tga.rs"]
mod tests;
