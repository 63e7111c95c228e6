use crate::foundation::error::{SidleError, SidleResult};

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One physical pixel scale at which every image is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> SidleResult<Self> {
        let res = Self { width, height };
        res.validate()?;
        Ok(res)
    }

    pub fn validate(self) -> SidleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SidleError::schema(format!(
                "resolution {}x{} must have width>0 and height>0",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Name of the output directory holding every image rendered at this resolution.
    pub fn dir_name(self) -> String {
        format!("res{}x{}", self.width, self.height)
    }
}

impl serde::Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.width, self.height].serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Resolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [width, height] = <[u32; 2]>::deserialize(deserializer)?;
        Ok(Self { width, height })
    }
}

/// Scale a relative length onto a pixel grid.
///
/// Rounds half away from zero (`f64::round`). The cast saturates, so NaN maps to 0 and
/// out-of-range values pin to `i64::MIN`/`i64::MAX`.
pub fn scale_to_pixels(rel: f64, dim: u32) -> i64 {
    (rel * f64::from(dim)).round() as i64
}

/// Like [`scale_to_pixels`], clamped to a non-negative canvas dimension.
pub fn scale_to_extent(rel: f64, dim: u32) -> u32 {
    (rel * f64::from(dim)).round() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
