use crate::foundation::core::Rgba8;
use crate::foundation::error::{SidleError, SidleResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

impl Rgba8 {
    /// Parse `RGB`, `RGBA`, `RRGGBB`, or `RRGGBBAA` hex text, with an optional leading `#`.
    ///
    /// Short forms duplicate each digit (`f` -> `0xff`). Missing alpha is opaque.
    pub fn from_hex(text: &str) -> SidleResult<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SidleError::invalid_colour(text));
        }

        let nibbles: Vec<u8> = digits.bytes().map(hexit).collect();
        let [r, g, b, a] = match nibbles.as_slice() {
            &[r, g, b] => [r * 0x11, g * 0x11, b * 0x11, 0xff],
            &[r, g, b, a] => [r * 0x11, g * 0x11, b * 0x11, a * 0x11],
            &[r0, r1, g0, g1, b0, b1] => [pair(r0, r1), pair(g0, g1), pair(b0, b1), 0xff],
            &[r0, r1, g0, g1, b0, b1, a0, a1] => {
                [pair(r0, r1), pair(g0, g1), pair(b0, b1), pair(a0, a1)]
            }
            _ => return Err(SidleError::invalid_colour(text)),
        };
        Ok(Self::new(r, g, b, a))
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

// Callers guarantee `c` is an ASCII hex digit.
fn hexit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

fn pair(hi: u8, lo: u8) -> u8 {
    hi * 0x10 + lo
}

impl FromStr for Rgba8 {
    type Err = SidleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
