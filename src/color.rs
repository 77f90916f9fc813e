use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

/// An opaque "#rrggbb" color value.
///
/// Parsing accepts upper- or lowercase hex digits; the canonical text form
/// (via `Display`) is always lowercase. Equality compares the three channel
/// bytes, which is equivalent to byte-for-byte comparison of the canonical
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Default canvas background, matching a fresh picture
    pub const CANVAS: Color = Color::rgb(0xf0, 0xf0, 0xf0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_color32(color: egui::Color32) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| EditorError::InvalidColor(s.to_owned()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EditorError::InvalidColor(s.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            // Validated above, so the parse cannot fail
            u8::from_str_radix(&hex[range], 16).unwrap_or_default()
        };
        Ok(Self::rgb(channel(0..2), channel(2..4), channel(4..6)))
    }
}

// Serialize through the canonical string so persisted preferences stay
// readable and format-stable.
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
