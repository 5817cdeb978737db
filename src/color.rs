use egui::Color32;

use crate::error::ColorParseError;

/// Logical color of a single grid cell.
///
/// Every transparent pixel collapses into `Empty`, whatever hue it carried,
/// so fill boundaries treat all unpainted cells as one color. `Empty` is never
/// equal to an opaque color, black included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    Opaque { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Opaque { r, g, b }
    }

    /// Classify raw RGBA channels. Any pixel with zero alpha is `Empty`;
    /// otherwise alpha is discarded.
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        if a == 0 {
            Self::Empty
        } else {
            Self::Opaque { r, g, b }
        }
    }

    /// Parse a `#rrggbb` string as produced by a color picker. The leading
    /// `#` is optional and the result is always opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(hex.to_owned()));
        }
        // from_str_radix would accept a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_owned()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(hex.to_owned()))?;
        let [_, r, g, b] = packed.to_be_bytes();
        Ok(Self::rgb(r, g, b))
    }

    /// `#rrggbb` form of an opaque color; `Empty` has none
    pub fn to_hex(self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Opaque { r, g, b } => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Straight (unpremultiplied) RGBA. `Empty` is fully transparent black.
    pub fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Empty => [0, 0, 0, 0],
            Self::Opaque { r, g, b } => [r, g, b, 255],
        }
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        match color {
            Color::Empty => Color32::TRANSPARENT,
            Color::Opaque { r, g, b } => Color32::from_rgb(r, g, b),
        }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_rgba())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}
