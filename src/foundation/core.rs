use std::fmt;

use crate::foundation::error::{ShopError, ShopResult};

/// Raster canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas. Both sides must be in `1..=u16::MAX` (raster backend limit).
    pub fn new(width: u32, height: u32) -> ShopResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(self) -> ShopResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ShopError::validation("canvas must be at least 1x1"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(ShopError::validation("canvas sides must fit in u16"));
        }
        Ok(())
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Brand blue, also used for buttons and prices.
    pub const PRIMARY: Self = Self::rgb(59, 130, 246);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Whole-unit catalog price. Displayed as the bare amount, e.g. `499`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    /// Format as `<currency><amount>`, e.g. `₹499`.
    pub fn display_with(self, currency: &str) -> String {
        format!("{currency}{self}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).fold(0u64, u64::saturating_add))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
