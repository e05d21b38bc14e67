use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// Garment/product size. Defaults to `M`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    #[default]
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::S, Size::M, Size::L, Size::XL];

    pub fn label(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named color choice offered on the customize screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgba8,
}

pub const TEXT_SWATCHES: [Swatch; 4] = [
    Swatch {
        name: "Black",
        color: Rgba8::BLACK,
    },
    Swatch {
        name: "Red",
        color: Rgba8::RED,
    },
    Swatch {
        name: "White",
        color: Rgba8::WHITE,
    },
    Swatch {
        name: "Blue",
        color: Rgba8::PRIMARY,
    },
];

pub const PRODUCT_SWATCHES: [Swatch; 4] = [
    Swatch {
        name: "White",
        color: Rgba8::WHITE,
    },
    Swatch {
        name: "Black",
        color: Rgba8::BLACK,
    },
    Swatch {
        name: "Red",
        color: Rgba8::RED,
    },
    Swatch {
        name: "Blue",
        color: Rgba8::PRIMARY,
    },
];
