pub(crate) mod builder;
pub(crate) mod options;

pub use builder::{CustomizationState, UploadedImage};
pub use options::{PRODUCT_SWATCHES, Size, Swatch, TEXT_SWATCHES};
