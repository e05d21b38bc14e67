//! Raster and font inputs for the preview compositor.

pub(crate) mod decode;
pub(crate) mod font;
pub(crate) mod text;

use std::sync::Arc;

pub use decode::{UploadOpts, decode_image, load_image_file};
pub use font::{FontOpts, LoadedFont};
pub use text::{TextBrushRgba8, TextLayoutEngine};

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub rgba8_premul: Arc<Vec<u8>>,
}
