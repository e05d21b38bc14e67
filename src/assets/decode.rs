use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::assets::PreparedImage;
use crate::foundation::error::{ShopError, ShopResult};

/// Which files the upload picker and drag-and-drop accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadOpts {
    /// Lower-case file extensions without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for UploadOpts {
    fn default() -> Self {
        Self {
            extensions: vec!["jpg".to_owned(), "jpeg".to_owned(), "png".to_owned()],
        }
    }
}

impl UploadOpts {
    /// Case-insensitive extension check. Says nothing about the file's contents.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn validate(&self) -> ShopResult<()> {
        if self.extensions.is_empty() {
            return Err(ShopError::validation(
                "upload must allow at least one extension",
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ShopError::validation(format!(
                "upload extension \"{bad}\" must be non-empty and have no leading '.'"
            )));
        }
        Ok(())
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
///
/// The format is sniffed from the content, not from any file name.
pub fn decode_image(bytes: &[u8]) -> ShopResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ShopError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ShopError::decode("image has no pixels"));
    }
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(ShopError::decode(format!(
            "image is {width}x{height}, sides must not exceed {}",
            u16::MAX
        )));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Read a file from disk and decode it with [`decode_image`].
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image_file(path: impl AsRef<Path>) -> ShopResult<PreparedImage> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read image file '{}'", path.display()))?;
    let img = decode_image(&bytes)?;
    tracing::debug!(width = img.width, height = img.height, "decoded upload");
    Ok(img)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
