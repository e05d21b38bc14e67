use std::path::Path;
use std::sync::Arc;

use crate::assets::{PreparedImage, load_image_file};
use crate::catalog::Product;
use crate::customize::options::Size;
use crate::foundation::core::Rgba8;
use crate::foundation::error::ShopResult;

pub const DEFAULT_TEXT_COLOR: Rgba8 = Rgba8::BLACK;
pub const DEFAULT_PRODUCT_COLOR: Rgba8 = Rgba8::WHITE;

/// An uploaded image tagged with a per-builder id, so renderers can cache derived paints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    pub id: u64,
    pub image: PreparedImage,
}

/// Working state of the in-progress customization.
///
/// Every mutator bumps [`CustomizationState::revision`]; a preview rendered at an older revision
/// is stale.
#[derive(Clone, Debug)]
pub struct CustomizationState {
    product: Option<Arc<Product>>,
    image: Option<UploadedImage>,
    overlay_text: String,
    text_color: Rgba8,
    product_color: Rgba8,
    size: Size,
    revision: u64,
    next_image_id: u64,
}

impl Default for CustomizationState {
    fn default() -> Self {
        Self {
            product: None,
            image: None,
            overlay_text: String::new(),
            text_color: DEFAULT_TEXT_COLOR,
            product_color: DEFAULT_PRODUCT_COLOR,
            size: Size::default(),
            revision: 0,
            next_image_id: 1,
        }
    }
}

impl CustomizationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product(&self) -> Option<&Arc<Product>> {
        self.product.as_ref()
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn overlay_text(&self) -> &str {
        &self.overlay_text
    }

    pub fn text_color(&self) -> Rgba8 {
        self.text_color
    }

    pub fn product_color(&self) -> Rgba8 {
        self.product_color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Select `product` and reset every other choice to its default.
    pub fn select_product(&mut self, product: Arc<Product>) {
        tracing::debug!(product = %product.name, "select product");
        self.clear_choices();
        self.product = Some(product);
    }

    /// Drop image, text, colors and size back to defaults. The selected product is kept.
    pub fn clear_choices(&mut self) {
        self.image = None;
        self.overlay_text.clear();
        self.text_color = DEFAULT_TEXT_COLOR;
        self.product_color = DEFAULT_PRODUCT_COLOR;
        self.size = Size::default();
        self.touch();
    }

    pub fn set_image(&mut self, image: PreparedImage) {
        let id = self.next_image_id;
        self.next_image_id += 1;
        tracing::debug!(id, width = image.width, height = image.height, "set uploaded image");
        self.image = Some(UploadedImage { id, image });
        self.touch();
    }

    /// Decode `path` and make it the uploaded image.
    ///
    /// On failure the previous image (or its absence) is left untouched and the revision does
    /// not change.
    pub fn load_image(&mut self, path: &Path) -> ShopResult<()> {
        let image = load_image_file(path)?;
        self.set_image(image);
        Ok(())
    }

    /// Overlay text is a single line; line breaks become spaces.
    pub fn set_overlay_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.overlay_text = if text.contains(['\r', '\n']) {
            text.replace(['\r', '\n'], " ")
        } else {
            text
        };
        tracing::debug!(len = self.overlay_text.len(), "set overlay text");
        self.touch();
    }

    pub fn set_text_color(&mut self, color: Rgba8) {
        self.text_color = color;
        tracing::debug!(?color, "set text color");
        self.touch();
    }

    pub fn set_product_color(&mut self, color: Rgba8) {
        self.product_color = color;
        tracing::debug!(?color, "set product color");
        self.touch();
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        tracing::debug!(%size, "set size");
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/customize/builder.rs"]
mod tests;
