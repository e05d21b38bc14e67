use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::{LoadedFont, UploadOpts};
use crate::cart::{Cart, CartItemId};
use crate::catalog::{Catalog, ProductId};
use crate::config::AppConfig;
use crate::customize::{CustomizationState, Size};
use crate::foundation::core::Rgba8;
use crate::foundation::error::ShopResult;
use crate::nav::{NavAction, Screen};
use crate::render::{PreviewFrame, PreviewRenderer};

/// A discrete user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Browse,
    Back,
    PickProduct(ProductId),
    UploadImage(PathBuf),
    SetOverlayText(String),
    SetTextColor(Rgba8),
    SetProductColor(Rgba8),
    SetSize(Size),
    AddToCart,
    RemoveCartItem(CartItemId),
    Checkout,
}

/// The single source of truth for the running application.
pub struct AppState {
    catalog: Catalog,
    screen: Screen,
    customization: CustomizationState,
    cart: Cart,
    renderer: PreviewRenderer,
    preview: Option<Arc<PreviewFrame>>,
    preview_revision: Option<u64>,
    upload: UploadOpts,
}

impl AppState {
    /// Build the state the shipped application starts with: built-in catalog, resolved font.
    pub fn new(config: &AppConfig) -> ShopResult<Self> {
        config.validate()?;
        let catalog = Catalog::builtin()?;
        let font = LoadedFont::resolve(&config.font);
        let renderer = PreviewRenderer::new(config.preview.clone(), font.as_ref())?;
        Ok(Self::from_parts(catalog, renderer, config.upload.clone()))
    }

    pub fn from_parts(catalog: Catalog, renderer: PreviewRenderer, upload: UploadOpts) -> Self {
        let mut state = Self {
            catalog,
            screen: Screen::default(),
            customization: CustomizationState::new(),
            cart: Cart::new(),
            renderer,
            preview: None,
            preview_revision: None,
            upload,
        };
        state.sync_preview();
        state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn customization(&self) -> &CustomizationState {
        &self.customization
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn upload_opts(&self) -> &UploadOpts {
        &self.upload
    }

    /// Preview of the current customization. Always rendered at the latest revision.
    pub fn preview(&self) -> Option<&Arc<PreviewFrame>> {
        self.preview.as_ref()
    }

    /// Customization revision the current preview was rendered from.
    pub fn preview_revision(&self) -> Option<u64> {
        self.preview_revision
    }

    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Browse => {
                self.navigate(NavAction::Browse);
            }
            Message::Back => {
                self.navigate(NavAction::Back);
            }
            Message::PickProduct(id) => self.pick_product(id),
            Message::UploadImage(path) => self.upload_image(path),
            Message::SetOverlayText(text) => self.customization.set_overlay_text(text),
            Message::SetTextColor(color) => self.customization.set_text_color(color),
            Message::SetProductColor(color) => self.customization.set_product_color(color),
            Message::SetSize(size) => self.customization.set_size(size),
            Message::AddToCart => self.add_to_cart(),
            Message::RemoveCartItem(id) => {
                if let Err(e) = self.cart.remove_by_id(id) {
                    tracing::warn!(error = %e, "remove ignored");
                }
            }
            Message::Checkout => {
                if !self.navigate(NavAction::Checkout) && self.cart.is_empty() {
                    tracing::debug!("checkout ignored: cart is empty");
                }
            }
        }
        self.sync_preview();
    }

    fn navigate(&mut self, action: NavAction) -> bool {
        let next = self.screen.next(action, self.cart.len());
        if next == self.screen {
            tracing::debug!(screen = %self.screen, ?action, "navigation unchanged");
            return false;
        }
        tracing::info!(from = %self.screen, to = %next, "navigate");
        self.screen = next;
        true
    }

    fn pick_product(&mut self, id: ProductId) {
        if self.screen.next(NavAction::PickProduct, self.cart.len()) != Screen::Customize {
            tracing::debug!(screen = %self.screen, "product pick ignored outside catalog");
            return;
        }
        let Some(product) = self.catalog.get(id).cloned() else {
            tracing::warn!(id = id.0, "unknown product id");
            return;
        };
        self.customization.select_product(product);
        self.navigate(NavAction::PickProduct);
    }

    fn upload_image(&mut self, path: PathBuf) {
        if !self.upload.accepts(&path) {
            tracing::warn!(path = %path.display(), "upload ignored: unsupported extension");
            return;
        }
        if let Err(e) = self.customization.load_image(&path) {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "image upload failed; keeping previous image"
            );
        }
    }

    fn add_to_cart(&mut self) {
        if self.screen.next(NavAction::Commit, self.cart.len()) != Screen::Cart {
            tracing::debug!(screen = %self.screen, "add to cart ignored outside customize");
            return;
        }
        let Some(product) = self.customization.product().cloned() else {
            tracing::debug!("add to cart ignored: no product selected");
            return;
        };
        let snapshot = match self.renderer.render(&self.customization) {
            Ok(frame) => Arc::new(frame),
            Err(e) => {
                tracing::error!(error = %e, "snapshot render failed; item not added");
                return;
            }
        };
        self.cart.add(
            product,
            snapshot,
            self.customization.size(),
            self.customization.product_color(),
        );
        self.customization.clear_choices();
        self.navigate(NavAction::Commit);
    }

    fn sync_preview(&mut self) {
        let revision = self.customization.revision();
        if self.preview_revision == Some(revision) {
            return;
        }
        tracing::debug!(revision, "re-render preview");
        match self.renderer.render(&self.customization) {
            Ok(frame) => self.preview = Some(Arc::new(frame)),
            Err(e) => {
                tracing::error!(error = %e, "preview render failed");
                self.preview = None;
            }
        }
        self.preview_revision = Some(revision);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
