use std::fmt;
use std::sync::Arc;

use crate::catalog::Product;
use crate::customize::Size;
use crate::foundation::core::{Price, Rgba8};
use crate::foundation::error::{ShopError, ShopResult};
use crate::render::PreviewFrame;

/// Stable identity of a cart line. Unlike its index, it survives removals of other lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CartItemId(pub u64);

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A committed customization. Immutable once created.
#[derive(Clone, Debug)]
pub struct CartItem {
    id: CartItemId,
    product: Arc<Product>,
    preview: Arc<PreviewFrame>,
    size: Size,
    color: Rgba8,
}

impl CartItem {
    pub fn id(&self) -> CartItemId {
        self.id
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// Snapshot taken at commit time.
    pub fn preview(&self) -> &Arc<PreviewFrame> {
        &self.preview
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Product base color chosen for this line.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    pub fn price(&self) -> Price {
        self.product.price
    }
}

/// Ordered list of committed customizations.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    next_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and return its id.
    pub fn add(
        &mut self,
        product: Arc<Product>,
        preview: Arc<PreviewFrame>,
        size: Size,
        color: Rgba8,
    ) -> CartItemId {
        let id = CartItemId(self.next_id);
        self.next_id += 1;
        tracing::info!(%id, product = %product.name, %size, "add to cart");
        self.items.push(CartItem {
            id,
            product,
            preview,
            size,
            color,
        });
        id
    }

    /// Remove the line at `index`. Later lines shift down by one.
    ///
    /// An out-of-range index is an error and leaves the cart unchanged.
    pub fn remove(&mut self, index: usize) -> ShopResult<CartItem> {
        if index >= self.items.len() {
            return Err(ShopError::CartIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        tracing::info!(id = %item.id, index, remaining = self.items.len(), "remove from cart");
        Ok(item)
    }

    /// Remove by id, resolving the current index first.
    pub fn remove_by_id(&mut self, id: CartItemId) -> ShopResult<CartItem> {
        let index = self
            .index_of(id)
            .ok_or(ShopError::UnknownCartItem(id.0))?;
        self.remove(index)
    }

    pub fn index_of(&self, id: CartItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::price).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cart/items.rs"]
mod tests;
