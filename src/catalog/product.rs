use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Price;
use crate::foundation::error::{ShopError, ShopResult};

const BUILTIN_CATALOG_JSON: &str = include_str!("builtin.json");

/// Product category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCategory {
    Mug,
    TShirt,
    Frame,
}

impl ProductCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mug => "Mug",
            Self::TShirt => "T-Shirt",
            Self::Frame => "Frame",
        }
    }
}

/// An immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub name: String,
    pub category: ProductCategory,
    /// Price in minor currency units.
    pub price: Price,
    #[serde(default)]
    pub description: String,
}

/// Position of a product in its [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub usize);

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDef {
    #[serde(default = "default_currency")]
    currency: String,
    products: Vec<Product>,
}

fn default_currency() -> String {
    "₹".to_owned()
}

/// Read-only, ordered product list fixed at construction.
#[derive(Clone, Debug)]
pub struct Catalog {
    currency: String,
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> ShopResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json_str(s: &str) -> ShopResult<Self> {
        let def: CatalogDef = serde_json::from_str(s)
            .map_err(|e| ShopError::validation(format!("parse catalog JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShopResult<Self> {
        let def: CatalogDef = serde_json::from_reader(r)
            .map_err(|e| ShopError::validation(format!("parse catalog JSON: {e}")))?;
        Self::from_def(def)
    }

    fn from_def(def: CatalogDef) -> ShopResult<Self> {
        validate(&def)?;
        Ok(Self {
            currency: def.currency,
            products: def.products.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Products paired with their ids, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Arc<Product>)> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| (ProductId(i), p))
    }

    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.get(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Option<(ProductId, &Arc<Product>)> {
        self.iter().find(|(_, p)| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn format_price(&self, price: Price) -> String {
        price.display_with(&self.currency)
    }
}

fn validate(def: &CatalogDef) -> ShopResult<()> {
    if def.products.is_empty() {
        return Err(ShopError::validation("catalog must contain at least one product"));
    }
    let mut seen = BTreeSet::new();
    for (i, p) in def.products.iter().enumerate() {
        if p.name.trim().is_empty() {
            return Err(ShopError::validation(format!(
                "product #{i} has an empty name"
            )));
        }
        if !seen.insert(p.name.as_str()) {
            return Err(ShopError::validation(format!(
                "duplicate product name \"{}\"",
                p.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/product.rs"]
mod tests;
