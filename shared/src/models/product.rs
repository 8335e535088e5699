//! Product Model

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Server-side product identifier
pub type ProductId = i64;

/// Label of the empty choice heading every product selection
pub const SELECT_PRODUCT_LABEL: &str = "Select Product";

/// Purchasable product as embedded in the purchase-order page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Stock on hand, display only
    #[serde(rename = "quantity", alias = "availableQuantity", default)]
    pub available_quantity: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, available_quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            available_quantity,
        }
    }
}

/// One entry of a product selection control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOption {
    /// `None` for the "Select Product" placeholder
    pub value: Option<ProductId>,
    pub label: String,
    pub stock: i64,
}

/// Immutable product catalog for one session
///
/// Cloning is cheap; every form holding the catalog shares the same
/// product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Parse the catalog JSON embedded in the page. `null` yields an empty catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let products: Option<Vec<Product>> = serde_json::from_str(json)?;
        Ok(Self::new(products.unwrap_or_default()))
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Selection choices: the placeholder followed by every product in catalog order
    pub fn options(&self) -> Vec<ProductOption> {
        std::iter::once(ProductOption {
            value: None,
            label: SELECT_PRODUCT_LABEL.to_string(),
            stock: 0,
        })
        .chain(self.products.iter().map(|p| ProductOption {
            value: Some(p.id),
            label: p.name.clone(),
            stock: p.available_quantity,
        }))
        .collect()
    }

    /// Stock shown for a selection; no selection or an unknown id shows 0
    pub fn stock_for(&self, id: Option<ProductId>) -> i64 {
        id.and_then(|id| self.get(id))
            .map(|p| p.available_quantity)
            .unwrap_or(0)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
