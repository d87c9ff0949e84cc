//! Read-only reference data: products and color shades.
//!
//! A [`Catalog`] is validated once when it is built and shared immutably
//! (behind an `Arc`) by every session afterwards.

pub mod filter;
pub mod sample;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{ColorShade, Product, ProductId, Rubles};
use crate::error::CatalogError;

pub use filter::{ColorFilter, ProductFilter};

/// Highest list price a catalog accepts. At this price even `u32::MAX` units
/// of one product stay well inside `Rubles`.
pub const MAX_PRICE: Rubles = 1_000_000_000;

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    products: Vec<Product>,
    #[serde(default)]
    color_shades: Vec<ColorShade>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    shades: Vec<ColorShade>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and inconsistent sale prices.
    pub fn new(products: Vec<Product>, shades: Vec<ColorShade>) -> Result<Self, CatalogError> {
        for product in &products {
            validate_product(product)?;
        }

        let mut seen_shades = HashSet::new();
        for shade in &shades {
            if !seen_shades.insert(shade.id.as_str()) {
                return Err(CatalogError::DuplicateShade(shade.id.clone()));
            }
        }

        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        debug!(products = products.len(), shades = shades.len(), "Catalog validated");
        Ok(Self { products, shades, by_id })
    }

    /// The built-in storefront catalog.
    pub fn sample() -> Self {
        let products = sample::products();
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id, index))
            .collect();
        Self {
            products,
            shades: sample::shades(),
            by_id,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.products, document.color_shades)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), products = catalog.products.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn shades(&self) -> &[ColorShade] {
        &self.shades
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&index| &self.products[index])
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|product| product.brand.as_str()))
    }

    /// Distinct product categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|product| product.category.as_str()))
    }

    /// Distinct shade categories in first-seen order.
    pub fn shade_categories(&self) -> Vec<&str> {
        distinct(self.shades.iter().map(|shade| shade.category.as_str()))
    }

    pub fn filter_products(&self, filter: &ProductFilter) -> Vec<Product> {
        filter.apply(&self.products).cloned().collect()
    }

    pub fn filter_shades(&self, filter: &ColorFilter) -> Vec<ColorShade> {
        filter.apply(&self.shades).cloned().collect()
    }
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    if product.list_price == 0 {
        return Err(CatalogError::InvalidListPrice(product.id));
    }
    if product.list_price > MAX_PRICE {
        return Err(CatalogError::PriceAboveLimit {
            id: product.id,
            price: product.list_price,
            limit: MAX_PRICE,
        });
    }
    match (product.on_sale, product.sale_price) {
        (false, Some(_)) => Err(CatalogError::SalePriceWithoutSale(product.id)),
        (true, Some(sale_price)) if sale_price == 0 || sale_price >= product.list_price => {
            Err(CatalogError::InvalidSalePrice {
                id: product.id,
                sale_price,
                list_price: product.list_price,
            })
        }
        _ => Ok(()),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
