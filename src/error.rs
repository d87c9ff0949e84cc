use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{ProductId, Rubles};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    #[error("Duplicate color shade id: {0}")]
    DuplicateShade(String),
    #[error("Product {0} has a zero list price")]
    InvalidListPrice(ProductId),
    #[error("Product {id}: price {price} exceeds the limit of {limit}")]
    PriceAboveLimit { id: ProductId, price: Rubles, limit: Rubles },
    #[error("Product {id}: sale price {sale_price} must be positive and below list price {list_price}")]
    InvalidSalePrice {
        id: ProductId,
        sale_price: Rubles,
        list_price: Rubles,
    },
    #[error("Product {0} has a sale price but is not on sale")]
    SalePriceWithoutSale(ProductId),
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Top-level error of the storefront binary.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("System error: {0}")]
    System(String),
}
