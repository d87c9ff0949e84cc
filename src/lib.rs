//! # Storefront
//!
//! Cart and catalog logic for a hair-cosmetics storefront.
//!
//! - [`domain::Order`] is the cart: line items keyed by product, effective
//!   (sale or list) unit prices, and integer totals.
//! - [`catalog::Catalog`] holds the read-only products and color shades, with
//!   [`catalog::ProductFilter`] and [`catalog::ColorFilter`] for listings.
//! - [`palette::render_palette`] turns a list of shades into a text document.
//! - [`session::Session`] is one shopper's cart plus view state. Sessions live
//!   inside a [`actor_framework::ResourceActor`] and are reached through a
//!   [`clients::SessionClient`].
//! - [`app_system::StorefrontSystem`] starts and stops the actor.
//!
//! ```no_run
//! # async fn demo() -> Result<(), storefront::error::StorefrontError> {
//! use storefront::{AppConfig, Catalog, ProductId, StorefrontSystem};
//!
//! let system = StorefrontSystem::new(&AppConfig::default(), Catalog::sample());
//! let session = system.open_session().await?;
//! let cart = system.session_client.add_item(session.clone(), ProductId(3)).await?;
//! assert_eq!(cart.total_amount, 990);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod palette;
pub mod session;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, StorefrontSystem};
pub use catalog::{Catalog, ColorFilter, ProductFilter};
pub use clients::SessionClient;
pub use config::AppConfig;
pub use domain::{CartLine, CartSummary, ColorShade, LineItem, Order, Product, ProductId, Section};
