//! The cart: line items selected by one shopper and the totals derived from them.
//!
//! Prices are captured when a product is first added. A line item keeps that
//! price basis for as long as it exists, even if the catalog entry it came from
//! is later replaced.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::product::{effective_price, Product, ProductId, Rubles};

/// One product in the cart, with its quantity.
///
/// `quantity` is at least 1 for as long as the line item exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub volume: Option<String>,
    pub list_price: Rubles,
    /// Set only when the product was on sale at the time it was added.
    pub sale_price: Option<Rubles>,
    pub quantity: u32,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            volume: product.volume.clone(),
            list_price: product.list_price,
            sale_price: if product.on_sale { product.sale_price } else { None },
            quantity: 1,
        }
    }

    pub fn unit_price(&self) -> Rubles {
        effective_price(self.list_price, self.sale_price.is_some(), self.sale_price)
    }

    /// Unit price times quantity, saturating at `Rubles::MAX`.
    pub fn line_total(&self) -> Rubles {
        self.unit_price().saturating_mul(Rubles::from(self.quantity))
    }

    fn to_cart_line(&self) -> CartLine {
        CartLine {
            product_id: self.product_id,
            name: self.name.clone(),
            brand: self.brand.clone(),
            volume: self.volume.clone(),
            list_price: self.list_price,
            unit_price: self.unit_price(),
            quantity: self.quantity,
            line_total: self.line_total(),
        }
    }
}

/// The shopping cart of a single session.
///
/// Holds at most one line item per product, in the order products were first
/// added. All operations are infallible: removing or adjusting a product that
/// is not in the cart does nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    items: IndexMap<ProductId, LineItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product` and returns the resulting quantity.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        let quantity = match self.items.get_mut(&product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => {
                self.items.insert(product.id, LineItem::from_product(product));
                1
            }
        };
        debug!(product_id = %product.id, quantity, "Line item added");
        quantity
    }

    /// Removes the line item for `product_id`, returning it if it existed.
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<LineItem> {
        let removed = self.items.shift_remove(&product_id);
        if removed.is_some() {
            debug!(product_id = %product_id, "Line item removed");
        }
        removed
    }

    /// Changes the quantity of an existing line item by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line item.
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i64) {
        if delta == 0 {
            return;
        }
        let Some(item) = self.items.get_mut(&product_id) else {
            return;
        };

        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            self.items.shift_remove(&product_id);
            debug!(product_id = %product_id, delta, "Line item dropped to zero and was removed");
        } else {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
            debug!(product_id = %product_id, delta, quantity = item.quantity, "Line item quantity adjusted");
        }
    }

    /// Sum of quantities over all line items.
    pub fn total_item_count(&self) -> u64 {
        self.items.values().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of effective unit price times quantity over all line items.
    ///
    /// Saturates instead of overflowing, so a pathological price can never
    /// panic the task that owns the cart.
    pub fn total_amount(&self) -> Rubles {
        self.items
            .values()
            .fold(0, |total: Rubles, item| total.saturating_add(item.line_total()))
    }

    /// Line items in the order they were first added.
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> + Clone + '_ {
        self.items.values()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.get(&product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.contains_key(&product_id)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.line_items().map(LineItem::to_cart_line).collect(),
            total_item_count: self.total_item_count(),
            total_amount: self.total_amount(),
            is_empty: self.is_empty(),
        }
    }
}

/// A line item as shown to the shopper, with its prices already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    pub list_price: Rubles,
    pub unit_price: Rubles,
    pub quantity: u32,
    pub line_total: Rubles,
}

/// Point-in-time copy of a cart, handed out across the session boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total_item_count: u64,
    pub total_amount: Rubles,
    pub is_empty: bool,
}
