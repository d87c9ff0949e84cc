use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Prices are whole rubles.
pub type Rubles = u64;

/// Represents a product in the catalog.
///
/// Products are reference data: they are loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub list_price: Rubles,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Rubles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_shade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl Product {
    /// Creates a product at list price with no display extras.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        list_price: Rubles,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            list_price,
            on_sale: false,
            sale_price: None,
            volume: None,
            image: None,
            color_shade: None,
            description: None,
            features: Vec::new(),
            usage: None,
        }
    }

    /// Puts the product on sale at `sale_price`.
    pub fn with_sale(mut self, sale_price: Rubles) -> Self {
        self.on_sale = true;
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// The price a customer pays for one unit right now.
    pub fn effective_price(&self) -> Rubles {
        effective_price(self.list_price, self.on_sale, self.sale_price)
    }

    /// True when the effective price comes from a sale.
    pub fn is_discounted(&self) -> bool {
        self.on_sale && self.sale_price.is_some()
    }
}

/// Sale price wins only when the sale flag is set and a sale price exists.
pub(crate) fn effective_price(list_price: Rubles, on_sale: bool, sale_price: Option<Rubles>) -> Rubles {
    match (on_sale, sale_price) {
        (true, Some(sale)) => sale,
        _ => list_price,
    }
}
