//! Stable filters over the catalog. Every active predicate must hold (logical
//! AND); an unset predicate matches everything. Results keep catalog order.

use serde::{Deserialize, Serialize};

use crate::domain::{ColorShade, Product};

/// Product listing filter.
///
/// Brand and category compare by exact string equality. `search` is a
/// case-insensitive substring match against name or brand. An empty string in
/// any of the three is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub on_sale_only: bool,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn on_sale_only(mut self) -> Self {
        self.on_sale_only = true;
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        set(&self.brand).is_some()
            || set(&self.category).is_some()
            || self.search_needle().is_some()
            || self.on_sale_only
    }

    pub fn matches(&self, product: &Product) -> bool {
        let brand_ok = set(&self.brand).map_or(true, |brand| product.brand == brand);
        let category_ok = set(&self.category).map_or(true, |category| product.category == category);
        let sale_ok = !self.on_sale_only || product.is_discounted();
        let search_ok = self.search_needle().map_or(true, |needle| {
            product.name.to_lowercase().contains(&needle) || product.brand.to_lowercase().contains(&needle)
        });
        brand_ok && category_ok && sale_ok && search_ok
    }

    pub fn apply<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |product| self.matches(product))
    }

    fn search_needle(&self) -> Option<String> {
        set(&self.search).map(str::to_lowercase)
    }
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Palette filter by shade category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFilter {
    pub category: Option<String>,
}

impl ColorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn clear(&mut self) {
        self.category = None;
    }

    pub fn matches(&self, shade: &ColorShade) -> bool {
        set(&self.category).map_or(true, |category| shade.category == category)
    }

    pub fn apply<'a>(&'a self, shades: &'a [ColorShade]) -> impl Iterator<Item = &'a ColorShade> + 'a {
        shades.iter().filter(move |shade| self.matches(shade))
    }
}
