use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, ColorFilter, ProductFilter};
use crate::domain::{CartSummary, Section};

use super::view::ViewState;

/// Everything a new session needs: the catalog it sells from.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub catalog: Arc<Catalog>,
}

/// Partial update of the view state. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ViewPatch {
    pub section: Option<Section>,
    pub product_filter: Option<ProductFilter>,
    pub color_filter: Option<ColorFilter>,
}

impl ViewPatch {
    pub fn section(section: Section) -> Self {
        Self {
            section: Some(section),
            ..Self::default()
        }
    }

    pub fn product_filter(filter: ProductFilter) -> Self {
        Self {
            product_filter: Some(filter),
            ..Self::default()
        }
    }

    pub fn color_filter(filter: ColorFilter) -> Self {
        Self {
            color_filter: Some(filter),
            ..Self::default()
        }
    }
}

/// What `get` returns for a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub view: ViewState,
    pub cart: CartSummary,
}
