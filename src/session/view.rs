use serde::Serialize;

use crate::catalog::{ColorFilter, ProductFilter};
use crate::domain::{ProductId, Section};

/// Presentation state of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub section: Section,
    pub product_filter: ProductFilter,
    pub color_filter: ColorFilter,
    /// Product whose detail panel is open, if any.
    pub product_detail: Option<ProductId>,
}
