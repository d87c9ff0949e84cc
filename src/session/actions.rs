use crate::domain::{CartSummary, ColorShade, Product, ProductId};

/// Custom actions for Session entities.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Adds one unit of a catalog product to the cart.
    AddItem(ProductId),
    RemoveItem(ProductId),
    AdjustQuantity { product_id: ProductId, delta: i64 },
    Cart,
    VisibleProducts,
    VisibleShades,
    OpenProductDetail(ProductId),
    CloseProductDetail,
    /// Adds the product shown in the detail view, then closes the view.
    AddDetailToCart,
    /// Renders the currently visible shades as a text palette.
    ExportPalette,
}

/// Results from SessionActions.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionActionResult {
    Cart(CartSummary),
    Products(Vec<Product>),
    Shades(Vec<ColorShade>),
    ProductDetail(Product),
    Palette(String),
    DetailClosed,
}
