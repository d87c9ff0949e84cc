use std::sync::Arc;

use tracing::{debug, info};

use crate::actor_framework::Entity;
use crate::catalog::Catalog;
use crate::domain::{Order, Product, ProductId};
use crate::palette::render_palette;

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use super::payloads::{SessionCreate, SessionSnapshot, ViewPatch};
use super::view::ViewState;

/// One shopper's state. Owned by the session actor; never shared.
#[derive(Debug)]
pub struct Session {
    id: String,
    catalog: Arc<Catalog>,
    order: Order,
    view: ViewState,
}

impl Session {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    fn add_item(&mut self, product_id: ProductId) -> Result<SessionActionResult, SessionError> {
        let product = catalog_product(&self.catalog, product_id)?;
        self.order.add_item(product);
        Ok(self.cart())
    }

    fn cart(&self) -> SessionActionResult {
        SessionActionResult::Cart(self.order.summary())
    }
}

/// Looks a product up in the session's catalog. The cart only ever sees
/// products that pass this check.
fn catalog_product(catalog: &Catalog, product_id: ProductId) -> Result<&Product, SessionError> {
    catalog
        .product(product_id)
        .ok_or(SessionError::UnknownProduct(product_id))
}

impl Entity for Session {
    type Id = String;
    type CreatePayload = SessionCreate;
    type Patch = ViewPatch;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Snapshot = SessionSnapshot;
    type Error = SessionError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a session with an empty cart on the home section.
    fn from_create(id: String, payload: SessionCreate) -> Result<Self, SessionError> {
        Ok(Self {
            id,
            catalog: payload.catalog,
            order: Order::new(),
            view: ViewState::default(),
        })
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            view: self.view.clone(),
            cart: self.order.summary(),
        }
    }

    fn on_create(&mut self) -> Result<(), SessionError> {
        info!(session_id = %self.id, "Session opened");
        Ok(())
    }

    /// Applies whichever view fields the patch carries.
    fn on_update(&mut self, patch: ViewPatch) -> Result<(), SessionError> {
        if let Some(section) = patch.section {
            debug!(session_id = %self.id, %section, "Section changed");
            self.view.section = section;
        }
        if let Some(filter) = patch.product_filter {
            debug!(session_id = %self.id, ?filter, "Product filter changed");
            self.view.product_filter = filter;
        }
        if let Some(filter) = patch.color_filter {
            debug!(session_id = %self.id, ?filter, "Color filter changed");
            self.view.color_filter = filter;
        }
        Ok(())
    }

    fn on_delete(&self) -> Result<(), SessionError> {
        info!(
            session_id = %self.id,
            items = self.order.total_item_count(),
            amount = self.order.total_amount(),
            "Session closed"
        );
        Ok(())
    }

    /// Handles session-specific actions.
    ///
    /// # Errors
    /// `UnknownProduct` when adding or opening an id the catalog does not
    /// have, and `NoProductDetail` when adding from a closed detail view.
    /// Removing or adjusting a product that is not in the cart is a no-op.
    fn handle_action(&mut self, action: SessionAction) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::AddItem(product_id) => self.add_item(product_id),
            SessionAction::RemoveItem(product_id) => {
                self.order.remove_item(product_id);
                Ok(self.cart())
            }
            SessionAction::AdjustQuantity { product_id, delta } => {
                self.order.adjust_quantity(product_id, delta);
                Ok(self.cart())
            }
            SessionAction::Cart => Ok(self.cart()),
            SessionAction::VisibleProducts => Ok(SessionActionResult::Products(
                self.catalog.filter_products(&self.view.product_filter),
            )),
            SessionAction::VisibleShades => Ok(SessionActionResult::Shades(
                self.catalog.filter_shades(&self.view.color_filter),
            )),
            SessionAction::OpenProductDetail(product_id) => {
                let product = catalog_product(&self.catalog, product_id)?.clone();
                self.view.product_detail = Some(product_id);
                Ok(SessionActionResult::ProductDetail(product))
            }
            SessionAction::CloseProductDetail => {
                self.view.product_detail = None;
                Ok(SessionActionResult::DetailClosed)
            }
            SessionAction::AddDetailToCart => {
                let product_id = self.view.product_detail.ok_or(SessionError::NoProductDetail)?;
                let result = self.add_item(product_id)?;
                self.view.product_detail = None;
                Ok(result)
            }
            SessionAction::ExportPalette => {
                let document = render_palette(self.view.color_filter.apply(self.catalog.shades()));
                Ok(SessionActionResult::Palette(document))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColorFilter, ProductFilter};
    use crate::domain::Section;
    use crate::palette::PALETTE_TITLE;

    fn session() -> Session {
        let payload = SessionCreate {
            catalog: Arc::new(Catalog::sample()),
        };
        Session::from_create("session_1".to_string(), payload).unwrap()
    }

    fn cart_of(result: SessionActionResult) -> crate::domain::CartSummary {
        match result {
            SessionActionResult::Cart(cart) => cart,
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_new_session_is_empty_on_home() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.view.section, Section::Home);
        assert!(snapshot.cart.is_empty);
        assert_eq!(snapshot.view.product_detail, None);
    }

    #[test]
    fn test_add_item_uses_catalog_price() {
        let mut session = session();
        session.handle_action(SessionAction::AddItem(ProductId(2))).unwrap();
        let cart = cart_of(session.handle_action(SessionAction::AddItem(ProductId(3))).unwrap());
        assert_eq!(cart.total_item_count, 2);
        assert_eq!(cart.total_amount, 420 + 990);
    }

    #[test]
    fn test_unknown_product_is_rejected_before_the_cart() {
        let mut session = session();
        let err = session.handle_action(SessionAction::AddItem(ProductId(404))).unwrap_err();
        assert_eq!(err, SessionError::UnknownProduct(ProductId(404)));
        assert!(session.order().is_empty());
    }

    #[test]
    fn test_remove_and_adjust_unknown_are_noops() {
        let mut session = session();
        session.handle_action(SessionAction::AddItem(ProductId(5))).unwrap();
        session.handle_action(SessionAction::RemoveItem(ProductId(404))).unwrap();
        let cart = cart_of(
            session
                .handle_action(SessionAction::AdjustQuantity {
                    product_id: ProductId(404),
                    delta: -1,
                })
                .unwrap(),
        );
        assert_eq!(cart.total_item_count, 1);
    }

    #[test]
    fn test_view_patch_drives_visible_products() {
        let mut session = session();
        session
            .on_update(ViewPatch::product_filter(ProductFilter::new().brand("PRODIVA")))
            .unwrap();
        match session.handle_action(SessionAction::VisibleProducts).unwrap() {
            SessionActionResult::Products(products) => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].id, ProductId(5));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_patch_leaves_unset_fields_alone() {
        let mut session = session();
        session
            .on_update(ViewPatch::color_filter(ColorFilter::new().category("Медные")))
            .unwrap();
        session.on_update(ViewPatch::section(Section::Palettes)).unwrap();
        assert_eq!(session.view().section, Section::Palettes);
        assert_eq!(session.view().color_filter.category.as_deref(), Some("Медные"));
    }

    #[test]
    fn test_detail_add_closes_detail() {
        let mut session = session();
        match session.handle_action(SessionAction::OpenProductDetail(ProductId(1))).unwrap() {
            SessionActionResult::ProductDetail(product) => assert_eq!(product.features.len(), 4),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(session.view().product_detail, Some(ProductId(1)));

        let cart = cart_of(session.handle_action(SessionAction::AddDetailToCart).unwrap());
        assert_eq!(cart.total_amount, 1850);
        assert_eq!(session.view().product_detail, None);

        let err = session.handle_action(SessionAction::AddDetailToCart).unwrap_err();
        assert_eq!(err, SessionError::NoProductDetail);
    }

    #[test]
    fn test_close_detail_forgets_product() {
        let mut session = session();
        session.handle_action(SessionAction::OpenProductDetail(ProductId(8))).unwrap();
        assert_eq!(session.view().product_detail, Some(ProductId(8)));

        let result = session.handle_action(SessionAction::CloseProductDetail).unwrap();
        assert_eq!(result, SessionActionResult::DetailClosed);
        assert_eq!(session.view().product_detail, None);

        let err = session.handle_action(SessionAction::AddDetailToCart).unwrap_err();
        assert_eq!(err, SessionError::NoProductDetail);
        assert!(session.order().is_empty());
    }

    #[test]
    fn test_snapshot_serializes_view_and_cart() {
        let mut session = session();
        session.on_update(ViewPatch::section(Section::Promotions)).unwrap();
        session
            .on_update(ViewPatch::product_filter(ProductFilter::new().on_sale_only()))
            .unwrap();
        session.handle_action(SessionAction::OpenProductDetail(ProductId(6))).unwrap();
        session.handle_action(SessionAction::AddDetailToCart).unwrap();

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["id"], "session_1");
        assert_eq!(json["view"]["productFilter"]["onSaleOnly"], true);
        assert!(json["view"]["productDetail"].is_null());
        assert_eq!(json["cart"]["items"][0]["unitPrice"], 399);
        assert_eq!(json["cart"]["isEmpty"], false);
    }

    #[test]
    fn test_open_unknown_detail_keeps_view() {
        let mut session = session();
        let err = session.handle_action(SessionAction::OpenProductDetail(ProductId(77))).unwrap_err();
        assert_eq!(err, SessionError::UnknownProduct(ProductId(77)));
        assert_eq!(session.view().product_detail, None);
    }

    #[test]
    fn test_export_palette_uses_color_filter() {
        let mut session = session();
        session
            .on_update(ViewPatch::color_filter(ColorFilter::new().category("Золотистые")))
            .unwrap();
        match session.handle_action(SessionAction::ExportPalette).unwrap() {
            SessionActionResult::Palette(document) => {
                assert!(document.starts_with(PALETTE_TITLE));
                assert_eq!(document.lines().filter(|line| line.ends_with("(Золотистые)")).count(), 4);
                assert!(!document.contains("Медные"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
