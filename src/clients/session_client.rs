use std::sync::Arc;

use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog::{Catalog, ColorFilter, ProductFilter};
use crate::domain::{CartSummary, ColorShade, Product, ProductId, Section};
use crate::session::{
    Session, SessionAction, SessionActionResult, SessionCreate, SessionError, SessionSnapshot, ViewPatch,
};

/// Client for interacting with the Session actor.
///
/// This is what a presentation layer calls in response to clicks: every
/// method is one message to the actor and one reply.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

crate::impl_basic_client!(SessionClient, Session, SessionError, session);

impl SessionClient {
    #[instrument(skip(self, catalog))]
    pub async fn open_session(&self, catalog: Arc<Catalog>) -> Result<String, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate { catalog })
            .await
            .map_err(SessionError::from)
    }

    // --- Cart ---

    #[instrument(skip(self))]
    pub async fn add_item(&self, session_id: String, product_id: ProductId) -> Result<CartSummary, SessionError> {
        self.cart_action(session_id, SessionAction::AddItem(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, session_id: String, product_id: ProductId) -> Result<CartSummary, SessionError> {
        self.cart_action(session_id, SessionAction::RemoveItem(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        session_id: String,
        product_id: ProductId,
        delta: i64,
    ) -> Result<CartSummary, SessionError> {
        self.cart_action(session_id, SessionAction::AdjustQuantity { product_id, delta })
            .await
    }

    #[instrument(skip(self))]
    pub async fn cart(&self, session_id: String) -> Result<CartSummary, SessionError> {
        self.cart_action(session_id, SessionAction::Cart).await
    }

    // --- View ---

    #[instrument(skip(self))]
    pub async fn set_section(&self, session_id: String, section: Section) -> Result<SessionSnapshot, SessionError> {
        self.update_view(session_id, ViewPatch::section(section)).await
    }

    #[instrument(skip(self))]
    pub async fn set_product_filter(
        &self,
        session_id: String,
        filter: ProductFilter,
    ) -> Result<SessionSnapshot, SessionError> {
        self.update_view(session_id, ViewPatch::product_filter(filter)).await
    }

    #[instrument(skip(self))]
    pub async fn set_color_filter(
        &self,
        session_id: String,
        filter: ColorFilter,
    ) -> Result<SessionSnapshot, SessionError> {
        self.update_view(session_id, ViewPatch::color_filter(filter)).await
    }

    #[instrument(skip(self))]
    pub async fn visible_products(&self, session_id: String) -> Result<Vec<Product>, SessionError> {
        match self.action(session_id, SessionAction::VisibleProducts).await? {
            SessionActionResult::Products(products) => Ok(products),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn visible_shades(&self, session_id: String) -> Result<Vec<ColorShade>, SessionError> {
        match self.action(session_id, SessionAction::VisibleShades).await? {
            SessionActionResult::Shades(shades) => Ok(shades),
            other => Err(unexpected(other)),
        }
    }

    // --- Product detail ---

    #[instrument(skip(self))]
    pub async fn open_product_detail(&self, session_id: String, product_id: ProductId) -> Result<Product, SessionError> {
        match self.action(session_id, SessionAction::OpenProductDetail(product_id)).await? {
            SessionActionResult::ProductDetail(product) => Ok(product),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn close_product_detail(&self, session_id: String) -> Result<(), SessionError> {
        match self.action(session_id, SessionAction::CloseProductDetail).await? {
            SessionActionResult::DetailClosed => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_detail_to_cart(&self, session_id: String) -> Result<CartSummary, SessionError> {
        self.cart_action(session_id, SessionAction::AddDetailToCart).await
    }

    // --- Palette ---

    #[instrument(skip(self))]
    pub async fn export_palette(&self, session_id: String) -> Result<String, SessionError> {
        match self.action(session_id, SessionAction::ExportPalette).await? {
            SessionActionResult::Palette(document) => Ok(document),
            other => Err(unexpected(other)),
        }
    }

    async fn action(&self, session_id: String, action: SessionAction) -> Result<SessionActionResult, SessionError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(session_id, action)
            .await
            .map_err(SessionError::from)
    }

    async fn cart_action(&self, session_id: String, action: SessionAction) -> Result<CartSummary, SessionError> {
        match self.action(session_id, action).await? {
            SessionActionResult::Cart(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    async fn update_view(&self, session_id: String, patch: ViewPatch) -> Result<SessionSnapshot, SessionError> {
        debug!(?patch, "Sending request");
        self.inner.update(session_id, patch).await.map_err(SessionError::from)
    }
}

fn unexpected(result: SessionActionResult) -> SessionError {
    SessionError::ActorCommunication(format!("Unexpected result: {:?}", result))
}
