//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, Response, ResourceClient, ResourceRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads each request from the receiver, checks
/// it, and answers through the request's responder.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T::Id, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Response<T::Snapshot, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<(), T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::catalog::{Catalog, ProductFilter};
    use crate::clients::SessionClient;
    use crate::domain::{CartSummary, ProductId};
    use crate::session::{Session, SessionAction, SessionActionResult, SessionError};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_open_session_sends_catalog() {
        let (inner, mut receiver) = create_mock_client::<Session>(10);
        let client = SessionClient::new(inner);
        let catalog = Arc::new(Catalog::sample());

        let task = tokio::spawn({
            let catalog = catalog.clone();
            async move { client.open_session(catalog).await }
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert!(Arc::ptr_eq(&payload.catalog, &catalog));
        responder.send(Ok("session_1".to_string())).unwrap();

        assert_eq!(task.await.unwrap(), Ok("session_1".to_string()));
    }

    #[tokio::test]
    async fn test_add_item_sends_action() {
        let (inner, mut receiver) = create_mock_client::<Session>(10);
        let client = SessionClient::new(inner);

        let task = tokio::spawn(async move { client.add_item("session_1".to_string(), ProductId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "session_1");
        assert!(matches!(action, SessionAction::AddItem(ProductId(3))));
        let cart = CartSummary {
            items: Vec::new(),
            total_item_count: 1,
            total_amount: 990,
            is_empty: false,
        };
        responder.send(Ok(SessionActionResult::Cart(cart.clone()))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(cart));
    }

    #[tokio::test]
    async fn test_framework_errors_map_to_session_errors() {
        let (inner, mut receiver) = create_mock_client::<Session>(10);
        let client = SessionClient::new(inner);

        let task = tokio::spawn(async move { client.cart("session_9".to_string()).await });
        let (_, _, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound("session_9".to_string())))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(SessionError::NotFound("session_9".to_string())));
    }

    #[tokio::test]
    async fn test_mismatched_result_is_reported() {
        let (inner, mut receiver) = create_mock_client::<Session>(10);
        let client = SessionClient::new(inner);

        let task = tokio::spawn(async move { client.export_palette("session_1".to_string()).await });
        let (_, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert!(matches!(action, SessionAction::ExportPalette));
        responder.send(Ok(SessionActionResult::DetailClosed)).unwrap();

        assert!(matches!(task.await.unwrap(), Err(SessionError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_filter_update_and_close() {
        let (inner, mut receiver) = create_mock_client::<Session>(10);
        let client = SessionClient::new(inner);

        let filter_client = client.clone();
        let task = tokio::spawn(async move {
            filter_client
                .set_product_filter("session_1".to_string(), ProductFilter::new().brand("BBcos"))
                .await
        });
        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "session_1");
        assert_eq!(patch.product_filter.and_then(|filter| filter.brand), Some("BBcos".to_string()));
        assert!(patch.section.is_none());
        drop(responder);
        assert!(matches!(task.await.unwrap(), Err(SessionError::ActorCommunication(_))));

        let task = tokio::spawn(async move { client.close_session("session_1".to_string()).await });
        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "session_1");
        responder.send(Ok(())).unwrap();
        assert_eq!(task.await.unwrap(), Ok(()));
    }
}
