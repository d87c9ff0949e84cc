use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Product is not in the catalog: {0}")]
    UnknownProduct(ProductId),
    #[error("No product detail is open")]
    NoProductDetail,
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError<SessionError>> for SessionError {
    fn from(err: FrameworkError<SessionError>) -> Self {
        match err {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::Entity(inner) => inner,
            other => SessionError::ActorCommunication(other.to_string()),
        }
    }
}
