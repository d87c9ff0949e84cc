use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Sized + Send + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Debug;
    type Patch: Send + Debug;
    type Action: Send + Debug;
    type ActionResult: Send + Debug;
    type Snapshot: Send + Debug;
    type Error: std::error::Error + Send + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    /// Read-only view handed to `get` callers
    fn snapshot(&self) -> Self::Snapshot;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Failures seen by callers of a [`ResourceClient`].
#[derive(Debug, Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("{0}")]
    Entity(E),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T::Snapshot>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T::Snapshot, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    List {
        respond_to: Response<Vec<T::Id>, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns every entity of one kind. Requests are handled one at a time, so an
/// entity is never observed mid-mutation.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    let result = self.handle_create(id, payload);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).map(T::snapshot);
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item
                            .on_update(patch)
                            .map(|()| item.snapshot())
                            .map_err(FrameworkError::Entity),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = self.handle_delete(&id);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Entity),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let ids = self.store.keys().cloned().collect();
                    let _ = respond_to.send(Ok(ids));
                }
            }
        }
        info!(remaining = self.store.len(), "Actor stopped");
    }

    fn handle_create(&mut self, id: T::Id, payload: T::CreatePayload) -> Result<T::Id, FrameworkError<T::Error>> {
        let mut item = T::from_create(id, payload).map_err(FrameworkError::Entity)?;
        item.on_create().map_err(FrameworkError::Entity)?;
        let id = item.id().clone();
        debug!(id = %id, "Entity created");
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_delete(&mut self, id: &T::Id) -> Result<(), FrameworkError<T::Error>> {
        let Some(item) = self.store.get(id) else {
            warn!(id = %id, "Delete for unknown entity");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_delete().map_err(FrameworkError::Entity)?;
        self.store.remove(id);
        debug!(id = %id, "Entity deleted");
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T::Snapshot>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T::Snapshot, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T::Id>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: String,
        label: String,
        count: u32,
    }

    #[derive(Debug, Error, PartialEq)]
    enum TallyError {
        #[error("Label must not be empty")]
        EmptyLabel,
        #[error("Tally is locked")]
        Locked,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        Reset,
    }

    impl Entity for Tally {
        type Id = String;
        type CreatePayload = String;
        type Patch = String;
        type Action = TallyAction;
        type ActionResult = u32;
        type Snapshot = Tally;
        type Error = TallyError;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create(id: String, label: String) -> Result<Self, TallyError> {
            if label.is_empty() {
                return Err(TallyError::EmptyLabel);
            }
            Ok(Self { id, label, count: 0 })
        }

        fn snapshot(&self) -> Tally {
            self.clone()
        }

        fn on_update(&mut self, label: String) -> Result<(), TallyError> {
            self.label = label;
            Ok(())
        }

        fn on_delete(&self) -> Result<(), TallyError> {
            if self.label == "locked" {
                Err(TallyError::Locked)
            } else {
                Ok(())
            }
        }

        fn handle_action(&mut self, action: TallyAction) -> Result<u32, TallyError> {
            match action {
                TallyAction::Bump => self.count += 1,
                TallyAction::Reset => self.count = 0,
            }
            Ok(self.count)
        }
    }

    fn start() -> ResourceClient<Tally> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("tally_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = start();

        let id = client.create("clicks".to_string()).await.unwrap();
        assert_eq!(id, "tally_1");

        assert_eq!(client.perform_action(id.clone(), TallyAction::Bump).await, Ok(1));
        assert_eq!(client.perform_action(id.clone(), TallyAction::Bump).await, Ok(2));

        let tally = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(tally.count, 2);

        assert_eq!(client.perform_action(id.clone(), TallyAction::Reset).await, Ok(0));
    }

    #[tokio::test]
    async fn test_create_rejected_by_entity() {
        let client = start();
        let err = client.create(String::new()).await.unwrap_err();
        assert_eq!(err, FrameworkError::Entity(TallyError::EmptyLabel));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let client = start();
        let id = client.create("a".to_string()).await.unwrap();

        let updated = client.update(id.clone(), "b".to_string()).await.unwrap();
        assert_eq!(updated.label, "b");

        client.delete(id.clone()).await.unwrap();
        assert_eq!(client.get(id.clone()).await, Ok(None));
        assert_eq!(
            client.perform_action(id.clone(), TallyAction::Bump).await,
            Err(FrameworkError::NotFound(id.clone()))
        );
        assert_eq!(client.delete(id.clone()).await, Err(FrameworkError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_delete_hook_can_veto() {
        let client = start();
        let id = client.create("locked".to_string()).await.unwrap();
        assert_eq!(client.delete(id.clone()).await, Err(FrameworkError::Entity(TallyError::Locked)));
        assert_eq!(client.list().await.unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Tally>::new(1, || "tally".to_string());
        drop(actor);
        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }
}
