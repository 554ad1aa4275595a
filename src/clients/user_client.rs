//! # User Client
//!
//! High-level API for the User actor. Registration enforces email
//! uniqueness; everything else is plain CRUD via [`ActorClient`].

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Register a user. Fails with [`UserError::EmailTaken`] when the email
    /// is already registered.
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<String, UserError> {
        debug!(email = %params.email, "create_user called");
        let existing = self.list().await?;
        if existing.iter().any(|u| u.email == params.email) {
            return Err(UserError::EmailTaken(params.email));
        }
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Apply a sparse profile update and return the new state.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: String, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> UserError {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(domain) => *domain,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
