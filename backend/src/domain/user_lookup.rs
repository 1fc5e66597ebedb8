//! Identity lookups backing the external authentication layer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{UserLookup, UserPersistenceError, UserRepository};
use super::{AuthPrincipal, Email, Error, Username};

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// [`UserLookup`] implementation backed by a [`UserRepository`].
///
/// Matching is exact and case-sensitive: input reaches storage verbatim.
/// The `users` table rejects blank usernames and emails, so blank input
/// cannot match a stored row and is answered without a query.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use events_backend::domain::UserLookupService;
/// use events_backend::domain::ports::{FixtureUserRepository, UserLookup};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let lookup = UserLookupService::new(Arc::new(FixtureUserRepository));
/// assert!(lookup.find_by_username("alice").await.unwrap().is_none());
/// assert!(!lookup.email_exists("alice@example.edu").await.unwrap());
/// # });
/// ```
#[derive(Clone)]
pub struct UserLookupService {
    users: Arc<dyn UserRepository>,
}

impl UserLookupService {
    /// Create a lookup service reading from `users`.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserLookup for UserLookupService {
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthPrincipal>, Error> {
        let Ok(username) = Username::new(username) else {
            debug!("blank username lookup short-circuited");
            return Ok(None);
        };
        let user = self
            .users
            .find_by_username(&username)
            .await
            .map_err(map_user_persistence_error)?;
        Ok(user.map(AuthPrincipal::from))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, Error> {
        let Ok(email) = Email::new(email) else {
            debug!("blank email existence check short-circuited");
            return Ok(false);
        };
        self.users
            .exists_by_email(&email)
            .await
            .map_err(map_user_persistence_error)
    }
}
