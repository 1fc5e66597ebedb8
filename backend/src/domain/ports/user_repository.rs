//! Port abstraction for user lookups and their errors.

use async_trait::async_trait;

use crate::domain::{Email, User, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Read-only access to stored users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user whose username equals `username` exactly.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Report whether any stored user has exactly this email.
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserPersistenceError>;
}

/// Fixture repository used when no database is configured. Knows no users.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(None)
    }

    async fn exists_by_email(&self, _email: &Email) -> Result<bool, UserPersistenceError> {
        Ok(false)
    }
}
