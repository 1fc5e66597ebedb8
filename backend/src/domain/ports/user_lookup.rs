//! Driving port used by the authentication collaborator.
//!
//! The authentication layer lives outside this crate. It resolves a login
//! name to an [`AuthPrincipal`] and checks email availability through this
//! port, never through the repository directly.

use async_trait::async_trait;

use crate::domain::{AuthPrincipal, Error};

/// Use-case port for identity lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Resolve `username` to its principal.
    ///
    /// A missing user is `Ok(None)`, not an error.
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthPrincipal>, Error>;

    /// Report whether `email` is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, Error>;
}
