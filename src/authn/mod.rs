//! Types and traits for use in authentication

pub mod allow;

use crate::identity::Identity;

/// A trait that can be implemented by any system able to verify a
/// username/password pair
#[async_trait::async_trait]
pub trait PasswordAuthenticator {
    /// The identity type that is returned from the `authenticate` method
    type Item: Identity + Send + 'static;

    /// Check the given credentials, returning the authenticated identity on
    /// success and `Ok(None)` when the pair is rejected. Errors are reserved
    /// for exceptional conditions (an unreachable user database, say), never
    /// for a wrong password or an unknown user
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Option<Self::Item>>;
}
