use super::PasswordAuthenticator;
use crate::identity::UserInfo;

/// A password authenticator that allows any non-empty username with any
/// password, using the username as both the name and the uid of the returned
/// identity. This is a stand-in for development environments and tests; do
/// not wire it up anywhere credentials matter
#[derive(Clone, Debug, Default)]
pub struct AllowAuthenticator;

impl AllowAuthenticator {
    /// Creates a password authenticator that allows any non-empty username
    pub fn new() -> Self {
        AllowAuthenticator
    }
}

#[async_trait::async_trait]
impl PasswordAuthenticator for AllowAuthenticator {
    type Item = UserInfo;

    async fn authenticate(
        &self,
        username: &str,
        _password: &str,
    ) -> anyhow::Result<Option<UserInfo>> {
        if username.is_empty() {
            tracing::debug!("Rejecting credentials with an empty username");
            return Ok(None);
        }
        Ok(Some(UserInfo {
            name: username.to_owned(),
            uid: username.to_owned(),
        }))
    }
}
