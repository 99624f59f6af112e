//! The identity records handed back by authenticators

use serde::{Deserialize, Serialize};

/// A trait that can be implemented on any type (such as a custom `User` or
/// service-account type) representing an authenticated principal
pub trait Identity {
    /// Returns the display name of the principal
    fn name(&self) -> &str;

    /// Returns a unique identifier for the principal
    fn uid(&self) -> &str;
}

/// A minimal identity record carrying a display name and a unique identifier.
/// Authenticators that don't have a richer principal type of their own can
/// return this one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub uid: String,
}

impl Identity for UserInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn uid(&self) -> &str {
        &self.uid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_user_info_should_serialize() {
        let user = UserInfo {
            name: "admin".to_owned(),
            uid: "admin".to_owned(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(r#"{"name":"admin","uid":"admin"}"#, raw);
    }
}
