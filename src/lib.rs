//! Pluggable password authentication primitives for services.
//!
//! The [`authn::PasswordAuthenticator`] trait is the seam a service plugs a
//! credential check into; [`identity`] holds the record an authenticator
//! hands back on success.

pub mod authn;
pub mod identity;

pub use identity::{Identity, UserInfo};
