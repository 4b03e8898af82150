//! Identity provider trait abstraction.
//!
//! Wraps the email+password authentication service: sign-in, account
//! creation, display-name update, sign-out and cached identity lookup.

use async_trait::async_trait;
use thiserror::Error;

/// Identity returned by the provider after a successful sign-in or sign-up.
///
/// This is the provider's view of the actor, not the profile record; the
/// profile lives in the document store keyed by `uid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Opaque identity id issued by the provider.
    pub uid: String,
    /// Display name held by the provider, if one was ever set.
    pub display_name: Option<String>,
    /// Email the account was created with.
    pub email: Option<String>,
}

/// Classified failures at the identity boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The email/password pair was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Sign-up attempted with an email that already has an account.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// An operation that needs a signed-in identity ran without one.
    #[error("no user is signed in")]
    NotAuthenticated,

    /// The provider could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// Any other provider-level failure, with the provider's own message.
    #[error("{0}")]
    Provider(String),
}

/// Trait for the authentication provider.
///
/// `current_user` and `sign_out` operate on the provider's in-process
/// session cache and never touch the network; everything else suspends at
/// the remote call boundary.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify credentials and establish a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError>;

    /// Create a new account and establish a session for it.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError>;

    /// Update the display name on the current identity.
    async fn update_display_name(&self, name: &str) -> Result<(), IdentityError>;

    /// The cached identity of the signed-in actor, if any. Synchronous and
    /// non-blocking; `None` if never authenticated or after sign-out.
    fn current_user(&self) -> Option<AuthUser>;

    /// Clear the cached session. No observable failure mode.
    fn sign_out(&self);
}
