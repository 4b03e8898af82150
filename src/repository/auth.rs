//! Session gateway: login, registration, profile update and logout.
//!
//! Wraps the identity provider and the `users` collection. The identity
//! provider verifies credentials; the profile record in the store is what
//! the rest of the app treats as the session payload.

use std::sync::Arc;
use tracing::warn;

use super::{single_shot, validation_error, UiStateStream};
use crate::models::{Role, User, UserPatch};
use crate::traits::{AuthUser, DocumentStore, IdentityError, IdentityProvider, StoreError};
use crate::ui_state::UiState;

const MSG_EMPTY_LOGIN: &str = "Email and password must not be empty.";
const MSG_EMPTY_REGISTER: &str = "Name, email and password must not be empty.";
const MSG_EMPTY_NAME: &str = "Display name must not be empty.";
const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password.";
const MSG_MISSING_PROFILE: &str = "No profile record found for this account.";
const MSG_NETWORK: &str = "Could not reach the server. Check your connection.";

fn identity_error_message(error: &IdentityError) -> String {
    match error {
        IdentityError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
        IdentityError::Network(_) => MSG_NETWORK.to_string(),
        other => other.to_string(),
    }
}

/// Gateway over the identity provider and the `users` collection.
///
/// Both handles are process-wide singletons injected at construction; the
/// gateway itself keeps no state and holds no locks.
#[derive(Clone)]
pub struct AuthRepository {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
}

impl AuthRepository {
    /// Create a gateway over the given provider and store handles.
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    /// Cached identity of the signed-in actor. Synchronous, no network.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.identity.current_user()
    }

    /// Clear the local session. No observable failure mode.
    pub fn logout(&self) {
        self.identity.sign_out();
    }

    /// Verify credentials, then load the matching profile record.
    ///
    /// Single-shot: `Loading`, then exactly one `Success(user)` or `Error`.
    /// Distinct messages for rejected credentials, a missing profile record
    /// and transient failures.
    pub fn login(&self, email: &str, password: &str) -> UiStateStream<User> {
        if email.trim().is_empty() || password.is_empty() {
            return validation_error(MSG_EMPTY_LOGIN);
        }

        let identity = Arc::clone(&self.identity);
        let store = Arc::clone(&self.store);
        let email = email.to_string();
        let password = password.to_string();

        single_shot(async move {
            let auth_user = match identity.sign_in(&email, &password).await {
                Ok(user) => user,
                Err(error) => {
                    warn!(%error, "sign-in failed");
                    return UiState::Error(identity_error_message(&error));
                }
            };

            match store.get_user(&auth_user.uid).await {
                Ok(user) => UiState::Success(user),
                Err(StoreError::NotFound) => UiState::Error(MSG_MISSING_PROFILE.to_string()),
                Err(StoreError::Network(_)) => UiState::Error(MSG_NETWORK.to_string()),
                Err(error) => {
                    warn!(%error, "profile fetch failed after sign-in");
                    UiState::Error(error.to_string())
                }
            }
        })
    }

    /// Create an account, then write its profile record.
    ///
    /// The two steps are not atomic: when the profile write fails, the
    /// provider account already exists and the caller sees an `Error`.
    /// A later login against that account fails with the missing-profile
    /// message.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> UiStateStream<User> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return validation_error(MSG_EMPTY_REGISTER);
        }

        let identity = Arc::clone(&self.identity);
        let store = Arc::clone(&self.store);
        let name = name.to_string();
        let email = email.to_string();
        let password = password.to_string();

        single_shot(async move {
            let auth_user = match identity.sign_up(&email, &password).await {
                Ok(user) => user,
                Err(error) => {
                    warn!(%error, "sign-up failed");
                    return UiState::Error(identity_error_message(&error));
                }
            };

            let user = User {
                id: auth_user.uid,
                name,
                email,
                photo: None,
                role,
                gender: None,
            };

            match store.set_user(&user).await {
                Ok(()) => UiState::Success(user),
                Err(error) => {
                    // Known inconsistency: the account exists without a
                    // profile record until someone reconciles it.
                    warn!(%error, uid = %user.id, "profile write failed after sign-up");
                    UiState::Error(format!(
                        "Your account was created but the profile could not be saved: {error}"
                    ))
                }
            }
        })
    }

    /// Update the display name on the provider and the profile record.
    ///
    /// `photo: None` leaves the stored avatar untouched.
    pub fn update_profile(&self, name: &str, photo: Option<String>) -> UiStateStream<bool> {
        if name.trim().is_empty() {
            return validation_error(MSG_EMPTY_NAME);
        }

        let Some(current) = self.identity.current_user() else {
            return validation_error("You must be signed in to update your profile.");
        };

        let identity = Arc::clone(&self.identity);
        let store = Arc::clone(&self.store);
        let name = name.to_string();

        single_shot(async move {
            if let Err(error) = identity.update_display_name(&name).await {
                warn!(%error, "display-name update failed");
                return UiState::Error(identity_error_message(&error));
            }

            let patch = UserPatch { name, photo };
            match store.update_user(&current.uid, &patch).await {
                Ok(()) => UiState::Success(true),
                Err(error) => {
                    warn!(%error, "profile record update failed");
                    UiState::Error(super::store_error_message(&error))
                }
            }
        })
    }
}
