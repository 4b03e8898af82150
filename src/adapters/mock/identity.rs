//! Mock identity provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{AuthUser, IdentityError, IdentityProvider};

#[derive(Debug, Clone)]
struct MockAccount {
    uid: String,
    password: String,
    display_name: Option<String>,
    email: String,
}

/// In-memory identity provider.
///
/// Accounts are either pre-seeded with [`add_account`](Self::add_account) or
/// created through `sign_up`. The next operation can be forced to fail with
/// [`fail_next`](Self::fail_next) to exercise transient-error paths.
#[derive(Debug, Clone, Default)]
pub struct MockIdentityProvider {
    accounts: Arc<Mutex<HashMap<String, MockAccount>>>,
    session: Arc<Mutex<Option<AuthUser>>>,
    next_failure: Arc<Mutex<Option<IdentityError>>>,
}

impl MockIdentityProvider {
    /// Create an empty provider with no accounts and no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account without signing it in.
    pub fn add_account(&self, email: &str, password: &str, uid: &str, display_name: Option<&str>) {
        let mut accounts = self.accounts.lock().unwrap();
        accounts.insert(
            email.to_string(),
            MockAccount {
                uid: uid.to_string(),
                password: password.to_string(),
                display_name: display_name.map(str::to_string),
                email: email.to_string(),
            },
        );
    }

    /// Make the next remote operation fail with `error`.
    pub fn fail_next(&self, error: IdentityError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    fn take_failure(&self) -> Option<IdentityError> {
        self.next_failure.lock().unwrap().take()
    }

    fn auth_user(account: &MockAccount) -> AuthUser {
        AuthUser {
            uid: account.uid.clone(),
            display_name: account.display_name.clone(),
            email: Some(account.email.clone()),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }

        let user = {
            let accounts = self.accounts.lock().unwrap();
            let account = accounts
                .get(email)
                .filter(|account| account.password == password)
                .ok_or(IdentityError::InvalidCredentials)?;
            Self::auth_user(account)
        };
        *self.session.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }

        let user = {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(email) {
                return Err(IdentityError::EmailTaken);
            }

            let account = MockAccount {
                uid: format!("uid-{}", uuid::Uuid::new_v4()),
                password: password.to_string(),
                display_name: None,
                email: email.to_string(),
            };
            let user = Self::auth_user(&account);
            accounts.insert(email.to_string(), account);
            user
        };
        *self.session.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn update_display_name(&self, name: &str) -> Result<(), IdentityError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }

        let email = {
            let mut session = self.session.lock().unwrap();
            let current = session.as_mut().ok_or(IdentityError::NotAuthenticated)?;
            current.display_name = Some(name.to_string());
            current.email.clone()
        };

        if let Some(email) = email {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(account) = accounts.get_mut(&email) {
                account.display_name = Some(name.to_string());
            }
        }
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session.lock().unwrap().clone()
    }

    fn sign_out(&self) {
        *self.session.lock().unwrap() = None;
    }
}
