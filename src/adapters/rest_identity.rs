//! REST adapter for the identity provider.
//!
//! Talks to an identity-toolkit style HTTP API: `accounts:signInWithPassword`,
//! `accounts:signUp` and `accounts:update`, keyed by the API key from
//! [`Config`](crate::config::Config). The signed-in identity (and its id
//! token) is cached in-process; `sign_out` only clears that cache.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::config::Config;
use crate::traits::{AuthUser, IdentityError, IdentityProvider};

#[derive(Debug, Clone)]
struct CachedSession {
    user: AuthUser,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Identity provider over its REST API.
pub struct RestIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    session: Arc<Mutex<Option<CachedSession>>>,
}

impl RestIdentityProvider {
    /// Create a provider for the endpoints in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.identity_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            session: Arc::new(Mutex::new(None)),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.base_url, action, self.api_key
        )
    }

    fn convert_error(err: reqwest::Error) -> IdentityError {
        if err.is_timeout() || err.is_connect() {
            IdentityError::Network(err.to_string())
        } else {
            IdentityError::Provider(err.to_string())
        }
    }

    /// Map a provider error code to the classified failure.
    fn classify(code: &str) -> IdentityError {
        match code {
            "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "INVALID_LOGIN_CREDENTIALS" => {
                IdentityError::InvalidCredentials
            }
            "EMAIL_EXISTS" => IdentityError::EmailTaken,
            other => IdentityError::Provider(other.to_string()),
        }
    }

    async fn account_request(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<AccountResponse, IdentityError> {
        let response = self
            .client
            .post(self.endpoint(action))
            .json(&body)
            .send()
            .await
            .map_err(Self::convert_error)?;

        if response.status().is_success() {
            response
                .json::<AccountResponse>()
                .await
                .map_err(|e| IdentityError::Provider(e.to_string()))
        } else {
            let status = response.status();
            let error = match response.json::<ApiErrorBody>().await {
                Ok(body) => Self::classify(&body.error.message),
                Err(_) => IdentityError::Provider(format!("identity API returned {status}")),
            };
            warn!(action, %status, %error, "identity request failed");
            Err(error)
        }
    }

    fn cache_session(&self, response: AccountResponse) -> AuthUser {
        let user = AuthUser {
            uid: response.local_id,
            display_name: response.display_name,
            email: response.email,
        };
        *self.session.lock().unwrap() = Some(CachedSession {
            user: user.clone(),
            id_token: response.id_token,
        });
        user
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        let response = self
            .account_request(
                "signInWithPassword",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        Ok(self.cache_session(response))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        let response = self
            .account_request(
                "signUp",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        Ok(self.cache_session(response))
    }

    async fn update_display_name(&self, name: &str) -> Result<(), IdentityError> {
        let id_token = {
            let session = self.session.lock().unwrap();
            session
                .as_ref()
                .map(|s| s.id_token.clone())
                .ok_or(IdentityError::NotAuthenticated)?
        };

        self.account_request(
            "update",
            serde_json::json!({
                "idToken": id_token,
                "displayName": name,
                "returnSecureToken": false,
            }),
        )
        .await?;

        let mut session = self.session.lock().unwrap();
        if let Some(cached) = session.as_mut() {
            cached.user.display_name = Some(name.to_string());
        }
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session.lock().unwrap().as_ref().map(|s| s.user.clone())
    }

    fn sign_out(&self) {
        *self.session.lock().unwrap() = None;
    }
}
