//! Auth gateway: register, login, logout, refresh, profile update.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful auth response is committed to the [`SessionStore`] as a
//! single operation (tokens and user together), which flips the store's
//! authentication stream. Backend validation failures propagate unchanged
//! as [`ApiError::Api`] with the field messages flattened into displayable
//! text; the store is never touched on failure.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::Api;
use crate::session::SessionStore;
use crate::types::{
    AuthResponse, FileAttachment, LoginInput, ProfileUpdateInput, RegisterInput, TokenPair,
    UserProfile,
};

const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
const REFRESH_FALLBACK: &str = "Session could not be refreshed.";
const PROFILE_FALLBACK: &str = "Profile update failed. Please try again.";

/// Performs auth network calls and keeps the session store in sync.
pub struct AuthGateway {
    api: Api,
}

impl AuthGateway {
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<SessionStore>) -> Self {
        Self {
            api: Api::new(config, store),
        }
    }

    /// Create an account. On success the returned tokens and profile are
    /// committed to the session store and the auth stream flips to `true`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's field-level validation messages, transport
    /// failures, and session persistence failures.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthResponse, ApiError> {
        let mut form = Form::new()
            .text("first_name", input.first_name)
            .text("last_name", input.last_name)
            .text("email", input.email)
            .text("password", input.password);
        if let Some(photo) = input.profile_photo {
            form = form.part("profile_photo", file_part(photo));
        }

        let response: AuthResponse = self
            .api
            .post_multipart("/auth/register/", form, REGISTER_FALLBACK)
            .await?;
        self.commit(&response)?;
        Ok(response)
    }

    /// Exchange credentials for a session. Same commit semantics as
    /// [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Propagates backend rejections, transport failures, and session
    /// persistence failures.
    pub async fn login(&self, input: LoginInput) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .api
            .post_json("/auth/login/", &input, LOGIN_FALLBACK)
            .await?;
        self.commit(&response)?;
        Ok(response)
    }

    /// End the session locally. The logout endpoint is notified best-effort
    /// (its result is ignored — revocation is not guaranteed server-side);
    /// the store is cleared unconditionally and the auth stream flips to
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns an error only if clearing the persisted session fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _ = self
            .api
            .request(Method::POST, "/auth/logout/")
            .json(&serde_json::json!({}))
            .send()
            .await;
        self.api.store().clear_session()?;
        Ok(())
    }

    /// Exchange the stored refresh token for a new token pair, overwriting
    /// the stored tokens and keeping the cached user.
    ///
    /// A backend rejection (e.g. an expired refresh token) propagates
    /// unchanged and leaves the stored tokens as they were — there is no
    /// clear-on-failure and no retry.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingRefreshToken`] when no refresh token is stored;
    /// otherwise backend/transport/persistence failures.
    pub async fn refresh(&self) -> Result<TokenPair, ApiError> {
        let refresh_token = self
            .api
            .store()
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let pair: TokenPair = self
            .api
            .post_json("/auth/refresh/", &body, REFRESH_FALLBACK)
            .await?;
        self.api
            .store()
            .set_tokens(pair.access_token.clone(), pair.refresh_token.clone())?;
        debug!("access token refreshed");
        Ok(pair)
    }

    /// Update the authenticated user's profile. The returned profile
    /// replaces the cached one wholesale; tokens are untouched.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections, transport failures, and session
    /// persistence failures.
    pub async fn update_profile(&self, input: ProfileUpdateInput) -> Result<UserProfile, ApiError> {
        let mut form = Form::new();
        if let Some(first_name) = input.first_name {
            form = form.text("first_name", first_name);
        }
        if let Some(last_name) = input.last_name {
            form = form.text("last_name", last_name);
        }
        if let Some(bio) = input.bio {
            form = form.text("bio", bio);
        }
        if let Some(photo) = input.profile_photo {
            form = form.part("profile_photo", file_part(photo));
        }

        let user: UserProfile = self
            .api
            .post_multipart("/profile/update/", form, PROFILE_FALLBACK)
            .await?;
        self.api.store().set_user(user.clone())?;
        Ok(user)
    }

    /// Commit tokens and user to the store as one operation.
    fn commit(&self, response: &AuthResponse) -> Result<(), ApiError> {
        self.api.store().set_session(
            response.access_token.clone(),
            response.refresh_token.clone(),
            response.user.clone(),
        )?;
        debug!(user_id = response.user.id, "session established");
        Ok(())
    }
}

fn file_part(attachment: FileAttachment) -> Part {
    Part::bytes(attachment.bytes).file_name(attachment.file_name)
}
