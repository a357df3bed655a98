use super::users::UserRole;
use super::{ApiClient, ApiResult, MessageResponse, RequestContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// The part of the login payload the client relies on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub username: String,
    pub user_role: UserRole,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub password_confirmation: &'a str,
}

impl ApiClient {
    /// `POST /login`. Always anonymous.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post(&RequestContext::anonymous(), "/login", &LoginRequest { username, password })
            .await
    }

    /// `POST /logout`, revoking the token server-side.
    pub async fn logout(&self, ctx: &RequestContext) -> ApiResult<serde_json::Value> {
        self.post(ctx, "/logout", &serde_json::json!({})).await
    }

    /// `PUT /change-password`
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        request: &ChangePasswordRequest<'_>,
    ) -> ApiResult<MessageResponse> {
        self.put(ctx, "/change-password", request).await
    }
}
