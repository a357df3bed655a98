use super::positions::Position;
use super::{ApiClient, ApiResult, MessageResponse, RequestContext, StatusResponse};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Staff,
    Management,
    Scanner,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserRole::Staff => "staff",
            UserRole::Management => "management",
            UserRole::Scanner => "scanner",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub user_role: UserRole,
    #[serde(default)]
    pub position_id: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub start_join_date: Option<String>,
    #[serde(default)]
    pub bank_accounts: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Body of `POST /users` and `PUT /users/{id}`. `password` is only sent on create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub username: String,
    pub user_role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub position_id: i64,
    pub gender: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_join_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_accounts: Option<String>,
}

#[derive(Serialize)]
struct StatusRequest {
    is_active: bool,
}

#[derive(Serialize)]
struct ResetPasswordRequest<'a> {
    new_password: &'a str,
}

impl ApiClient {
    pub async fn users(&self, ctx: &RequestContext) -> ApiResult<Vec<User>> {
        self.get(ctx, "/users").await
    }

    pub async fn user(&self, ctx: &RequestContext, id: i64) -> ApiResult<User> {
        self.get(ctx, &format!("/users/{}", id)).await
    }

    pub async fn create_user(&self, ctx: &RequestContext, payload: &UserPayload) -> ApiResult<MessageResponse> {
        self.post(ctx, "/users", payload).await
    }

    pub async fn update_user(&self, ctx: &RequestContext, id: i64, payload: &UserPayload) -> ApiResult<MessageResponse> {
        self.put(ctx, &format!("/users/{}", id), payload).await
    }

    pub async fn delete_user(&self, ctx: &RequestContext, id: i64) -> ApiResult<MessageResponse> {
        self.delete(ctx, &format!("/users/{}", id)).await
    }

    /// `PATCH /users/{id}/status`
    pub async fn set_user_status(&self, ctx: &RequestContext, id: i64, is_active: bool) -> ApiResult<StatusResponse> {
        self.patch(ctx, &format!("/users/{}/status", id), &StatusRequest { is_active })
            .await
    }

    /// `PATCH /users/{id}/reset-password`
    pub async fn reset_password(&self, ctx: &RequestContext, id: i64, new_password: &str) -> ApiResult<MessageResponse> {
        self.patch(
            ctx,
            &format!("/users/{}/reset-password", id),
            &ResetPasswordRequest { new_password },
        )
        .await
    }
}
