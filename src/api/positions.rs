use super::{ApiClient, ApiResult, MessageResponse, RequestContext, StatusResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub name: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionPayload {
    pub name: String,
}

#[derive(Serialize)]
struct StatusRequest {
    is_active: bool,
}

impl ApiClient {
    pub async fn positions(&self, ctx: &RequestContext) -> ApiResult<Vec<Position>> {
        self.get(ctx, "/positions").await
    }

    pub async fn position(&self, ctx: &RequestContext, id: i64) -> ApiResult<Position> {
        self.get(ctx, &format!("/positions/{}", id)).await
    }

    pub async fn create_position(&self, ctx: &RequestContext, payload: &PositionPayload) -> ApiResult<MessageResponse> {
        self.post(ctx, "/positions", payload).await
    }

    pub async fn update_position(
        &self,
        ctx: &RequestContext,
        id: i64,
        payload: &PositionPayload,
    ) -> ApiResult<MessageResponse> {
        self.put(ctx, &format!("/positions/{}", id), payload).await
    }

    pub async fn delete_position(&self, ctx: &RequestContext, id: i64) -> ApiResult<MessageResponse> {
        self.delete(ctx, &format!("/positions/{}", id)).await
    }

    /// `PATCH /positions/{id}/status`
    pub async fn set_position_status(&self, ctx: &RequestContext, id: i64, is_active: bool) -> ApiResult<StatusResponse> {
        self.patch(ctx, &format!("/positions/{}/status", id), &StatusRequest { is_active })
            .await
    }
}
