use super::{ApiClient, ApiResult, MessageResponse, RequestContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: i64,
    pub leave_type: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveTypePayload {
    pub leave_type: String,
}

impl ApiClient {
    pub async fn leave_types(&self, ctx: &RequestContext) -> ApiResult<Vec<LeaveType>> {
        self.get(ctx, "/leave-types").await
    }

    pub async fn leave_type(&self, ctx: &RequestContext, id: i64) -> ApiResult<LeaveType> {
        self.get(ctx, &format!("/leave-types/{}", id)).await
    }

    pub async fn create_leave_type(&self, ctx: &RequestContext, payload: &LeaveTypePayload) -> ApiResult<MessageResponse> {
        self.post(ctx, "/leave-types", payload).await
    }

    pub async fn update_leave_type(
        &self,
        ctx: &RequestContext,
        id: i64,
        payload: &LeaveTypePayload,
    ) -> ApiResult<MessageResponse> {
        self.put(ctx, &format!("/leave-types/{}", id), payload).await
    }

    pub async fn delete_leave_type(&self, ctx: &RequestContext, id: i64) -> ApiResult<MessageResponse> {
        self.delete(ctx, &format!("/leave-types/{}", id)).await
    }
}
