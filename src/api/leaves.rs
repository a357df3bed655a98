use super::leave_types::LeaveType;
use super::users::User;
use super::{ApiClient, ApiResult, MessageResponse, RequestContext};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: i64,
    pub user_id: i64,
    pub leave_type_id: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub leave_from: NaiveDate,
    pub leave_to: NaiveDate,
    pub total_days: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub remark: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub approved_by: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<LeaveType>,
}

/// Body of `POST /leaves` and `PUT /leaves/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeavePayload {
    pub leave_type_id: i64,
    pub leave_from: NaiveDate,
    pub leave_to: NaiveDate,
    pub total_days: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveStatusRequest {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaveStatusResponse {
    pub id: i64,
    #[serde(default)]
    pub message: String,
    pub status: LeaveStatus,
}

#[derive(Serialize)]
struct DeleteLeaveRequest {
    is_active: bool,
}

impl ApiClient {
    pub async fn leaves(&self, ctx: &RequestContext) -> ApiResult<Vec<Leave>> {
        self.get(ctx, "/leaves").await
    }

    pub async fn leave(&self, ctx: &RequestContext, id: i64) -> ApiResult<Leave> {
        self.get(ctx, &format!("/leaves/{}", id)).await
    }

    pub async fn create_leave(&self, ctx: &RequestContext, payload: &LeavePayload) -> ApiResult<MessageResponse> {
        self.post(ctx, "/leaves", payload).await
    }

    pub async fn update_leave(&self, ctx: &RequestContext, id: i64, payload: &LeavePayload) -> ApiResult<MessageResponse> {
        self.put(ctx, &format!("/leaves/{}", id), payload).await
    }

    /// `DELETE /leaves/{id}` deactivates the request rather than erasing it.
    pub async fn delete_leave(&self, ctx: &RequestContext, id: i64) -> ApiResult<MessageResponse> {
        self.delete_with(ctx, &format!("/leaves/{}", id), &DeleteLeaveRequest { is_active: false })
            .await
    }

    /// `PATCH /leaves/{id}` with the new status.
    pub async fn update_leave_status(
        &self,
        ctx: &RequestContext,
        id: i64,
        request: &LeaveStatusRequest,
    ) -> ApiResult<LeaveStatusResponse> {
        self.patch(ctx, &format!("/leaves/{}", id), request).await
    }
}
