use super::{ApiClient, ApiResult, MessageResponse, RequestContext};
use crate::libs::attendance::{AttendanceEvent, AttendanceType, DateRange, EmployeeAttendanceReport};
use serde::{Deserialize, Serialize};

/// Body of `POST /attendances`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAttendanceRequest {
    #[serde(rename = "type")]
    pub kind: AttendanceType,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
}

/// `/attendances/today` answers with a single record or with a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
    Nothing(()),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
            OneOrMany::Nothing(()) => Vec::new(),
        }
    }
}

/// Query of `/employee-attendances`; absent bounds are left out entirely.
#[derive(Debug, Default, Serialize)]
pub struct EmployeeAttendanceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl From<&DateRange> for EmployeeAttendanceQuery {
    fn from(range: &DateRange) -> Self {
        Self {
            start_date: range.start.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: range.end.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl ApiClient {
    /// `POST /attendances`
    pub async fn create_attendance(
        &self,
        ctx: &RequestContext,
        request: &CreateAttendanceRequest,
    ) -> ApiResult<MessageResponse> {
        self.post(ctx, "/attendances", request).await
    }

    /// `GET /attendances/today`, normalized to a list.
    pub async fn today_attendance(&self, ctx: &RequestContext) -> ApiResult<Vec<AttendanceEvent>> {
        let raw: OneOrMany<AttendanceEvent> = self.get(ctx, "/attendances/today").await?;
        Ok(raw.into())
    }

    /// `GET /users/{id}/attendances`
    pub async fn user_attendances(&self, ctx: &RequestContext, user_id: i64) -> ApiResult<Vec<AttendanceEvent>> {
        self.get(ctx, &format!("/users/{}/attendances", user_id)).await
    }

    /// `GET /employee-attendances?start_date&end_date`
    pub async fn employee_attendances(
        &self,
        ctx: &RequestContext,
        range: &DateRange,
    ) -> ApiResult<Vec<EmployeeAttendanceReport>> {
        let query = EmployeeAttendanceQuery::from(range);
        self.get_query(ctx, "/employee-attendances", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn query_skips_missing_bounds() {
        let range = DateRange::new(NaiveDate::from_ymd_opt(2025, 3, 1), None);
        let query = serde_json::to_value(EmployeeAttendanceQuery::from(&range)).unwrap();
        assert_eq!(query, serde_json::json!({ "start_date": "2025-03-01" }));
    }

    #[test]
    fn today_accepts_object_or_array() {
        let one = r#"{"user_id":1,"date":"2025-03-03","time":"02:10","type":"check_in","latitude":"16.8","longitude":96.1}"#;
        let many = format!("[{}, {}]", one, one);

        let parsed: Vec<AttendanceEvent> = serde_json::from_str::<OneOrMany<AttendanceEvent>>(one).unwrap().into();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].latitude, 16.8);

        let parsed: Vec<AttendanceEvent> = serde_json::from_str::<OneOrMany<AttendanceEvent>>(&many).unwrap().into();
        assert_eq!(parsed.len(), 2);

        let parsed: Vec<AttendanceEvent> = serde_json::from_str::<OneOrMany<AttendanceEvent>>("null").unwrap().into();
        assert!(parsed.is_empty());
    }
}
