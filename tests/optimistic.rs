#[cfg(test)]
mod tests {
    use hrdesk::api::positions::Position;
    use hrdesk::api::users::User;
    use hrdesk::api::{ApiClient, ApiError, RequestContext};
    use hrdesk::commands::positions::toggle_position;
    use hrdesk::commands::users::toggle_user;
    use hrdesk::libs::optimistic::{apply, update_where};
    use httpmock::prelude::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        is_active: bool,
    }

    fn rows() -> Vec<Row> {
        vec![Row { id: 1, is_active: true }, Row { id: 2, is_active: true }]
    }

    #[tokio::test]
    async fn test_change_is_kept_on_success() {
        let mut items = rows();
        let result: Result<&str, String> = apply(
            &mut items,
            update_where(2, |row: &Row| row.id, |row: &mut Row| row.is_active = false),
            async { Ok("saved") },
        )
        .await;

        assert_eq!(result, Ok("saved"));
        assert!(items[0].is_active);
        assert!(!items[1].is_active);
    }

    #[tokio::test]
    async fn test_change_is_rolled_back_on_failure() {
        let mut items = rows();
        let result: Result<(), String> = apply(
            &mut items,
            update_where(1, |row: &Row| row.id, |row: &mut Row| row.is_active = false),
            async { Err("Something went wrong".to_string()) },
        )
        .await;

        assert!(result.is_err());
        assert_eq!(items, rows());
    }

    #[tokio::test]
    async fn test_unknown_id_changes_nothing() {
        let mut items = rows();
        let result: Result<(), String> = apply(
            &mut items,
            update_where(42, |row: &Row| row.id, |row: &mut Row| row.is_active = false),
            async { Ok(()) },
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(items, rows());
    }

    fn users() -> Vec<User> {
        serde_json::from_value(json!([
            { "id": 1, "name": "Aye Aye", "username": "aye", "user_role": "management", "is_active": true },
            { "id": 2, "name": "Bo Bo", "username": "bo", "user_role": "staff", "is_active": true }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_toggle_user_restores_list_when_server_fails() {
        let server = MockServer::start_async().await;
        let status = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/users/2/status")
                    .json_body(json!({ "is_active": false }));
                then.status(500).json_body(json!({ "message": "Something went wrong" }));
            })
            .await;

        let client = ApiClient::new(server.url("/api"));
        let mut list = users();
        let result = toggle_user(&client, &RequestContext::bearer("7|abc"), &mut list, 2).await;

        assert!(matches!(result, Err(ApiError::Status { .. })));
        assert_eq!(list, users());
        status.assert_async().await;
    }

    #[tokio::test]
    async fn test_toggle_user_keeps_change_on_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/users/2/status");
                then.status(200)
                    .json_body(json!({ "id": 2, "message": "Status updated", "is_active": false }));
            })
            .await;

        let client = ApiClient::new(server.url("/api"));
        let mut list = users();
        let response = toggle_user(&client, &RequestContext::bearer("7|abc"), &mut list, 2)
            .await
            .unwrap();

        assert!(!response.is_active);
        assert!(list[0].is_active);
        assert!(!list[1].is_active);
    }

    #[tokio::test]
    async fn test_toggle_position_restores_list_when_server_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/positions/1/status")
                    .json_body(json!({ "is_active": true }));
                then.status(503);
            })
            .await;

        let positions: Vec<Position> = serde_json::from_value(json!([
            { "id": 1, "name": "Cashier", "is_active": false }
        ]))
        .unwrap();
        let client = ApiClient::new(server.url("/api"));
        let mut list = positions.clone();
        let result = toggle_position(&client, &RequestContext::bearer("7|abc"), &mut list, 1).await;

        assert!(result.is_err());
        assert_eq!(list, positions);
    }
}
