//! `/users/*` endpoints.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use super::{json_body, require_non_empty};
use crate::client::{GlassixClient, Json, NoContent};
use crate::error::Result;
use crate::models::{
    AddUserRequest, DeleteUserResponse, UpdateUserRequest, User, UserInfoData, UserStatus,
    UserStatusResponse, UserType,
};
use crate::query::QueryBuilder;

/// Client for user operations.
///
/// Status calls act on the user the credentials belong to.
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: GlassixClient,
}

impl UsersClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Lists every user of the workspace.
    pub async fn all(&self) -> Result<Vec<User>> {
        let Json(users) = self.client.get("/users/allusers").await?;
        Ok(users)
    }

    /// Changes the availability of the calling user.
    pub async fn set_status(&self, next_status: UserStatus) -> Result<()> {
        self.client
            .put::<NoContent>("/users/setstatus", Some(json!({ "nextStatus": next_status })))
            .await?;
        Ok(())
    }

    /// Gets the availability of the calling user.
    pub async fn get_status(&self) -> Result<UserStatusResponse> {
        let Json(status) = self.client.get("/users/getstatus").await?;
        Ok(status)
    }

    /// Gets per-day status totals and transitions between `since` and
    /// `until`, optionally for a single user.
    pub async fn status_logs(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
        user_id: Option<Uuid>,
    ) -> Result<Vec<UserInfoData>> {
        let path = QueryBuilder::new()
            .param("since", since)
            .param("until", until)
            .param("userId", user_id)
            .apply("/users/statuslogs");

        let Json(logs) = self.client.get(&path).await?;
        Ok(logs)
    }

    /// Updates profile fields of the calling user.
    pub async fn update(&self, request: &UpdateUserRequest) -> Result<()> {
        self.client
            .post::<NoContent>("/users/update", json_body(request)?)
            .await?;
        Ok(())
    }

    /// Adds a user to the workspace.
    ///
    /// # Arguments
    ///
    /// * `request` - User name and optional unique argument
    /// * `user_type` - Account kind
    /// * `role` - Role name to grant, e.g. `SystemAdmin`
    pub async fn add(&self, request: &AddUserRequest, user_type: UserType, role: &str) -> Result<()> {
        require_non_empty(&request.user_name, "user name")?;
        require_non_empty(role, "role")?;

        let path = QueryBuilder::new()
            .param("userType", user_type)
            .param("role", role)
            .apply("/users/add");

        self.client
            .post::<NoContent>(&path, json_body(request)?)
            .await?;
        Ok(())
    }

    /// Removes a user from the workspace.
    ///
    /// # Returns
    ///
    /// The departments the user was removed from.
    pub async fn delete(&self, user_name: &str) -> Result<DeleteUserResponse> {
        require_non_empty(user_name, "user name")?;

        let path = QueryBuilder::new()
            .param("UserName", user_name)
            .apply("/users/delete");

        let Json(response) = self.client.delete(&path).await?;
        Ok(response)
    }

    /// Sets the external unique argument of a user.
    pub async fn set_unique_argument(&self, user_name: &str, unique_argument: &str) -> Result<()> {
        require_non_empty(user_name, "user name")?;

        let body = json!({ "userName": user_name, "nextUniqueArgument": unique_argument });
        self.client
            .put::<NoContent>("/users/setuniqueargument", Some(body))
            .await?;
        Ok(())
    }

    /// Finds a user by external unique argument.
    pub async fn get_by_unique_argument(&self, unique_argument: &str) -> Result<User> {
        require_non_empty(unique_argument, "unique argument")?;

        let path = QueryBuilder::new()
            .param("uniqueArgument", unique_argument)
            .apply("/users/getbyuniqueargument");

        let Json(user) = self.client.get(&path).await?;
        Ok(user)
    }

    /// Replaces the roles of a user.
    pub async fn set_roles<I, S>(&self, user_name: &str, roles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        require_non_empty(user_name, "user name")?;
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();

        let path = QueryBuilder::new()
            .param("userName", user_name)
            .apply("/users/setroles");

        self.client
            .post::<NoContent>(&path, json_body(&roles)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client_for, server_with_token};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_all_users() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/users/allusers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"UserName": "agent@acme.com", "type": "AGENT", "status": "Online"},
                {"userName": "bot@acme.com", "type": "BOT"}
            ])))
            .mount(&server)
            .await;

        let users = client_for(&server).users().all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_name.as_deref(), Some("agent@acme.com"));
        assert_eq!(users[0].status, Some(UserStatus::Online));
        assert_eq!(users[1].user_type, Some(UserType::Bot));
    }

    #[tokio::test]
    async fn test_status_round_trip() {
        let server = server_with_token().await;
        Mock::given(method("PUT"))
            .and(path("/users/setstatus"))
            .and(body_json(json!({"nextStatus": "Break2"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/getstatus"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": "Break2", "_Status": 2})),
            )
            .mount(&server)
            .await;

        let users = client_for(&server).users();
        users.set_status(UserStatus::Break2).await.unwrap();
        let status = users.get_status().await.unwrap();
        assert_eq!(status.status, Some(UserStatus::Break2));
        assert_eq!(status.status_code, Some(2));
    }

    #[tokio::test]
    async fn test_status_logs_query() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/users/statuslogs"))
            .and(query_param("since", "01/05/2024 08:00:00:00"))
            .and(query_param("until", "02/05/2024 08:00:00:00"))
            .and(query_param_is_missing("userId"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "userName": "agent@acme.com",
                "dates": [{
                    "date": "2024-05-01T00:00:00",
                    "totalOnlineTime": "07:45:00",
                    "statusLogs": [{"dateTime": "2024-05-01T08:00:00", "nextStatus": "Online"}]
                }]
            }])))
            .mount(&server)
            .await;

        let since = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let until = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        let logs = client_for(&server)
            .users()
            .status_logs(since, until, None)
            .await
            .unwrap();
        assert_eq!(logs.len(), 1);
        let day = &logs[0].dates[0];
        assert_eq!(day.total_online_time.as_deref(), Some("07:45:00"));
        assert_eq!(day.status_logs[0].next_status.as_deref(), Some("Online"));
    }

    #[tokio::test]
    async fn test_add_user_query_and_body() {
        let server = server_with_token().await;
        Mock::given(method("POST"))
            .and(path("/users/add"))
            .and(query_param("userType", "AGENT"))
            .and(query_param("role", "SystemUser"))
            .and(body_json(json!({"userName": "new@acme.com", "uniqueArgument": "emp-7"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let request = AddUserRequest {
            user_name: "new@acme.com".to_string(),
            unique_argument: Some("emp-7".to_string()),
        };
        client_for(&server)
            .users()
            .add(&request, UserType::Agent, "SystemUser")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_uses_pascal_case() {
        let server = server_with_token().await;
        Mock::given(method("POST"))
            .and(path("/users/update"))
            .and(body_json(json!({"FullName": "Dana Scully", "JobTitle": "Agent"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdateUserRequest {
            full_name: Some("Dana Scully".to_string()),
            job_title: Some("Agent".to_string()),
            ..UpdateUserRequest::default()
        };
        client_for(&server).users().update(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_user() {
        let server = server_with_token().await;
        Mock::given(method("DELETE"))
            .and(path("/users/delete"))
            .and(query_param("UserName", "old@acme.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "deleted",
                "deletedFromDepartments": ["sales"]
            })))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .users()
            .delete("old@acme.com")
            .await
            .unwrap();
        assert_eq!(response.deleted_from_departments, vec!["sales".to_string()]);
    }

    #[tokio::test]
    async fn test_unique_argument_endpoints() {
        let server = server_with_token().await;
        Mock::given(method("PUT"))
            .and(path("/users/setuniqueargument"))
            .and(body_json(json!({"userName": "agent@acme.com", "nextUniqueArgument": "emp-1"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/getbyuniqueargument"))
            .and(query_param("uniqueArgument", "emp-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"userName": "agent@acme.com", "uniqueArgument": "emp-1"})),
            )
            .mount(&server)
            .await;

        let users = client_for(&server).users();
        users.set_unique_argument("agent@acme.com", "emp-1").await.unwrap();
        let user = users.get_by_unique_argument("emp-1").await.unwrap();
        assert_eq!(user.user_name.as_deref(), Some("agent@acme.com"));
    }

    #[tokio::test]
    async fn test_set_roles() {
        let server = server_with_token().await;
        Mock::given(method("POST"))
            .and(path("/users/setroles"))
            .and(query_param("userName", "agent@acme.com"))
            .and(body_json(json!(["SystemUser", "Reports"])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .users()
            .set_roles("agent@acme.com", ["SystemUser", "Reports"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_user_name_is_rejected() {
        let server = MockServer::start().await;
        let users = client_for(&server).users();
        assert!(users.delete(" ").await.unwrap_err().is_usage_error());
        assert!(users
            .set_roles("", ["SystemUser"])
            .await
            .unwrap_err()
            .is_usage_error());
        assert!(users
            .get_by_unique_argument("")
            .await
            .unwrap_err()
            .is_usage_error());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
