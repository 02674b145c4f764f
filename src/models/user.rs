//! User (agent, bot and API user) models for the Glassix API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{timestamp, wire_enum};

wire_enum! {
    /// Availability of an agent.
    pub enum UserStatus {
        Offline => "Offline",
        Break => "Break",
        Break2 => "Break2",
        Break3 => "Break3",
        Break4 => "Break4",
        Break5 => "Break5",
        Online => "Online",
    }
}

wire_enum! {
    /// Gender recorded on a user profile.
    pub enum Gender {
        Undefined => "Undefined",
        Male => "Male",
        Female => "Female",
        NotApplicable => "notApplicable",
    }
}

wire_enum! {
    /// Kind of user account.
    pub enum UserType {
        Undefined => "UNDEFINED",
        Agent => "AGENT",
        Bot => "BOT",
        Api => "API",
    }
}

/// A user of the workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Login email.
    #[serde(default, alias = "UserName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_argument: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl User {
    /// Returns the display name, falling back to the short name or user name.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .or(self.short_name.as_deref())
            .or(self.user_name.as_deref())
    }
}

/// Response of `GET /users/getstatus`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserStatusResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<UserStatus>,
    /// Numeric form of the status.
    #[serde(rename = "_Status", alias = "_status", default)]
    pub status_code: Option<i32>,
}

/// Per-user entry of `GET /users/statuslogs`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoData {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub dates: Vec<UserDateData>,
}

/// Daily status totals for one user.
///
/// Durations are .NET TimeSpan strings (`d.hh:mm:ss.fffffff`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDateData {
    #[serde(default, with = "timestamp::option")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_online_time: Option<String>,
    #[serde(default)]
    pub total_break_time: Option<String>,
    #[serde(default)]
    pub total_break2_time: Option<String>,
    #[serde(default)]
    pub total_break3_time: Option<String>,
    #[serde(default)]
    pub total_break4_time: Option<String>,
    #[serde(default)]
    pub total_break5_time: Option<String>,
    #[serde(default)]
    pub total_offline_time: Option<String>,
    #[serde(default)]
    pub status_logs: Vec<UserStatusLog>,
}

/// One status transition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusLog {
    #[serde(default, with = "timestamp::option")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_status: Option<String>,
    #[serde(default)]
    pub do_not_disturb: Option<bool>,
}

/// Body of `POST /users/add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_argument: Option<String>,
}

/// Body of `POST /users/update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// Response of `DELETE /users/delete`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteUserResponse {
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default, rename = "deletedFromDepartments", alias = "DeletedFromDepartments")]
    pub deleted_from_departments: Vec<String>,
}
