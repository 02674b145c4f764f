//! Canned reply models for the Glassix API.

use serde::{Deserialize, Serialize};

/// Predefined answer an agent can insert into a conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CannedReply {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    /// Sort rank within the category.
    #[serde(default)]
    pub rank: i32,
    /// Tags applied to the ticket when the reply is used.
    #[serde(default)]
    pub auto_tags: Vec<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
}
