//! Webhook event models for the Glassix API.
//!
//! Events are pulled from `/webhooks/getevents` (or pushed to a webhook
//! endpoint) and acknowledged back through `/webhooks/deleteevents`, so
//! every type here round-trips through serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::timestamp;
use super::{Participant, Ticket, Transaction, UserStatus};

/// A batch of changes delivered together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Event key, e.g. `NEW_TICKET` or `TICKET_STATE_CHANGE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<WebhookChange>,

    /// Receipt handle required to delete a pulled event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_receipt_handle: Option<String>,

    /// Queue message ID required to delete a pulled event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_message_id: Option<String>,
}

impl WebhookEvent {
    /// Returns true if the event carries both queue handles needed to
    /// acknowledge it.
    pub fn is_deletable(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.queue_receipt_handle) && present(&self.queue_message_id)
    }
}

/// One change inside a webhook event. Which fields are set depends on the
/// event key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookChange {
    #[serde(rename = "_event", alias = "event", default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Box<Ticket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub do_not_disturb: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surveys: Option<serde_json::Value>,
}
