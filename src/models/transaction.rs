//! Conversation content: transactions, attachments, participants and bot
//! flow variables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{timestamp, wire_enum, ProtocolType};

/// A single message or event within a ticket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Globally unique transaction ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid_transaction_id: Option<Uuid>,

    /// Sequential ID within the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,

    /// Channel the transaction came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_protocol_type: Option<ProtocolType>,

    /// Transaction kind, e.g. `Message` or `Note`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Delivery status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_participant: Option<Participant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    /// Channel-specific payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Transaction {
    /// Returns the plain text, falling back to the HTML body.
    pub fn body(&self) -> Option<&str> {
        self.text.as_deref().or(self.html.as_deref())
    }
}

wire_enum! {
    /// Malware scan state of an attachment.
    pub enum SanitizationState {
        Undefined => "Undefined",
        Allowed => "Allowed",
        Blocked => "Blocked",
        Processing => "Processing",
    }
}

/// File attached to a transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// MIME type or attachment kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails_file_identifiers: Option<Vec<String>>,
    /// Download URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Whether the file is inlined in the HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_embedded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitization_state: Option<SanitizationState>,
}

/// A party to a conversation: customer, agent or bot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// `Client` or `User`.
    #[serde(rename = "type", alias = "Type", default, skip_serializing_if = "Option::is_none")]
    pub participant_type: Option<String>,
    #[serde(default, alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, alias = "ProtocolType", skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<ProtocolType>,
    #[serde(default, alias = "SubProtocolType", skip_serializing_if = "Option::is_none")]
    pub sub_protocol_type: Option<String>,
    #[serde(default, alias = "IsActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, alias = "IsDeleted", skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    /// Channel address: phone number, email, page-scoped ID, ...
    #[serde(default, alias = "Identifier", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, alias = "DepartmentIdentifier", skip_serializing_if = "Option::is_none")]
    pub department_identifier: Option<String>,
    #[serde(default, alias = "ContactId", skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default, alias = "UserName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Participant {
    /// Creates a customer participant reachable on the given channel.
    pub fn client(
        name: impl Into<String>,
        protocol_type: ProtocolType,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            participant_type: Some("Client".to_string()),
            name: Some(name.into()),
            protocol_type: Some(protocol_type),
            identifier: Some(identifier.into()),
            ..Self::default()
        }
    }

    /// Returns the display name, falling back to name or identifier.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.identifier.as_deref())
    }
}

/// Variable captured by a bot flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int_value: Option<i64>,
    /// Which of the typed values is meaningful.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub creation_datetime: Option<DateTime<Utc>>,
}
