//! Contact models for the Glassix API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{timestamp, wire_enum};

/// A customer contact, merged across channels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Channel addresses known for this contact.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<ContactIdentifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_argument: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_file_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<DateTime<Utc>>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub update_date_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scrambled: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Contact {
    /// Returns the first identifier of the given kind.
    pub fn identifier(&self, identifier_type: IdentifierType) -> Option<&ContactIdentifier> {
        self.identifiers
            .iter()
            .find(|i| i.identifier_type == Some(identifier_type))
    }
}

wire_enum! {
    /// Kind of channel address stored on a contact.
    pub enum IdentifierType {
        Undefined => "Undefined",
        PhoneNumber => "PhoneNumber",
        MailAddress => "MailAddress",
        FacebookId => "FacebookId",
        InstagramId => "InstagramId",
        Web => "Web",
        InstagramIgsid => "InstagramIGSID",
        ClientViberId => "ClientViberID",
        ClientAppleBusinessChatId => "ClientAppleBusinessChatID",
        ClientTwitterId => "ClientTwitterId",
        ClientGoogleBusinessMessagesId => "ClientGoogleBusinessMessagesId",
        ClientGoogleBusinessReviewerId => "ClientGoogleBusinessReviewerId",
        TikTokId => "TikTokId",
    }
}

/// One channel address of a contact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<IdentifierType>,
    /// Phone number, email address, platform ID, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scrambled: Option<bool>,
}

/// Body of `POST /contacts/addidentifier/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddIdentifierRequest {
    /// Merge with the contact that already owns this identifier.
    pub force_merge: bool,
    pub identifier_type: IdentifierType,
    pub identifier: String,
}
