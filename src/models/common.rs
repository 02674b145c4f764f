//! Common types shared across Glassix API models.
//!
//! This module defines the `wire_enum!` macro used by every enumeration
//! that crosses the wire, the timestamp serde helpers, and small
//! response shapes reused by several endpoints.

use serde::{Deserialize, Serialize};

/// Declares an enumeration whose variants travel as fixed strings.
///
/// Each variant names its exact wire string. The macro derives serde
/// support (unknown strings fail to deserialize), `as_str()`, `Display`
/// and the conversion into a query-string value.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the exact string used on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for crate::query::QueryValue {
            fn from(value: $name) -> Self {
                crate::query::QueryValue::Enum(value.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Messaging channel a participant or message belongs to.
    pub enum ProtocolType {
        /// SMS.
        Sms => "SMS",
        /// WhatsApp.
        WhatsApp => "WhatsApp",
        /// Email.
        Mail => "Mail",
        /// Web chat.
        Web => "Web",
        /// Facebook Messenger.
        #[serde(alias = "FacebookMessenger")]
        FacebookMessenger => "FBmessenger",
        /// Web chat continued over SMS.
        WebViaSms => "WebViaSMS",
        /// Telegram bot.
        TelegramBot => "TelegramBot",
        /// Facebook page feed.
        FacebookFeed => "FacebookFeed",
        /// Instagram feed.
        InstagramFeed => "InstagramFeed",
        /// Voice call.
        PhoneCall => "PhoneCall",
        /// Viber.
        Viber => "Viber",
        /// Apple Business Chat.
        AppleBusinessChat => "AppleBusinessChat",
        /// Google Business Messages.
        GoogleBusinessMessages => "GoogleBusinessMessages",
        /// Google Business reviews.
        GoogleBusinessReviews => "GoogleBusinessReviews",
        /// Unknown channel.
        Undefined => "Undefined",
    }
}

wire_enum! {
    /// Sort direction for list endpoints.
    pub enum SortOrder {
        /// Oldest first.
        Ascending => "ASC",
        /// Newest first.
        Descending => "DESC",
    }
}

/// Generic `{ "message": "..." }` acknowledgement returned by several
/// mutation endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable result message.
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

/// Serde helpers for Glassix timestamps.
///
/// The API emits both RFC 3339 strings and offset-less ISO 8601 strings
/// (the latter are UTC). Values are always written back as RFC 3339.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

    /// Parses a timestamp in any of the accepted formats.
    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Formats a timestamp the way it is sent to the API.
    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// `#[serde(with = "timestamp::option")]` for `Option<DateTime<Utc>>` fields.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        /// Serializes an optional timestamp.
        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(dt) => serializer.serialize_str(&super::format(dt)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional timestamp; empty strings become `None`.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw {
                None => Ok(None),
                Some(s) if s.trim().is_empty() => Ok(None),
                Some(s) => super::parse(&s)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_protocol_type_wire_names() {
        assert_eq!(ProtocolType::FacebookMessenger.as_str(), "FBmessenger");
        assert_eq!(
            serde_json::to_string(&ProtocolType::WebViaSms).unwrap(),
            "\"WebViaSMS\""
        );
    }

    #[test]
    fn test_protocol_type_accepts_alias() {
        let parsed: ProtocolType = serde_json::from_str("\"FacebookMessenger\"").unwrap();
        assert_eq!(parsed, ProtocolType::FacebookMessenger);
    }

    #[test]
    fn test_unknown_enum_string_is_rejected() {
        let parsed = serde_json::from_str::<SortOrder>("\"Sideways\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_sort_order_display() {
        assert_eq!(SortOrder::Descending.to_string(), "DESC");
    }

    #[test]
    fn test_message_response_accepts_pascal_case() {
        let parsed: MessageResponse = serde_json::from_str(r#"{"Message":"done"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("done"));
    }

    #[test]
    fn test_timestamp_parse_offsetless() {
        let dt = timestamp::parse("2024-01-02T03:04:05.06").unwrap();
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 3);
        assert_eq!(dt.nanosecond(), 60_000_000);
    }

    #[test]
    fn test_timestamp_parse_rfc3339_converts_to_utc() {
        let dt = timestamp::parse("2024-01-02T05:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 3);
    }

    #[test]
    fn test_timestamp_parse_rejects_garbage() {
        assert!(timestamp::parse("yesterday").is_none());
    }
}
