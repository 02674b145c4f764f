//! Per-area clients for the Glassix REST API.
//!
//! Each client is a thin, cheaply cloned wrapper around [`GlassixClient`]
//! that builds paths, query strings and bodies for one API area. Argument
//! checks run before any network I/O and fail with
//! `GlassixError::Validation`.

mod canned_replies;
mod contacts;
mod protocols;
mod tenants;
mod tickets;
mod users;
mod webhooks;

pub use canned_replies::CannedRepliesClient;
pub use contacts::ContactsClient;
pub use protocols::ProtocolsClient;
pub use tenants::TenantsClient;
pub use tickets::TicketsClient;
pub use users::UsersClient;
pub use webhooks::WebhooksClient;

use serde::Serialize;

use crate::client::GlassixClient;
use crate::error::{GlassixError, Result};

impl GlassixClient {
    /// Ticket operations.
    pub fn tickets(&self) -> TicketsClient {
        TicketsClient::new(self.clone())
    }

    /// Contact operations.
    pub fn contacts(&self) -> ContactsClient {
        ContactsClient::new(self.clone())
    }

    /// User operations.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }

    /// Raw protocol messaging.
    pub fn protocols(&self) -> ProtocolsClient {
        ProtocolsClient::new(self.clone())
    }

    /// Webhook event polling and signature checks.
    pub fn webhooks(&self) -> WebhooksClient {
        WebhooksClient::new(self.clone())
    }

    /// Tenant-level queries.
    pub fn tenants(&self) -> TenantsClient {
        TenantsClient::new(self.clone())
    }

    /// Canned replies.
    pub fn canned_replies(&self) -> CannedRepliesClient {
        CannedRepliesClient::new(self.clone())
    }
}

/// Serializes a request body.
fn json_body<T: Serialize + ?Sized>(value: &T) -> Result<Option<serde_json::Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

/// Fails with a validation error if `value` is empty or whitespace.
fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GlassixError::validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}
