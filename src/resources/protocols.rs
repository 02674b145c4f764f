//! `/protocols/*` endpoints.

use super::json_body;
use crate::client::{GlassixClient, Json};
use crate::error::Result;
use crate::models::ProtocolMessage;

/// Client for sending raw channel messages outside of a ticket.
#[derive(Debug, Clone)]
pub struct ProtocolsClient {
    client: GlassixClient,
}

impl ProtocolsClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Sends a message on a channel.
    ///
    /// # Returns
    ///
    /// The message as accepted by Glassix, including provider metadata.
    pub async fn send(&self, message: &ProtocolMessage) -> Result<ProtocolMessage> {
        let Json(sent) = self
            .client
            .post("/protocols/send", json_body(message)?)
            .await?;
        Ok(sent)
    }
}
