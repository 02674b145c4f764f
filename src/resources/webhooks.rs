//! `/webhooks/*` endpoints and inbound signature checks.

use super::json_body;
use crate::client::{GlassixClient, Json, NoContent};
use crate::error::{GlassixError, Result};
use crate::models::WebhookEvent;
use crate::query::QueryBuilder;
use crate::webhook::{HeaderSource, WebhookVerifier};

/// Client for polled webhook events.
#[derive(Debug, Clone)]
pub struct WebhooksClient {
    client: GlassixClient,
}

impl WebhooksClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Pulls pending events.
    ///
    /// With `delete_events`, Glassix removes the events from the queue as
    /// they are returned. Otherwise they must be acknowledged through
    /// [`delete_events`](Self::delete_events).
    pub async fn get_events(&self, delete_events: bool) -> Result<Vec<WebhookEvent>> {
        let path = QueryBuilder::new()
            .param("deleteEvents", delete_events)
            .apply("/webhooks/getevents");

        let Json(events) = self.client.get(&path).await?;
        Ok(events)
    }

    /// Acknowledges pulled events so they are not delivered again.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Validation` if `events` is empty or any event
    /// lacks its queue receipt handle or message ID.
    pub async fn delete_events(&self, events: &[WebhookEvent]) -> Result<()> {
        if events.is_empty() {
            return Err(GlassixError::validation("events cannot be empty"));
        }
        if !events.iter().all(WebhookEvent::is_deletable) {
            return Err(GlassixError::validation(
                "queueReceiptHandle and queueMessageId cannot be empty",
            ));
        }

        tracing::debug!(count = events.len(), "Deleting webhook events");

        self.client
            .post::<NoContent>("/webhooks/deleteevents", json_body(events)?)
            .await?;
        Ok(())
    }

    /// Checks the `X-Glassix-Auth` signature of an inbound webhook request
    /// against the workspace API secret.
    pub fn is_request_valid<H: HeaderSource + ?Sized>(&self, headers: &H) -> bool {
        WebhookVerifier::new(self.client.credentials().api_secret()).is_valid(headers)
    }
}
