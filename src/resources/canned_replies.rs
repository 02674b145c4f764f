//! `/cannedreplies/*` endpoints.

use crate::client::{GlassixClient, Json};
use crate::error::Result;
use crate::models::CannedReply;

/// Client for canned replies.
#[derive(Debug, Clone)]
pub struct CannedRepliesClient {
    client: GlassixClient,
}

impl CannedRepliesClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Lists every canned reply of the workspace.
    pub async fn all(&self) -> Result<Vec<CannedReply>> {
        let Json(replies) = self.client.get("/cannedreplies/getall").await?;
        Ok(replies)
    }
}
