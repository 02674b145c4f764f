//! `/tenants/*` endpoints.

use uuid::Uuid;

use crate::client::{GlassixClient, Json};
use crate::error::Result;
use crate::models::{ProtocolType, Tag};
use crate::query::QueryBuilder;

/// Client for tenant-level queries.
#[derive(Debug, Clone)]
pub struct TenantsClient {
    client: GlassixClient,
}

impl TenantsClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Returns true if the department has an available agent, optionally
    /// on a specific channel.
    ///
    /// This endpoint is public: no token is fetched or sent.
    pub async fn is_online(
        &self,
        department_id: Uuid,
        protocol_type: Option<ProtocolType>,
    ) -> Result<bool> {
        let path = QueryBuilder::new()
            .param("departmentId", department_id)
            .param("protocolType", protocol_type)
            .apply("/tenants/isonline");

        let Json(online) = self
            .client
            .send(reqwest::Method::GET, &path, None, false)
            .await?;
        Ok(online)
    }

    /// Lists the ticket tags defined for the workspace.
    pub async fn tags(&self) -> Result<Vec<Tag>> {
        let Json(tags) = self.client.get("/tenants/gettags").await?;
        Ok(tags)
    }
}
