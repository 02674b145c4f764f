//! `/contacts/*` endpoints.

use serde_json::json;
use uuid::Uuid;

use super::{json_body, require_non_empty};
use crate::client::{GlassixClient, Json};
use crate::error::Result;
use crate::models::{AddIdentifierRequest, Contact, IdentifierType, MessageResponse};
use crate::query::QueryBuilder;

/// Client for contact operations.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    client: GlassixClient,
}

impl ContactsClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Gets a contact by ID.
    pub async fn get(&self, contact_id: Uuid) -> Result<Contact> {
        let Json(contact) = self
            .client
            .get(&format!("/contacts/get/{}", contact_id))
            .await?;
        Ok(contact)
    }

    /// Renames a contact.
    pub async fn set_name(&self, contact_id: Uuid, next_name: &str) -> Result<MessageResponse> {
        require_non_empty(next_name, "contact name")?;

        let Json(response) = self
            .client
            .put(
                &format!("/contacts/setname/{}", contact_id),
                Some(json!({ "nextName": next_name })),
            )
            .await?;
        Ok(response)
    }

    /// Adds an identifier (phone, mail address, ...) to a contact.
    ///
    /// With `force_merge`, a contact already owning the identifier is merged
    /// into this one.
    pub async fn add_identifier(
        &self,
        contact_id: Uuid,
        identifier_type: IdentifierType,
        identifier: &str,
        force_merge: bool,
    ) -> Result<MessageResponse> {
        require_non_empty(identifier, "identifier")?;

        let request = AddIdentifierRequest {
            force_merge,
            identifier_type,
            identifier: identifier.to_string(),
        };
        let Json(response) = self
            .client
            .post(
                &format!("/contacts/addidentifier/{}", contact_id),
                json_body(&request)?,
            )
            .await?;
        Ok(response)
    }

    /// Sets the external unique argument of a contact.
    pub async fn set_unique_argument(
        &self,
        contact_id: Uuid,
        next_unique_argument: &str,
    ) -> Result<MessageResponse> {
        let Json(response) = self
            .client
            .put(
                &format!("/contacts/setuniqueargument/{}", contact_id),
                Some(json!({ "nextUniqueArgument": next_unique_argument })),
            )
            .await?;
        Ok(response)
    }

    /// Removes one identifier from a contact.
    pub async fn delete_identifier(
        &self,
        contact_id: Uuid,
        contact_identifier_id: i64,
    ) -> Result<MessageResponse> {
        let path = QueryBuilder::new()
            .param("contactIdentifierId", contact_identifier_id)
            .apply(&format!("/contacts/deleteidentifier/{}", contact_id));

        let Json(response) = self.client.delete(&path).await?;
        Ok(response)
    }
}
