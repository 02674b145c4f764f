//! `/tickets/*` endpoints.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use super::{json_body, require_non_empty};
use crate::client::{GlassixClient, Json, NoContent, RawBytes, RawText};
use crate::error::{GlassixError, Result};
use crate::models::{
    CreateTicketRequest, MessageResponse, SendMessageRequest, SetDepartmentResponse,
    SetStateOptions, SetTicketFieldsRequest, SetTicketStateRequest, SortOrder,
    SurveyLinkResponse, Ticket, TicketListResponse, TicketRenderOptions, TicketState,
    Transaction,
};
use crate::query::QueryBuilder;

/// Client for ticket operations.
#[derive(Debug, Clone)]
pub struct TicketsClient {
    client: GlassixClient,
}

impl TicketsClient {
    pub(crate) fn new(client: GlassixClient) -> Self {
        Self { client }
    }

    /// Creates a ticket.
    ///
    /// # Arguments
    ///
    /// * `request` - Ticket fields, participants and creation flags
    ///
    /// # Returns
    ///
    /// The created ticket as stored by Glassix.
    pub async fn create(&self, request: &CreateTicketRequest) -> Result<Ticket> {
        let Json(ticket) = self
            .client
            .post("/tickets/create", json_body(request)?)
            .await?;
        Ok(ticket)
    }

    /// Gets a ticket by ID.
    pub async fn get(&self, ticket_id: i64) -> Result<Ticket> {
        let Json(ticket) = self
            .client
            .get(&format!("/tickets/get/{}", ticket_id))
            .await?;
        Ok(ticket)
    }

    /// Lists tickets whose last activity falls between `since` and `until`.
    ///
    /// # Arguments
    ///
    /// * `since` / `until` - Time window
    /// * `state` - Only tickets in this state
    /// * `sort_order` - Sort direction
    /// * `page` - Cursor from a previous `TicketListResponse::next_page`
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut page = None;
    /// loop {
    ///     let result = client.tickets().list(since, until, None, None, page.as_deref()).await?;
    ///     handle(&result.tickets);
    ///     match result.next_page() {
    ///         Some(next) => page = Some(next.to_string()),
    ///         None => break,
    ///     }
    /// }
    /// ```
    pub async fn list(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
        state: Option<TicketState>,
        sort_order: Option<SortOrder>,
        page: Option<&str>,
    ) -> Result<TicketListResponse> {
        let path = QueryBuilder::new()
            .param("since", since)
            .param("until", until)
            .param("ticketState", state)
            .param("sortOrder", sort_order)
            .param("page", page)
            .apply("/tickets/list");

        let Json(list) = self.client.get(&path).await?;
        Ok(list)
    }

    /// Sends a message on a ticket.
    ///
    /// # Returns
    ///
    /// The transaction created for the message.
    pub async fn send_message(
        &self,
        ticket_id: i64,
        request: &SendMessageRequest,
    ) -> Result<Transaction> {
        let Json(transaction) = self
            .client
            .post(&format!("/tickets/send/{}", ticket_id), json_body(request)?)
            .await?;
        Ok(transaction)
    }

    /// Moves a ticket to `next_state`.
    ///
    /// `body` optionally carries tags and a summary to apply with the change.
    pub async fn set_state(
        &self,
        ticket_id: i64,
        next_state: TicketState,
        options: SetStateOptions,
        body: Option<&SetTicketStateRequest>,
    ) -> Result<MessageResponse> {
        let path = QueryBuilder::new()
            .param("nextState", next_state)
            .param("getTicket", options.get_ticket)
            .param(
                "sendTicketStateChangedMessage",
                options.send_ticket_state_changed_message,
            )
            .param("enableWebhook", options.enable_webhook)
            .apply(&format!("/tickets/setstate/{}", ticket_id));

        let body = match body {
            Some(body) => json_body(body)?,
            None => None,
        };

        let Json(response) = self.client.put(&path, body).await?;
        Ok(response)
    }

    /// Updates custom fields, unique argument or details of a ticket.
    pub async fn set_fields(&self, ticket_id: i64, request: &SetTicketFieldsRequest) -> Result<()> {
        self.client
            .put::<NoContent>(&format!("/tickets/setfields/{}", ticket_id), json_body(request)?)
            .await?;
        Ok(())
    }

    /// Adds tags to a ticket.
    ///
    /// # Returns
    ///
    /// The ticket's tags after the change.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Validation` if `tags` is empty or contains an
    /// empty tag.
    pub async fn add_tags<I, S>(&self, ticket_id: i64, tags: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(GlassixError::validation("at least one tag is required"));
        }
        if tags.iter().any(|t| t.trim().is_empty()) {
            return Err(GlassixError::validation("tags cannot be empty"));
        }

        let Json(current) = self
            .client
            .post(&format!("/tickets/addtags/{}", ticket_id), json_body(&tags)?)
            .await?;
        Ok(current)
    }

    /// Removes one tag from a ticket.
    ///
    /// # Returns
    ///
    /// The ticket's tags after the change.
    pub async fn remove_tag(&self, ticket_id: i64, tag: &str) -> Result<Vec<String>> {
        require_non_empty(tag, "tag")?;

        let path = QueryBuilder::new()
            .param("tag", tag)
            .apply(&format!("/tickets/removetag/{}", ticket_id));

        let Json(current) = self.client.delete(&path).await?;
        Ok(current)
    }

    /// Renames a participant of a ticket.
    pub async fn set_participant_name(
        &self,
        ticket_id: i64,
        participant_id: i64,
        name: &str,
    ) -> Result<()> {
        require_non_empty(name, "participant name")?;

        let body = json!({ "id": participant_id, "name": name });
        self.client
            .put::<NoContent>(
                &format!("/tickets/setparticipantname/{}", ticket_id),
                Some(body),
            )
            .await?;
        Ok(())
    }

    /// Assigns a ticket to another user.
    ///
    /// # Arguments
    ///
    /// * `next_owner_user_name` - User name of the new owner
    /// * `keep_current_owner` - Keep the previous owner in the conversation
    pub async fn set_owner(
        &self,
        ticket_id: i64,
        next_owner_user_name: &str,
        keep_current_owner: bool,
    ) -> Result<()> {
        require_non_empty(next_owner_user_name, "owner user name")?;

        let path = QueryBuilder::new()
            .param("keepCurrentOwnerInConversation", keep_current_owner)
            .param("nextOwnerUserName", next_owner_user_name)
            .apply(&format!("/tickets/setowner/{}", ticket_id));

        self.client.put::<NoContent>(&path, None).await?;
        Ok(())
    }

    /// Assigns the ticket to an available agent.
    pub async fn assign_available_user(&self, ticket_id: i64) -> Result<()> {
        self.client
            .put::<NoContent>(&format!("/tickets/assignavailableuser/{}", ticket_id), None)
            .await?;
        Ok(())
    }

    /// Moves a ticket to another department.
    ///
    /// # Returns
    ///
    /// The ID of the ticket in the target department.
    pub async fn set_department(&self, ticket_id: i64, department_id: Uuid) -> Result<i64> {
        let body = json!({ "departmentId": department_id.to_string() });
        let Json(response) = self
            .client
            .put::<Json<SetDepartmentResponse>>(
                &format!("/tickets/setdepartment/{}", ticket_id),
                Some(body),
            )
            .await?;
        Ok(response.ticket_id)
    }

    /// Adds an internal note, visible to agents only.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Validation` if both `text` and `html` are
    /// missing or empty.
    pub async fn add_note(
        &self,
        ticket_id: i64,
        text: Option<&str>,
        html: Option<&str>,
    ) -> Result<()> {
        let text = text.filter(|t| !t.is_empty());
        let html = html.filter(|h| !h.is_empty());
        if text.is_none() && html.is_none() {
            return Err(GlassixError::validation("either text or html must be provided"));
        }

        let body = json!({ "text": text, "html": html });
        self.client
            .post::<NoContent>(&format!("/tickets/addnote/{}", ticket_id), Some(body))
            .await?;
        Ok(())
    }

    /// Irreversibly scrambles the personal data of a ticket.
    pub async fn scramble(&self, ticket_id: i64) -> Result<()> {
        self.client
            .delete::<NoContent>(&format!("/tickets/scramble/{}", ticket_id))
            .await?;
        Ok(())
    }

    /// Renders the ticket as a PDF document.
    pub async fn pdf(&self, ticket_id: i64, options: &TicketRenderOptions) -> Result<Vec<u8>> {
        let RawBytes(bytes) = self
            .client
            .post(&format!("/tickets/pdf/{}", ticket_id), json_body(options)?)
            .await?;
        Ok(bytes)
    }

    /// Renders the ticket as an HTML document.
    pub async fn html(&self, ticket_id: i64, options: &TicketRenderOptions) -> Result<String> {
        let RawText(html) = self
            .client
            .post(&format!("/tickets/html/{}", ticket_id), json_body(options)?)
            .await?;
        Ok(html)
    }

    /// Generates a survey link for a participant of the ticket.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Decode` if the response carries no link.
    pub async fn generate_survey_link(
        &self,
        ticket_id: i64,
        survey_id: i64,
        participant_id: i64,
    ) -> Result<String> {
        let body = json!({ "surveyId": survey_id, "participantId": participant_id });
        let Json(response) = self
            .client
            .post::<Json<SurveyLinkResponse>>(
                &format!("/tickets/generatesurveylink/{}", ticket_id),
                Some(body),
            )
            .await?;
        response
            .survey_link
            .filter(|link| !link.is_empty())
            .ok_or_else(|| GlassixError::Decode("response did not include a survey link".to_string()))
    }

    /// Sets the summary text of a ticket.
    pub async fn set_summary(&self, ticket_id: i64, summary: &str) -> Result<()> {
        let body = json!({ "summary": summary });
        self.client
            .post::<NoContent>(&format!("/tickets/setsummary/{}", ticket_id), Some(body))
            .await?;
        Ok(())
    }
}
