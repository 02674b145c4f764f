//! Ticket models for the Glassix API.
//!
//! A ticket is a conversation with a customer. This module holds the ticket
//! record itself plus the request bodies of the `/tickets/*` endpoints.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{timestamp, wire_enum, ProtocolType};
use super::{DynamicParameter, Participant, Transaction, User};

wire_enum! {
    /// Lifecycle state of a ticket.
    pub enum TicketState {
        /// Not set.
        Undefined => "Undefined",
        /// Closed.
        Closed => "Closed",
        /// Open.
        Open => "Open",
        /// Snoozed until a later time.
        Snoozed => "Snoozed",
        /// Waiting on a third party.
        Pending => "Pending",
    }
}

/// A ticket as returned by `/tickets/get`, `/tickets/list` and webhooks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket ID, unique within a department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Department owning the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Uuid>,

    /// Custom field 1 (usually the subject).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field1: Option<String>,
    /// Custom field 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field2: Option<String>,
    /// Custom field 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field3: Option<String>,
    /// Custom field 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field4: Option<String>,
    /// Custom field 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field5: Option<String>,
    /// Custom field 6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field6: Option<String>,
    /// Custom field 7.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field7: Option<String>,
    /// Custom field 8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field8: Option<String>,
    /// Custom field 9.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field9: Option<String>,
    /// Custom field 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field10: Option<String>,

    /// Culture code, e.g. `en-US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,

    /// Ticket type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    /// Tags applied to the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Current owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,

    /// Current state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<TicketState>,

    /// When the ticket was opened.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub open: Option<DateTime<Utc>>,

    /// When the ticket was closed.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub close: Option<DateTime<Utc>>,

    /// Last activity on the ticket.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,

    /// Caller-defined unique argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_argument: Option<String>,

    /// Extra context (source page, referral, device).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<TicketDetails>,

    /// Channel the conversation started on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_protocol_type: Option<ProtocolType>,

    /// Ticket this one was moved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to_ticket_id: Option<i64>,
    /// Department this one was moved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to_department_id: Option<Uuid>,
    /// Ticket this one was moved from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_from_ticket_id: Option<i64>,
    /// Department this one was moved from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_from_department_id: Option<Uuid>,

    /// First inbound customer message.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub first_customer_message_date_time: Option<DateTime<Utc>>,
    /// First agent reply.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub first_agent_message_date_time: Option<DateTime<Utc>>,
    /// Agent that sent the first reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_agent_message_user_id: Option<Uuid>,
    /// Last inbound customer message.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_customer_message_date_time: Option<DateTime<Utc>>,
    /// Last agent reply.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_agent_message_date_time: Option<DateTime<Utc>>,
    /// First time an agent was allocated.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub first_agent_allocation_timestamp: Option<DateTime<Utc>>,
    /// Last time an agent was allocated.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_agent_allocation_timestamp: Option<DateTime<Utc>>,

    // Durations are .NET TimeSpan strings (`d.hh:mm:ss.fffffff`).
    /// Assignment to first response, wall clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_assign_to_response_time_gross: Option<String>,
    /// Assignment to first response, working hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_assign_to_response_time_net: Option<String>,
    /// Time in queue, wall clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_time_gross: Option<String>,
    /// Time in queue, working hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_time_net: Option<String>,
    /// First agent response time, wall clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_agent_response_time_gross: Option<String>,
    /// First agent response time, working hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_agent_response_time_net: Option<String>,
    /// Ticket duration, working hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_net: Option<String>,
    /// Ticket duration, wall clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_gross: Option<String>,
    /// Average agent response time, working hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_response_average_time_net: Option<String>,
    /// Total conversation time, working hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_conversation_time_net: Option<String>,

    /// Media files sent by agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_media_count: Option<i32>,
    /// Media files sent by the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_media_count: Option<i32>,
    /// Messages sent by agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_messages_count: Option<i32>,
    /// Messages sent by the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_messages_count: Option<i32>,
    /// Canned replies used by agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_canned_replies_count: Option<i32>,

    /// Current bot conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_conversation_id: Option<Uuid>,
    /// All bot conversations on this ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_conversations: Option<Vec<Uuid>>,
    /// Steps visited in bot flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_conversation_steps: Option<Vec<CardData>>,

    /// Whether the customer initiated the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_incoming: Option<bool>,
    /// Whether the ticket data was scrambled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scrambled: Option<bool>,

    /// Conversation participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,

    /// Messages and events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,

    /// Bot flow variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_parameters: Option<Vec<DynamicParameter>>,

    /// AI or agent-written summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_summary: Option<TicketSummary>,

    /// Nested ticket IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_tickets_ids: Option<Vec<i64>>,
    /// Parent ticket for nested tickets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_nested_ticket_id: Option<i64>,

    /// Whether the ticket was closed by an automation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_closed_automatically: Option<bool>,

    /// Number of transactions on the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions_count: Option<i32>,
}

impl Ticket {
    /// Returns field1 (the subject) or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.field1.as_deref().unwrap_or("(No subject)")
    }

    /// Returns true if the ticket is in the given state.
    pub fn is_in_state(&self, state: TicketState) -> bool {
        self.state == Some(state)
    }
}

/// Context about where a ticket came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetails {
    /// Browser user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Client IP address.
    #[serde(rename = "iPAddress", alias = "ipAddress", default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Geographic location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Bot cards path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards_path: Option<String>,
    /// Page the conversation started from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Link>,
    /// External link attached to the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Whether the customer is on a mobile device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mobile: Option<bool>,
    /// Claims from a verified identity token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_token_claims: Option<HashMap<String, String>>,
    /// Ad or campaign referral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral: Option<Referral>,
}

/// Titled link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Link title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Target URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Ad and campaign referral data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_parameters: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fb_post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_story_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_story_media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_root_tweet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tik_tok_video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tik_tok_comment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_source_url: Option<String>,
}

/// Ticket summary text and its author.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    /// User who last updated the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// When the summary was last updated.
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub last_update_timestamp: Option<DateTime<Utc>>,
    /// Summary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One step visited in a bot flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_conversation_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_version: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_card_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_friendly_name: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub visit_datetime: Option<DateTime<Utc>>,
}

/// One page of `/tickets/list`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListResponse {
    /// Tickets on this page.
    #[serde(default, alias = "Tickets")]
    pub tickets: Vec<Ticket>,

    /// Pagination cursor.
    #[serde(default, alias = "Paging")]
    pub paging: Option<Paging>,
}

impl TicketListResponse {
    /// Returns the cursor for the next page, if there is one.
    pub fn next_page(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .filter(|next| !next.is_empty())
    }
}

/// Pagination cursor returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paging {
    /// Opaque token or URL for the next page.
    #[serde(default, alias = "Next")]
    pub next: Option<String>,
}

/// Body of `POST /tickets/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field7: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field9: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field10: Option<String>,
    /// Culture code, default `en-US`.
    pub culture: String,
    /// Initial participants.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
    /// Initial tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_argument: Option<String>,
    /// Initial state, default `Open`.
    pub state: TicketState,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub open: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub close: Option<DateTime<Utc>>,
    /// Route to an available agent, default true.
    pub get_available_user: bool,
    /// Post the department's introduction message, default false.
    pub add_introduction_message: bool,
    /// Fire webhooks for the creation, default true.
    pub enable_webhook: bool,
    /// Mark the ticket as read, default false.
    pub mark_as_read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<TicketDetails>,
}

impl Default for CreateTicketRequest {
    fn default() -> Self {
        Self {
            field1: None,
            field2: None,
            field3: None,
            field4: None,
            field5: None,
            field6: None,
            field7: None,
            field8: None,
            field9: None,
            field10: None,
            culture: "en-US".to_string(),
            participants: Vec::new(),
            tags: Vec::new(),
            unique_argument: None,
            state: TicketState::Open,
            open: None,
            close: None,
            get_available_user: true,
            add_introduction_message: false,
            enable_webhook: true,
            mark_as_read: false,
            details: None,
        }
    }
}

impl CreateTicketRequest {
    /// Creates a request with the given subject (field1).
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            field1: Some(subject.into()),
            ..Self::default()
        }
    }

    /// Adds a participant.
    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the initial state.
    pub fn with_state(mut self, state: TicketState) -> Self {
        self.state = state;
        self
    }
}

/// Body of `PUT /tickets/setfields/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTicketFieldsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field7: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field9: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field10: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_argument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<TicketDetails>,
}

/// Optional body of `PUT /tickets/setstate/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTicketStateRequest {
    /// Tags to apply with the state change.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Summary to store with the state change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Query flags of `PUT /tickets/setstate/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStateOptions {
    /// Return the updated ticket in the response.
    pub get_ticket: bool,
    /// Post a "state changed" message to the conversation.
    pub send_ticket_state_changed_message: bool,
    /// Fire webhooks for the change.
    pub enable_webhook: bool,
}

impl Default for SetStateOptions {
    fn default() -> Self {
        Self {
            get_ticket: false,
            send_ticket_state_changed_message: true,
            enable_webhook: true,
        }
    }
}

/// Rendering options for the PDF and HTML exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRenderOptions {
    pub include_details: bool,
    pub include_conversation_link: bool,
    pub include_notes: bool,
    pub font_size_in_pixels: u32,
    pub replace_content_id: bool,
    pub show_participant_type: bool,
}

impl Default for TicketRenderOptions {
    fn default() -> Self {
        Self {
            include_details: true,
            include_conversation_link: true,
            include_notes: true,
            font_size_in_pixels: 14,
            replace_content_id: true,
            show_participant_type: true,
        }
    }
}

/// Body of `POST /tickets/send/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<Template>,
    /// File identifiers or URLs to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    pub enable_free_text_input: bool,
}

impl SendMessageRequest {
    /// Creates a plain-text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Quick-reply chip shown under a message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReply {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Rich card template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_html: Option<String>,
}

/// Button on a template card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub button_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Response of `PUT /tickets/setdepartment/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDepartmentResponse {
    /// ID of the ticket created in the target department.
    #[serde(default, alias = "TicketId")]
    pub ticket_id: i64,
}

/// Response of `POST /tickets/generatesurveylink/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyLinkResponse {
    /// Generated survey URL.
    #[serde(default, alias = "SurveyLink")]
    pub survey_link: Option<String>,
}

wire_enum! {
    /// Kind of survey question.
    pub enum QuestionType {
        /// Not set.
        Undefined => "Undefined",
        /// 1-5 rating.
        Rating => "Rating",
        /// Free text.
        Text => "Text",
    }
}

/// Survey answer attached to a ticket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Answer value; `1`-`5` for ratings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}
