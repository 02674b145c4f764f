//! # Glassix
//!
//! Async client SDK for the Glassix customer-engagement REST API.
//!
//! ## Features
//!
//! - **Tickets, contacts, users**: every `/tickets`, `/contacts` and `/users`
//!   endpoint, including PDF/HTML exports and survey links
//! - **Messaging**: raw channel messages through `/protocols/send`
//! - **Webhooks**: event polling/acknowledgement and `X-Glassix-Auth`
//!   signature verification
//! - **Token caching**: bearer tokens are fetched once per credential
//!   identity and refreshed 5 minutes before expiry, even under concurrent
//!   load
//! - **Security**: the API secret is never logged and is scrubbed from
//!   error messages
//!
//! ## Architecture
//!
//! - [`config`] - Credentials, environments and loading from env vars
//! - [`error`] - Error taxonomy with secret sanitization
//! - [`auth`] - Shared bearer token cache
//! - [`client`] - HTTP dispatcher and typed response decoding
//! - [`query`] - Query-string encoding in the Glassix dialect
//! - [`resources`] - Per-area clients built on [`GlassixClient`]
//! - [`webhook`] - Inbound webhook signature verification
//! - [`models`] - Wire DTOs
//!
//! ## Example
//!
//! ```ignore
//! use glassix::{Credentials, GlassixClient};
//! use glassix::models::{TicketState, SetStateOptions};
//!
//! async fn example() -> glassix::Result<()> {
//!     let client = GlassixClient::new(Credentials::from_env()?)?;
//!
//!     let ticket = client.tickets().get(4512).await?;
//!     println!("#{:?}: {}", ticket.id, ticket.display_subject());
//!
//!     client
//!         .tickets()
//!         .set_state(4512, TicketState::Closed, SetStateOptions::default(), None)
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod client;
pub mod config;
mod decode;
pub mod error;
pub mod models;
pub mod query;
pub mod resources;
pub mod webhook;

pub use auth::TokenCache;
pub use client::GlassixClient;
pub use config::{Credentials, Environment};
pub use error::{GlassixError, Result};
pub use webhook::WebhookVerifier;
