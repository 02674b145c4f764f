//! Data models for the Glassix API.
//!
//! DTOs mirror the remote JSON schema field for field. Response fields are
//! optional and unknown fields are ignored; request bodies skip unset
//! fields.

mod common;
mod canned_reply;
mod contact;
mod protocol;
mod tenant;
mod ticket;
mod token;
mod transaction;
mod user;
mod webhook;

pub use common::*;
pub use canned_reply::*;
pub use contact::*;
pub use protocol::*;
pub use tenant::*;
pub use ticket::*;
pub use token::*;
pub use transaction::*;
pub use user::*;
pub use webhook::*;
