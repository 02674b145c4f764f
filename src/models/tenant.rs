//! Tenant models for the Glassix API.

use serde::{Deserialize, Serialize};

/// A ticket tag defined for the workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Display color, e.g. `#ff0000`.
    #[serde(default, alias = "Color")]
    pub color: String,
    #[serde(default, alias = "ParentTags")]
    pub parent_tags: Vec<String>,
    #[serde(default, alias = "IsDeleted")]
    pub is_deleted: bool,
}
