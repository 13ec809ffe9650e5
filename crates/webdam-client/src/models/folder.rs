//! Folder records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::MiniUser;

/// A folder in the DAM, with any nested child folders the service chose
/// to inline.
///
/// Every scalar the service sends for folders is a string, including
/// counters like `numassets` and flags like `passwordprotected`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadatatemplateid: Option<String>,
    /// Id of the parent folder, `"0"` for top-level folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datecreated: Option<String>,
    /// String-typed flag, `"true"` or `"false"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwordprotected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numassets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numchildren: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clientfolderid: Option<String>,
    /// Folder and asset permission lists, passed through untyped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnailurls: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MiniUser>,
    /// Child folders, present only on endpoints that inline them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
}

/// The abbreviated folder record embedded in asset payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniFolder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}
