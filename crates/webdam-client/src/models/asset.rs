//! Asset records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::folder::MiniFolder;
use super::user::MiniUser;

/// A single asset in the DAM.
///
/// Scalars arrive as strings: `filesize` is a decimal megabyte count,
/// `width` and `height` are pixel counts, `version` and `numComments`
/// are counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// File size in megabytes, as a decimal string like `"1.23"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnailurls: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datecreated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datemodified: Option<String>,
    /// Capture timestamp from the file's own metadata, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datecaptured: Option<String>,
    #[serde(rename = "numComments", skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MiniUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<MiniFolder>,
    /// Metadata map, present only when the endpoint inlines one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
