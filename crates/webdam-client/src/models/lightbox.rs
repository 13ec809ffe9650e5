//! Lightbox records.

use serde::{Deserialize, Serialize};

use super::user::MiniUser;

/// A lightbox, the DAM's shareable asset collection.
///
/// `share` and `canedit` are string-typed flags like the rest of the
/// API's booleans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lightbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datecreated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canedit: Option<String>,
    #[serde(rename = "numCollaborators", skip_serializing_if = "Option::is_none")]
    pub num_collaborators: Option<String>,
    #[serde(rename = "numComments", skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numberitems: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MiniUser>,
}
