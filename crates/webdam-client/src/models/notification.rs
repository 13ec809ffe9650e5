//! Notification records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::MiniUser;

/// An activity notification.
///
/// `source` and `subitems` are polymorphic: depending on `action` they
/// hold asset, folder, or lightbox shaped objects, so they pass through
/// untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// What happened, e.g. `asset_upload` or `folder_create`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MiniUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subitems: Option<Value>,
    /// Human-readable sentence describing the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaystring: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_notification_with_polymorphic_source() {
        let notification: Notification = serde_json::from_str(
            r#"{
                "id": "98765",
                "action": "asset_upload",
                "user": {"id": "112233", "username": "jdoe"},
                "source": {"id": "12345", "name": "Folder 1"},
                "subitems": [{"id": "3455342", "filename": "camera.jpg"}],
                "displaystring": "jdoe uploaded camera.jpg to Folder 1"
            }"#,
        )
        .unwrap();
        assert_eq!(notification.action.as_deref(), Some("asset_upload"));
        assert_eq!(notification.source.as_ref().unwrap()["name"], "Folder 1");
        assert_eq!(
            notification.subitems.as_ref().unwrap()[0]["filename"],
            "camera.jpg"
        );
    }

    #[test]
    fn sparse_notification_reencodes_cleanly() {
        let notification: Notification =
            serde_json::from_str(r#"{"id": "98765", "action": "folder_create"}"#).unwrap();
        let encoded = serde_json::to_value(&notification).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"id": "98765", "action": "folder_create"})
        );
    }
}
