//! Group records.

use serde::{Deserialize, Serialize};

/// A permission group.
///
/// Unlike most of the API, `numusers` comes back as a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numusers: Option<i64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const GROUP_JSON: &str = r#"{
        "id": "3",
        "name": "Editors",
        "description": "Users allowed to edit metadata",
        "role": "editor",
        "numusers": 123
    }"#;

    #[test]
    fn decodes_group_with_numeric_member_count() {
        let group: Group = serde_json::from_str(GROUP_JSON).unwrap();
        assert_eq!(group.name.as_deref(), Some("Editors"));
        assert_eq!(group.numusers, Some(123));

        let encoded = serde_json::to_value(&group).unwrap();
        assert_eq!(encoded["numusers"], 123);
    }

    #[test]
    fn reencoding_keeps_the_payload_stable() {
        let group: Group = serde_json::from_str(GROUP_JSON).unwrap();
        let reencoded = serde_json::to_string(&group).unwrap();
        let group_again: Group = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(group, group_again);
    }
}
