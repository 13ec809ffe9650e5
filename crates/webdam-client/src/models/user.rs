//! User records.

use serde::{Deserialize, Serialize};

use super::group::Group;

/// A full user profile, as returned by the user endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companyurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datecreated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastlogin: Option<String>,
    /// Groups the user belongs to. Always serialized, even when empty,
    /// matching the service's own payloads.
    pub groups: Vec<Group>,
}

/// The abbreviated user record embedded in assets, folders, lightboxes,
/// and notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const USER_JSON: &str = r#"{
        "id": "12345",
        "username": "jdoe",
        "first": "John",
        "last": "Smith",
        "name": "John Doe",
        "email": "jdoe@example.com",
        "company": "Test Company",
        "companyurl": "example.com",
        "phone": "208-123-4567",
        "fax": "208-543-9876",
        "country": "United States",
        "city": "Boise",
        "address1": "123 Main Street",
        "address2": "Unit B",
        "status": "active",
        "datecreated": "2009-10-09 20:34:36",
        "lastlogin": "2013-07-10 12:04:24",
        "groups": [
            {
                "id": "21",
                "name": "Admin",
                "description": "Group Description",
                "role": "Admin",
                "numusers": 123
            }
        ]
    }"#;

    #[test]
    fn decodes_full_user_with_groups() {
        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.username.as_deref(), Some("jdoe"));
        assert_eq!(user.first.as_deref(), Some("John"));
        assert_eq!(user.last.as_deref(), Some("Smith"));
        assert_eq!(user.company.as_deref(), Some("Test Company"));
        assert_eq!(user.address2.as_deref(), Some("Unit B"));
        assert_eq!(user.lastlogin.as_deref(), Some("2013-07-10 12:04:24"));

        assert_eq!(user.groups.len(), 1);
        assert_eq!(user.groups[0].name.as_deref(), Some("Admin"));
        assert_eq!(user.groups[0].numusers, Some(123));
    }

    #[test]
    fn groups_are_always_serialized() {
        let user: User = serde_json::from_str(r#"{"id": "12345"}"#).unwrap();
        assert!(user.groups.is_empty());

        let encoded = serde_json::to_value(&user).unwrap();
        assert_eq!(encoded, serde_json::json!({"id": "12345", "groups": []}));
    }

    #[test]
    fn reencoding_keeps_the_payload_stable() {
        let user: User = serde_json::from_str(USER_JSON).unwrap();
        let reencoded = serde_json::to_string(&user).unwrap();
        let user_again: User = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(user, user_again);
    }

    #[test]
    fn mini_user_reencodes_cleanly() {
        let mini: MiniUser = serde_json::from_str(
            r#"{"id": "112233", "email": "jdoe@example.com", "username": "jdoe"}"#,
        )
        .unwrap();
        let encoded = serde_json::to_value(&mini).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "id": "112233",
                "email": "jdoe@example.com",
                "username": "jdoe"
            })
        );
    }
}
