//! User profile record and role enumeration.

use serde::{Deserialize, Serialize};

/// Role of a signed-in actor.
///
/// An ustadz can answer questions and filter the feed down to unanswered
/// ones; a regular user can only ask.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member asking questions.
    #[default]
    User,
    /// Authorized responder.
    Ustadz,
}

impl Role {
    /// The wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ustadz => "ustadz",
        }
    }

    /// Parse a role from its wire name. Unknown values fall back to `User`,
    /// matching how documents without a role field are read.
    pub fn parse(value: &str) -> Self {
        match value {
            "ustadz" => Role::Ustadz,
            _ => Role::User,
        }
    }
}

// Lenient on read: a document written with a role this build does not know
// must still load, so deserialization goes through `parse` instead of the
// strict derive.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse(&value))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile record stored in the `users` collection, keyed by the identity
/// provider's uid. Doubles as the session payload returned by login and
/// register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider uid; never client-picked.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email the account was registered with.
    pub email: String,
    /// Avatar payload (base64), absent until the user uploads one.
    #[serde(default)]
    pub photo: Option<String>,
    /// Actor role.
    #[serde(default)]
    pub role: Role,
    /// Optional self-reported gender, unused by this layer.
    #[serde(default)]
    pub gender: Option<String>,
}

/// Partial update applied to a profile record.
///
/// `photo: None` means "leave the stored value untouched", not
/// "overwrite with empty".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New display name.
    pub name: String,
    /// New avatar payload, omitted from the update set when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("ustadz"), Role::Ustadz);
        assert_eq!(Role::Ustadz.as_str(), "ustadz");
    }

    #[test]
    fn test_role_unknown_falls_back_to_user() {
        assert_eq!(Role::parse("admin"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Ustadz).unwrap(), "\"ustadz\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_unknown_role_deserializes_as_user() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","name":"A","email":"a@x.com","role":"admin"}"#)
                .unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_user_deserializes_with_missing_optionals() {
        let json = r#"{"id":"u1","name":"Amin","email":"a@x.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.photo.is_none());
        assert!(user.gender.is_none());
    }

    #[test]
    fn test_user_patch_omits_absent_photo() {
        let patch = UserPatch {
            name: "Amin".into(),
            photo: None,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Amin" }));

        let patch = UserPatch {
            name: "Amin".into(),
            photo: Some("base64data".into()),
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["photo"], "base64data");
    }
}
