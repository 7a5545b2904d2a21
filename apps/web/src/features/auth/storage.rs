//! Encoding of the demo session kept in `localStorage`.

use access_guard::{AuthSession, Role, User};
use serde::{Deserialize, Serialize};

/// Storage key holding the signed-in user.
#[cfg(target_arch = "wasm32")]
pub const SESSION_KEY: &str = "bevpack.session";

#[derive(Serialize, Deserialize)]
struct StoredSession {
    email: String,
    role: String,
}

/// Serializes a user for storage.
pub fn encode(user: &User) -> Result<String, serde_json::Error> {
    serde_json::to_string(&StoredSession {
        email: user.email.clone(),
        role: user.role.to_string(),
    })
}

/// Resolves the stored value into a settled session. Missing, malformed or
/// unknown-role entries all resolve to anonymous.
pub fn decode(raw: Option<&str>) -> AuthSession {
    raw.and_then(parse).map_or_else(AuthSession::anonymous, AuthSession::signed_in)
}

fn parse(raw: &str) -> Option<User> {
    let stored: StoredSession = serde_json::from_str(raw).ok()?;
    let email = stored.email.trim();
    if email.is_empty() {
        return None;
    }
    let role: Role = stored.role.parse().ok()?;
    Some(User::new(email, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_user_decodes_signed_in() {
        let user = User::new("ops@plant.example", Role::Plant);
        let raw = encode(&user).expect("encode");
        let session = decode(Some(raw.as_str()));

        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.user, Some(user));
    }

    #[test]
    fn missing_value_is_anonymous() {
        assert_eq!(decode(None), AuthSession::anonymous());
    }

    #[test]
    fn malformed_value_is_anonymous() {
        assert_eq!(decode(Some("{not json")), AuthSession::anonymous());
    }

    #[test]
    fn unknown_role_is_anonymous() {
        let raw = r#"{"email":"a@b.example","role":"superuser"}"#;
        assert_eq!(decode(Some(raw)), AuthSession::anonymous());
    }

    #[test]
    fn blank_email_is_anonymous() {
        let raw = r#"{"email":"  ","role":"admin"}"#;
        assert_eq!(decode(Some(raw)), AuthSession::anonymous());
    }

    #[test]
    fn role_is_case_insensitive() {
        let raw = r#"{"email":"press@bevpack.dev","role":"Printing"}"#;
        assert_eq!(decode(Some(raw)).role(), Some(Role::Printing));
    }
}
