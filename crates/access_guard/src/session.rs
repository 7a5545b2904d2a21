//! Auth session snapshot supplied by whoever owns authentication. The guard
//! only reads it; roles are trusted as given.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Plant,
    Printing,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::User, Role::Plant, Role::Printing, Role::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Plant => "plant",
            Role::Printing => "printing",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "plant" => Ok(Role::Plant),
            "printing" => Ok(Role::Printing),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }
}

/// Snapshot of the upstream authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub user: Option<User>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl AuthSession {
    /// Authentication has not resolved yet.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
            is_authenticated: false,
        }
    }

    /// Resolved with no signed-in user.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user: None,
            is_loading: false,
            is_authenticated: false,
        }
    }

    /// Resolved with `user` signed in.
    #[must_use]
    pub const fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
            is_authenticated: true,
        }
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(" Printing ".parse::<Role>(), Ok(Role::Printing));
        assert_eq!(
            "guest".parse::<Role>(),
            Err(UnknownRole("guest".to_string()))
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&User::new("ops@example.com", Role::Plant))
            .expect("Failed to serialize");
        assert!(json.contains("\"role\":\"plant\""));

        let user: User = serde_json::from_str(r#"{"email":"a@b.c","role":"printing"}"#)
            .expect("Failed to deserialize");
        assert_eq!(user.role, Role::Printing);
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        let result: Result<User, _> = serde_json::from_str(r#"{"email":"a@b.c","role":"root"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn session_constructors() {
        assert!(AuthSession::loading().is_loading);
        assert_eq!(AuthSession::anonymous().role(), None);
        let session = AuthSession::signed_in(User::new("a@b.c", Role::User));
        assert!(session.is_authenticated);
        assert_eq!(session.role(), Some(Role::User));
    }
}
