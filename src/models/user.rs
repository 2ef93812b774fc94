// User and session data models
use serde::{Deserialize, Serialize};

/// Seed login data. Credentials are compared in plaintext against the users
/// file in the app data directory; this app has no real security model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl User {
    pub fn seed_users() -> Vec<User> {
        vec![User {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            is_admin: true,
        }]
    }
}

/// The persisted session marker: public fields only, never the password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Authentication status for the frontend route guard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub username: Option<String>,
}

impl AuthStatus {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_admin: false,
            username: None,
        }
    }

    pub fn for_session(session: &SessionUser) -> Self {
        Self {
            is_authenticated: true,
            is_admin: session.is_admin,
            username: Some(session.username.clone()),
        }
    }
}
