// Login gate over the seeded user list.
//
// Credentials are compared in plaintext against users.json and the
// authenticated user's public fields are persisted as a session marker, so
// the login survives an app restart. There is no expiry and no refresh;
// anonymous -> authenticated on login, back to anonymous on logout or when
// the marker cannot be read.

use crate::file_manager::{load_or_seed, read_json_file, write_json_file};
use crate::models::{AuthStatus, SessionUser, User};
use log::{info, warn};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

pub struct AuthManager {
    users_path: PathBuf,
    session_path: PathBuf,
    session: RwLock<Option<SessionUser>>,
}

impl AuthManager {
    pub fn load(users_path: PathBuf, session_path: PathBuf) -> Self {
        let session = read_session(&session_path);
        Self {
            users_path,
            session_path,
            session: RwLock::new(session),
        }
    }

    /// Exact match on username and password. Success stores the session
    /// marker; failure has no side effects and reports an anonymous status.
    pub fn login(&self, username: &str, password: &str) -> Result<AuthStatus, String> {
        let users: Vec<User> = load_or_seed(&self.users_path, User::seed_users());

        let Some(user) = users
            .iter()
            .find(|u| u.username == username && u.password == password)
        else {
            info!("Rejected login for {:?}", username);
            return Ok(AuthStatus::anonymous());
        };

        let session_user = SessionUser::from(user);
        write_json_file(&self.session_path, &session_user)?;
        *self.session.write() = Some(session_user.clone());

        info!("Logged in as {:?}", session_user.username);
        Ok(AuthStatus::for_session(&session_user))
    }

    pub fn logout(&self) {
        *self.session.write() = None;
        if self.session_path.exists() {
            if let Err(e) = fs::remove_file(&self.session_path) {
                warn!("Failed to remove session marker: {}", e);
            }
        }
    }

    pub fn status(&self) -> AuthStatus {
        match &*self.session.read() {
            Some(session) => AuthStatus::for_session(session),
            None => AuthStatus::anonymous(),
        }
    }
}

/// A marker that cannot be parsed counts as "no session" and is deleted
fn read_session(path: &Path) -> Option<SessionUser> {
    if !path.exists() {
        return None;
    }

    match read_json_file::<SessionUser>(path) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("Discarding unreadable session marker: {}", e);
            let _ = fs::remove_file(path);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_auth(tag: &str) -> (AuthManager, PathBuf) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "sweet-delights-auth-{}-{}-{}",
            tag,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).unwrap();
        let manager = AuthManager::load(dir.join("users.json"), dir.join("session.json"));
        (manager, dir)
    }

    #[test]
    fn test_login_with_seed_credentials_succeeds() {
        let (auth, dir) = temp_auth("login-ok");

        let status = auth.login("admin", "admin123").unwrap();
        assert!(status.is_authenticated);
        assert!(status.is_admin);
        assert_eq!(status.username.as_deref(), Some("admin"));

        // Marker persisted with public fields only
        assert!(dir.join("session.json").exists());
        let marker = fs::read_to_string(dir.join("session.json")).unwrap();
        assert!(!marker.contains("admin123"));

        assert!(auth.status().is_authenticated);
    }

    #[test]
    fn test_login_with_wrong_password_fails_without_side_effects() {
        let (auth, dir) = temp_auth("login-bad");

        let status = auth.login("admin", "wrong").unwrap();
        assert!(!status.is_authenticated);
        assert!(!auth.status().is_authenticated);
        assert!(!dir.join("session.json").exists());
    }

    #[test]
    fn test_logout_clears_session_and_marker() {
        let (auth, dir) = temp_auth("logout");
        auth.login("admin", "admin123").unwrap();

        auth.logout();
        assert!(!auth.status().is_authenticated);
        assert!(!dir.join("session.json").exists());
    }

    #[test]
    fn test_session_survives_restart() {
        let (auth, dir) = temp_auth("restart");
        auth.login("admin", "admin123").unwrap();

        let reloaded = AuthManager::load(dir.join("users.json"), dir.join("session.json"));
        let status = reloaded.status();
        assert!(status.is_authenticated);
        assert!(status.is_admin);
    }

    #[test]
    fn test_corrupt_session_marker_treated_as_anonymous() {
        let (auth, dir) = temp_auth("corrupt-marker");
        drop(auth);
        fs::write(dir.join("session.json"), "{broken").unwrap();

        let reloaded = AuthManager::load(dir.join("users.json"), dir.join("session.json"));
        assert!(!reloaded.status().is_authenticated);
        assert!(!dir.join("session.json").exists());
    }
}
