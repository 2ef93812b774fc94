// Authentication command handlers
use crate::auth::AuthManager;
use crate::models::AuthStatus;
use std::sync::Arc;
use tauri::State;

/// Attempt a login. A failed attempt returns an anonymous status rather
/// than an error; the login form shows the inline message either way.
#[tauri::command]
pub fn login(
    auth: State<'_, Arc<AuthManager>>,
    username: String,
    password: String,
) -> Result<AuthStatus, String> {
    auth.login(&username, &password)
}

#[tauri::command]
pub fn logout(auth: State<'_, Arc<AuthManager>>) -> Result<(), String> {
    auth.logout();
    Ok(())
}

/// Consumed by the route guard to keep admin screens behind the login
#[tauri::command]
pub fn get_auth_status(auth: State<'_, Arc<AuthManager>>) -> Result<AuthStatus, String> {
    Ok(auth.status())
}
