use contracts::system::auth::AdminUser;
use web_sys::window;

const SESSION_KEY: &str = "cometica_admin_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the signed-in user to localStorage
pub fn save_session(user: &AdminUser) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Restore the signed-in user from localStorage
pub fn load_session() -> Option<AdminUser> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Drop the persisted session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
