use serde::{Deserialize, Serialize};

/// Signed-in console user.
///
/// There is no real account system behind this: the console accepts one
/// fixed demo credential pair and everything here is client-side state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl AdminUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_check() {
        let user = AdminUser {
            email: "admin@cometica.com".into(),
            name: "Admin User".into(),
            role: "admin".into(),
        };
        assert!(user.is_admin());

        let viewer = AdminUser {
            role: "viewer".into(),
            ..user
        };
        assert!(!viewer.is_admin());
    }
}
