//! # Client session — login state, role and the auth token
//!
//! [`Session`] is the client-held record `{is_logged_in, role}` that gates UI
//! affordances. It is never authoritative: the API re-checks the token on every
//! call. [`SessionService`] owns a session plus a [`TokenStore`] and is the only
//! thing that mutates either, so logging out always clears both together.
//!
//! ## [`TokenStore`] trait
//!
//! A synchronous get/set/clear interface over wherever the auth token lives.
//! Implementations live in sibling modules ([`crate::memory`] for native builds
//! and tests, `crate::session_storage` for the browser tab's `sessionStorage`).

use serde::{Deserialize, Serialize};

/// Role granted by the API at sign-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    None,
    Admin,
    User,
}

impl Role {
    /// Map the first entry of the sign-in `roles` array to a role.
    ///
    /// Any authenticated account that is not `ADMIN` is treated as a plain user.
    pub fn from_roles(roles: &[String]) -> Self {
        match roles.first().map(|r| r.trim().to_ascii_uppercase()) {
            Some(r) if r == "ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Login state visible to the views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.is_logged_in && self.role == Role::Admin
    }
}

/// Storage for the auth token attached to authenticated requests.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Owns the session state and the token storage backing it.
#[derive(Clone, Debug)]
pub struct SessionService<T> {
    state: Session,
    tokens: T,
}

impl<T: TokenStore> SessionService<T> {
    /// Start logged out. A token left in storage by an earlier page load is kept
    /// so authenticated fetches keep working, but the role is not restored.
    pub fn new(tokens: T) -> Self {
        Self {
            state: Session::default(),
            tokens,
        }
    }

    pub fn login(&mut self, role: Role, token: &str) {
        self.tokens.set(token.trim());
        self.state = Session {
            is_logged_in: true,
            role,
        };
    }

    pub fn logout(&mut self) {
        self.tokens.clear();
        self.state = Session::default();
    }

    pub fn current(&self) -> Session {
        self.state
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTokenStore;

    #[test]
    fn test_login_sets_role_and_token() {
        let mut service = SessionService::new(MemoryTokenStore::new());
        assert_eq!(service.current(), Session::default());

        service.login(Role::Admin, "abc");

        assert_eq!(
            service.current(),
            Session {
                is_logged_in: true,
                role: Role::Admin
            }
        );
        assert!(service.current().is_admin());
        assert_eq!(service.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_logout_resets_and_clears_token() {
        let tokens = MemoryTokenStore::new();
        let mut service = SessionService::new(tokens.clone());
        service.login(Role::User, "abc");

        service.logout();

        assert_eq!(service.current(), Session::default());
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_role_from_roles() {
        assert_eq!(Role::from_roles(&["ADMIN".to_string()]), Role::Admin);
        assert_eq!(Role::from_roles(&["admin".to_string()]), Role::Admin);
        assert_eq!(Role::from_roles(&["USER".to_string()]), Role::User);
        assert_eq!(Role::from_roles(&[]), Role::User);
    }

    #[test]
    fn test_user_is_not_admin() {
        let mut service = SessionService::new(MemoryTokenStore::new());
        service.login(Role::User, "t");
        assert!(!service.current().is_admin());
    }
}
