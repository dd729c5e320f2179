//! Session Guard
//!
//! Owns the authenticated-admin token. The state machine itself is plain
//! Rust (`SessionState`); `SessionContext` wraps it in a signal provided
//! via context so views can read it reactively. All mutation goes through
//! `login`/`logout`/`expire` — no view touches the token directly.

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::models::User;

const TOKEN_KEY: &str = "club_token";
const USER_KEY: &str = "club_user";

/// Auth lifecycle: Anonymous -> Authenticating -> Authenticated -> Anonymous.
///
/// Token and user travel together inside `Authenticated`; there is no
/// partial state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated {
        token: String,
        user: User,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Bearer header value, present only when authenticated
    pub fn auth_header(&self) -> Option<String> {
        match self {
            SessionState::Authenticated { token, .. } => Some(format!("Bearer {token}")),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Mark a login request in flight. Only valid from `Anonymous`.
    pub fn begin_login(&mut self) {
        if matches!(self, SessionState::Anonymous) {
            *self = SessionState::Authenticating;
        }
    }

    /// Resolve an in-flight login with credentials from the API.
    pub fn complete_login(&mut self, token: String, user: User) {
        if matches!(self, SessionState::Authenticating) {
            *self = SessionState::Authenticated { token, user };
        }
    }

    /// Resolve an in-flight login as rejected.
    pub fn fail_login(&mut self) {
        if matches!(self, SessionState::Authenticating) {
            *self = SessionState::Anonymous;
        }
    }

    /// Unconditional teardown; idempotent from any state.
    pub fn clear(&mut self) {
        *self = SessionState::Anonymous;
    }
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

/// Create the session store, restore any token kept in sessionStorage,
/// and provide the context to all children.
pub fn provide_session() -> SessionContext {
    let initial = restore_from_storage().map_or(SessionState::Anonymous, |(token, user)| {
        SessionState::Authenticated { token, user }
    });
    let (state, set_state) = signal(initial);
    let ctx = SessionContext { state, set_state };
    provide_context(ctx);
    ctx
}

/// Get the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

impl SessionContext {
    /// Reactive: true iff a token is held
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    /// Reactive: true while a login request is in flight
    pub fn is_authenticating(&self) -> bool {
        self.state.with(|s| matches!(s, SessionState::Authenticating))
    }

    /// Bearer header for mutating requests; None when anonymous
    pub fn auth_header(&self) -> Option<String> {
        self.state.with_untracked(|s| s.auth_header())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    /// Submit credentials to the API. On success the session becomes
    /// `Authenticated` and the token is persisted for the browser
    /// session; on failure it returns to `Anonymous` with the error
    /// surfaced to the caller. No partial credentials are ever stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        if self.state.with_untracked(|s| s.is_authenticated()) {
            return Ok(());
        }
        self.set_state.update(|s| s.begin_login());
        match api::login(username, password).await {
            Ok(response) => {
                persist_to_storage(&response.token, &response.user);
                self.set_state
                    .update(|s| s.complete_login(response.token, response.user));
                Ok(())
            }
            Err(err) => {
                self.set_state.update(|s| s.fail_login());
                Err(err)
            }
        }
    }

    /// Drop the session unconditionally. Calling while anonymous is a no-op.
    pub fn logout(&self) {
        clear_storage();
        self.set_state.update(|s| s.clear());
    }

    /// A protected call came back 401/403: the API is the sole authority
    /// on token validity, so tear the session down exactly like logout.
    pub fn expire(&self) {
        self.logout();
    }

    /// Teardown helper shared by admin pages: expire on auth errors,
    /// report anything else. Returns the message to surface, if any.
    pub fn handle_api_error(&self, err: &ApiError) -> Option<String> {
        if should_expire(err) {
            self.expire();
            None
        } else {
            Some(err.to_string())
        }
    }
}

/// Which API failures force a session teardown. A rejected token is the
/// only one; everything else is surfaced and the session kept.
fn should_expire(err: &ApiError) -> bool {
    matches!(err, ApiError::Unauthorized)
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn restore_from_storage() -> Option<(String, User)> {
    let storage = session_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let user_json = storage.get_item(USER_KEY).ok().flatten()?;
    match serde_json::from_str::<User>(&user_json) {
        Ok(user) => Some((token, user)),
        Err(_) => {
            // Half a session is no session
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
            None
        }
    }
}

fn persist_to_storage(token: &str, user: &User) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

fn clear_storage() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_login_success_path() {
        let mut state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.auth_header().is_none());

        state.begin_login();
        assert_eq!(state, SessionState::Authenticating);

        state.complete_login("tok-123".to_string(), admin());
        assert!(state.is_authenticated());
        assert_eq!(state.auth_header().as_deref(), Some("Bearer tok-123"));
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("admin"));
    }

    #[test]
    fn test_login_failure_returns_to_anonymous() {
        let mut state = SessionState::default();
        state.begin_login();
        state.fail_login();
        assert_eq!(state, SessionState::Anonymous);
        assert!(state.auth_header().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut state = SessionState::Authenticated {
            token: "tok".to_string(),
            user: admin(),
        };
        state.clear();
        assert_eq!(state, SessionState::Anonymous);
        state.clear();
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_unauthorized_is_the_only_error_that_expires() {
        assert!(should_expire(&ApiError::Unauthorized));
        assert!(!should_expire(&ApiError::Network));
        assert!(!should_expire(&ApiError::Decode));
        assert!(!should_expire(&ApiError::Api {
            status: 422,
            message: "name is required".to_string(),
        }));
    }

    #[test]
    fn test_expired_session_tears_down_like_logout() {
        let mut state = SessionState::Authenticated {
            token: "tok".to_string(),
            user: admin(),
        };
        assert!(should_expire(&ApiError::Unauthorized));
        state.clear();
        assert!(!state.is_authenticated());
        assert!(state.auth_header().is_none());
    }

    #[test]
    fn test_no_transitions_outside_the_machine() {
        // complete_login without a pending login is ignored
        let mut state = SessionState::Anonymous;
        state.complete_login("tok".to_string(), admin());
        assert_eq!(state, SessionState::Anonymous);

        // begin_login while authenticated keeps the session
        let mut state = SessionState::Authenticated {
            token: "tok".to_string(),
            user: admin(),
        };
        state.begin_login();
        assert!(state.is_authenticated());
    }
}
