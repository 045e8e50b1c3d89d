use web_sys::window;

use shared::user::LoginResponse;

use crate::Route;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const NICKNAME_KEY: &str = "nickname";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn stored_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

pub fn stored_username() -> Option<String> {
    local_storage().and_then(|s| s.get_item(USERNAME_KEY).ok().flatten())
}

pub fn store_session(session: &LoginResponse) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USERNAME_KEY, &session.username);
        if let Some(nickname) = &session.nickname {
            let _ = storage.set_item(NICKNAME_KEY, nickname);
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        storage.remove_item(TOKEN_KEY).ok();
        storage.remove_item(USERNAME_KEY).ok();
        storage.remove_item(NICKNAME_KEY).ok();
    }
}

/// Decides whether a navigation may proceed. Returns the route to redirect
/// to when it may not. The login page is always reachable; everything else
/// requires a non-empty stored token. No expiry or role checks happen here,
/// the backend rejects stale tokens on its own.
pub fn guard_navigation(target: &Route, token: Option<&str>) -> Option<Route> {
    let authenticated = token.map_or(false, |t| !t.is_empty());
    if *target != Route::Login && !authenticated {
        Some(Route::Login)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_redirects_to_login() {
        assert_eq!(
            guard_navigation(&Route::Products, None),
            Some(Route::Login)
        );
        assert_eq!(guard_navigation(&Route::Orders, None), Some(Route::Login));
        assert_eq!(
            guard_navigation(&Route::ProductDetail { id: 5 }, None),
            Some(Route::Login)
        );
        assert_eq!(guard_navigation(&Route::Home, None), Some(Route::Login));
    }

    #[test]
    fn test_empty_token_counts_as_unauthenticated() {
        assert_eq!(
            guard_navigation(&Route::Products, Some("")),
            Some(Route::Login)
        );
    }

    #[test]
    fn test_login_never_redirects() {
        assert_eq!(guard_navigation(&Route::Login, None), None);
        assert_eq!(guard_navigation(&Route::Login, Some("jwt")), None);
    }

    #[test]
    fn test_any_non_empty_token_passes() {
        assert_eq!(guard_navigation(&Route::Products, Some("jwt-abc")), None);
        assert_eq!(guard_navigation(&Route::Orders, Some("x")), None);
        assert_eq!(
            guard_navigation(&Route::ProductDetail { id: 5 }, Some("x")),
            None
        );
    }
}
