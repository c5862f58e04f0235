use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::auth_login_url;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Name shown in the header
    pub fn display_name(&self) -> String {
        self.user_info
            .as_ref()
            .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
            .unwrap_or_else(|| "Convidado".to_string())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
        user_info: None,
    });

    // Resolve the user behind a stored token once on mount
    Effect::new(move |_| {
        let Some(access_token) = auth_state.with_untracked(|s| s.access_token.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => set_auth_state.update(|s| s.user_info = Some(user_info)),
                Err(e) => log::warn!("current user lookup failed: {}", e),
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Sign out through the auth provider. Fire-and-forget: a failed revoke is
/// only logged, local tokens are cleared regardless and the browser is sent
/// to the provider's login page.
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    spawn_local(async move {
        if let Some(refresh_token) = storage::get_refresh_token() {
            if let Err(e) = api::logout(refresh_token).await {
                log::warn!("sign out: {}", e);
            }
        }

        storage::clear_tokens();
        set_auth_state.set(AuthState::default());

        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&auth_login_url()) {
                log::warn!("sign out: redirect to login failed: {:?}", e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(AuthState::default().display_name(), "Convidado");

        let mut user = UserInfo {
            id: "1".into(),
            username: "tecnico".into(),
            full_name: None,
            email: None,
            is_admin: false,
        };
        let state = AuthState { access_token: Some("t".into()), user_info: Some(user.clone()) };
        assert_eq!(state.display_name(), "tecnico");

        user.full_name = Some("João Lima".into());
        let state = AuthState { access_token: None, user_info: Some(user) };
        assert_eq!(state.display_name(), "João Lima");
    }
}
