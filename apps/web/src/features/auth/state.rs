//! Auth session context. The provider starts in the loading state, hydrates
//! once from `localStorage` after mount and exposes the snapshot guards read.

use super::storage::{self, SESSION_KEY};
use access_guard::{AuthSession, Role, User};
use leptos::{logging, prelude::*};

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<AuthSession>,
    pub is_authenticated: Signal<bool>,
    pub role: Signal<Option<Role>>,
}

impl AuthContext {
    fn new(session: RwSignal<AuthSession>) -> Self {
        Self {
            session,
            is_authenticated: Signal::derive(move || session.with(|s| s.is_authenticated)),
            role: Signal::derive(move || session.with(AuthSession::role)),
        }
    }

    /// Signs `user` in and persists the session.
    pub fn set_session(&self, user: User) {
        match (storage::encode(&user), local_storage()) {
            (Ok(raw), Some(store)) => {
                if store.set_item(SESSION_KEY, &raw).is_err() {
                    logging::warn!("could not persist session");
                }
            }
            (Err(err), _) => logging::warn!("could not encode session: {err}"),
            (_, None) => {}
        }
        self.session.set(AuthSession::signed_in(user));
    }

    /// Signs out and forgets the stored session.
    pub fn clear_session(&self) {
        if let Some(store) = local_storage() {
            let _ = store.remove_item(SESSION_KEY);
        }
        self.session.set(AuthSession::anonymous());
    }
}

/// Provides the auth context and resolves the stored session after mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(AuthSession::loading());
    provide_context(AuthContext::new(session));

    Effect::new(move |_| {
        let raw = local_storage().and_then(|store| store.get_item(SESSION_KEY).ok().flatten());
        session.set(storage::decode(raw.as_deref()));
    });

    view! { {children()} }
}

/// Returns the current auth context or a detached anonymous one.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(AuthSession::anonymous())))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}
