//! Guard state machine.
//!
//! `Pending` until the session resolves, then `Granted` or `Denied`. Entering
//! `Denied` issues exactly one redirect and one notice; after that the guard
//! stays denied for the rest of the mount and ignores further input, so a
//! second, contradictory redirect can never be issued.

use crate::session::{AuthSession, Role};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

pub const LOGIN_ROUTE: &str = "/login";
pub const FALLBACK_ROUTE: &str = "/";

/// Why access was refused. The display text is the user-facing notice.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DenyReason {
    #[error("Please login to continue")]
    Unauthenticated,
    #[error("Access denied. You do not have permission to view this page.")]
    Unauthorized { role: Role },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Granted,
    Denied(DenyReason),
}

/// What the guarded view should show for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Loading,
    Render,
    Nothing,
}

/// Navigation collaborator.
pub trait Navigator {
    fn go_to(&self, route: &str);
}

/// Transient user-facing messages (toasts).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn go_to(&self, route: &str) {
        self(route);
    }
}

/// Notifier that drops every message.
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _message: &str) {}
}

/// Where denied visitors are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectPolicy {
    pub login_route: String,
    pub fallback_route: String,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self {
            login_route: LOGIN_ROUTE.to_string(),
            fallback_route: FALLBACK_ROUTE.to_string(),
        }
    }
}

impl RedirectPolicy {
    #[must_use]
    pub fn route_for(&self, reason: &DenyReason) -> &str {
        match reason {
            DenyReason::Unauthenticated => &self.login_route,
            DenyReason::Unauthorized { .. } => &self.fallback_route,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccessGuard {
    allowed: BTreeSet<Role>,
    policy: RedirectPolicy,
    state: GuardState,
    redirected_to: Option<String>,
}

impl AccessGuard {
    /// Guard that admits only the given roles.
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
            policy: RedirectPolicy::default(),
            state: GuardState::Pending,
            redirected_to: None,
        }
    }

    /// Guard that admits any signed-in user.
    #[must_use]
    pub fn any_authenticated() -> Self {
        Self::new(Role::ALL)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RedirectPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    #[must_use]
    pub fn allowed(&self) -> &BTreeSet<Role> {
        &self.allowed
    }

    #[must_use]
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Route of the redirect issued by this mount, if any.
    #[must_use]
    pub fn redirected_to(&self) -> Option<&str> {
        self.redirected_to.as_deref()
    }

    /// Maps a session snapshot to a state without side effects.
    #[must_use]
    pub fn classify(&self, session: &AuthSession) -> GuardState {
        if session.is_loading {
            return GuardState::Pending;
        }

        let role = match (&session.user, session.is_authenticated) {
            (Some(user), true) => user.role,
            _ => return GuardState::Denied(DenyReason::Unauthenticated),
        };

        if self.allows(role) {
            GuardState::Granted
        } else {
            GuardState::Denied(DenyReason::Unauthorized { role })
        }
    }

    /// Re-evaluates against a fresh session snapshot. Call this whenever the
    /// upstream session changes.
    pub fn evaluate<N, M>(&mut self, session: &AuthSession, navigator: &N, notifier: &M) -> Decision
    where
        N: Navigator + ?Sized,
        M: Notifier + ?Sized,
    {
        if matches!(self.state, GuardState::Denied(_)) {
            return Decision::Nothing;
        }

        let next = self.classify(session);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "guard state changed");
        }

        let decision = match &next {
            GuardState::Pending => Decision::Loading,
            GuardState::Granted => Decision::Render,
            GuardState::Denied(reason) => {
                let route = self.policy.route_for(reason).to_string();
                warn!(reason = %reason, route = %route, "access denied, redirecting");
                notifier.notify(&reason.to_string());
                navigator.go_to(&route);
                self.redirected_to = Some(route);
                Decision::Nothing
            }
        };

        self.state = next;
        decision
    }

    /// Starts over as if freshly mounted.
    pub fn reset(&mut self) {
        self.state = GuardState::Pending;
        self.redirected_to = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        routes: RefCell<Vec<String>>,
        messages: RefCell<Vec<String>>,
    }

    impl Navigator for Recorder {
        fn go_to(&self, route: &str) {
            self.routes.borrow_mut().push(route.to_string());
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn signed_in(role: Role) -> AuthSession {
        AuthSession::signed_in(User::new("someone@example.com", role))
    }

    #[test]
    fn classify_is_pure() {
        let guard = AccessGuard::new([Role::Plant]);
        assert_eq!(guard.classify(&AuthSession::loading()), GuardState::Pending);
        assert_eq!(guard.classify(&signed_in(Role::Plant)), GuardState::Granted);
        assert_eq!(guard.state(), &GuardState::Pending);
    }

    #[test]
    fn authenticated_flag_without_user_is_unauthenticated() {
        let guard = AccessGuard::any_authenticated();
        let session = AuthSession {
            user: None,
            is_loading: false,
            is_authenticated: true,
        };
        assert_eq!(
            guard.classify(&session),
            GuardState::Denied(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn user_without_authenticated_flag_is_unauthenticated() {
        let guard = AccessGuard::any_authenticated();
        let session = AuthSession {
            user: Some(User::new("a@b.c", Role::Admin)),
            is_loading: false,
            is_authenticated: false,
        };
        assert_eq!(
            guard.classify(&session),
            GuardState::Denied(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn denied_is_terminal_for_the_mount() {
        let recorder = Recorder::default();
        let mut guard = AccessGuard::new([Role::Printing]);

        assert_eq!(
            guard.evaluate(&AuthSession::anonymous(), &recorder, &recorder),
            Decision::Nothing
        );
        // A later, different denial must not redirect again.
        assert_eq!(
            guard.evaluate(&signed_in(Role::User), &recorder, &recorder),
            Decision::Nothing
        );
        // Even a session that would be granted stays denied until reset.
        assert_eq!(
            guard.evaluate(&signed_in(Role::Printing), &recorder, &recorder),
            Decision::Nothing
        );

        assert_eq!(*recorder.routes.borrow(), vec!["/login".to_string()]);
        assert_eq!(recorder.messages.borrow().len(), 1);
        assert_eq!(guard.redirected_to(), Some("/login"));
    }

    #[test]
    fn reset_allows_a_new_evaluation() {
        let recorder = Recorder::default();
        let mut guard = AccessGuard::new([Role::Printing]);
        guard.evaluate(&AuthSession::anonymous(), &recorder, &recorder);
        guard.reset();

        assert_eq!(guard.redirected_to(), None);
        assert_eq!(
            guard.evaluate(&signed_in(Role::Printing), &recorder, &recorder),
            Decision::Render
        );
    }

    #[test]
    fn logout_after_grant_redirects_to_login() {
        let recorder = Recorder::default();
        let mut guard = AccessGuard::any_authenticated();

        assert_eq!(
            guard.evaluate(&signed_in(Role::User), &recorder, &recorder),
            Decision::Render
        );
        assert_eq!(
            guard.evaluate(&AuthSession::anonymous(), &recorder, &recorder),
            Decision::Nothing
        );
        assert_eq!(*recorder.routes.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn custom_policy_routes() {
        let recorder = Recorder::default();
        let mut guard = AccessGuard::new([Role::Admin]).with_policy(RedirectPolicy {
            login_route: "/sign-in".to_string(),
            fallback_route: "/dashboard".to_string(),
        });

        guard.evaluate(&signed_in(Role::Plant), &recorder, &recorder);
        assert_eq!(*recorder.routes.borrow(), vec!["/dashboard".to_string()]);
    }

    #[test]
    fn closures_are_navigators() {
        let seen = RefCell::new(None);
        let navigate = |route: &str| *seen.borrow_mut() = Some(route.to_string());
        let mut guard = AccessGuard::new([Role::Plant]);

        guard.evaluate(&AuthSession::anonymous(), &navigate, &Silent);
        assert_eq!(seen.borrow().as_deref(), Some("/login"));
    }

    #[test]
    fn deny_reason_messages() {
        assert_eq!(
            DenyReason::Unauthenticated.to_string(),
            "Please login to continue"
        );
        assert!(DenyReason::Unauthorized { role: Role::User }
            .to_string()
            .starts_with("Access denied"));
    }
}
