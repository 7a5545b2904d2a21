use crate::{
    guard::{AccessGuard, Decision, Navigator, Notifier, RedirectPolicy},
    session::{AuthSession, Role},
};

/// Output of a guarded view for one evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<V> {
    /// Session still resolving; show a neutral loading indicator.
    Loading,
    View(V),
    /// Access denied and a redirect is in flight.
    Nothing,
}

impl<V> Rendered<V> {
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Rendered<U> {
        match self {
            Rendered::Loading => Rendered::Loading,
            Rendered::View(view) => Rendered::View(f(view)),
            Rendered::Nothing => Rendered::Nothing,
        }
    }

    #[must_use]
    pub fn is_view(&self) -> bool {
        matches!(self, Rendered::View(_))
    }
}

/// A protected view paired with the guard that decides whether it renders.
/// The view builder is only invoked when access is granted.
pub struct Guarded<F> {
    guard: AccessGuard,
    view: F,
}

/// Wraps `view` so it only renders for sessions whose role is in `allowed`.
pub fn with_access_control<F, V>(allowed: impl IntoIterator<Item = Role>, view: F) -> Guarded<F>
where
    F: Fn() -> V,
{
    Guarded {
        guard: AccessGuard::new(allowed),
        view,
    }
}

impl<F> Guarded<F> {
    #[must_use]
    pub fn with_policy(mut self, policy: RedirectPolicy) -> Self {
        self.guard = self.guard.with_policy(policy);
        self
    }

    #[must_use]
    pub fn guard(&self) -> &AccessGuard {
        &self.guard
    }

    pub fn render<V, N, M>(&mut self, session: &AuthSession, navigator: &N, notifier: &M) -> Rendered<V>
    where
        F: Fn() -> V,
        N: Navigator + ?Sized,
        M: Notifier + ?Sized,
    {
        match self.guard.evaluate(session, navigator, notifier) {
            Decision::Loading => Rendered::Loading,
            Decision::Render => Rendered::View((self.view)()),
            Decision::Nothing => Rendered::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{guard::Silent, session::User};
    use std::cell::Cell;

    #[test]
    fn view_is_built_only_when_granted() {
        let builds = Cell::new(0);
        let mut guarded = with_access_control([Role::Plant], || {
            builds.set(builds.get() + 1);
            "plant dashboard"
        });
        let ignore = |_: &str| {};

        assert_eq!(
            guarded.render(&AuthSession::loading(), &ignore, &Silent),
            Rendered::Loading
        );
        assert_eq!(builds.get(), 0);

        let session = AuthSession::signed_in(User::new("p@example.com", Role::Plant));
        assert_eq!(
            guarded.render(&session, &ignore, &Silent),
            Rendered::View("plant dashboard")
        );
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn map_keeps_non_view_variants() {
        let loading: Rendered<u8> = Rendered::Loading;
        assert_eq!(loading.map(|v| v + 1), Rendered::Loading);
        assert_eq!(Rendered::View(1u8).map(|v| v + 1), Rendered::View(2));
        assert!(!Rendered::<u8>::Nothing.is_view());
    }
}
