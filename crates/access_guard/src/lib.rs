//! Role-gated access control for protected views.
//!
//! The guard never looks anything up on its own: callers pass an
//! [`AuthSession`] snapshot plus a [`Navigator`] and a [`Notifier`] on every
//! evaluation, which keeps it independent of any UI framework and testable
//! without an application shell.
//!
//! This is a UX gate only. Roles come from client state and are trusted as
//! given; anything that must actually be protected needs server-side checks.

mod guard;
mod guarded;
mod session;

pub use guard::{
    AccessGuard, Decision, DenyReason, GuardState, Navigator, Notifier, RedirectPolicy, Silent,
    FALLBACK_ROUTE, LOGIN_ROUTE,
};
pub use guarded::{with_access_control, Guarded, Rendered};
pub use session::{AuthSession, Role, UnknownRole, User};
