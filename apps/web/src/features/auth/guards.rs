use crate::components::{use_toasts, Spinner, SpinnerSize};
use crate::features::auth::state::use_auth;
use access_guard::{AccessGuard, Decision, Role};
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

/// Renders `children` only for signed-in users whose role is in `roles`.
/// Everyone else is sent to the login page or home, once, with a toast.
#[component]
pub fn RequireRole(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let guard = StoredValue::new(AccessGuard::new(roles));
    let (decision, set_decision) = signal(Decision::Loading);

    Effect::new(move |_| {
        let session = auth.session.get();
        let go_to = |route: &str| navigate(route, NavigateOptions::default());
        let next = guard
            .try_update_value(|guard| guard.evaluate(&session, &go_to, &toasts))
            .unwrap_or(Decision::Nothing);
        set_decision.set(next);
    });

    move || match decision.get() {
        Decision::Loading => view! {
            <div class="flex justify-center py-16"><Spinner size=SpinnerSize::Large label="Checking access" /></div>
        }
        .into_any(),
        Decision::Render => children().into_any(),
        Decision::Nothing => ().into_any(),
    }
}
