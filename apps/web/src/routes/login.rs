//! Demo staff sign-in. There is no credential check: the chosen role is
//! stored as-is and only decides which dashboards the navigation offers.

use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::state::use_auth;
use access_guard::{Role, User};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{hooks::use_navigate, NavigateOptions};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-teal-500 focus:border-teal-500 block w-full p-2.5";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(Role::User);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_error.set(Some("Email is required.".to_string()));
            return;
        }

        auth.set_session(User::new(email_value, role.get_untracked()));
        navigate("/dashboard", NavigateOptions::default());
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto mt-10" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-bold text-teal-900">"Staff sign in"</h1>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                        "Work email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        placeholder="name@bevpack.dev"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="role">
                        "Role"
                    </label>
                    <select
                        id="role"
                        class=INPUT_CLASS
                        on:change=move |event| {
                            match event_target_value(&event).parse::<Role>() {
                                Ok(value) => set_role.set(value),
                                Err(err) => set_error.set(Some(err.to_string())),
                            }
                        }
                    >
                        {Role::ALL
                            .iter()
                            .map(|role| {
                                view! { <option value=role.as_str()>{role.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Button button_type="submit">"Sign in"</Button>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
