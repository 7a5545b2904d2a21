//! Site chrome: header navigation, mobile menu toggle and footer. Dashboard
//! links only appear for signed-in users; the pages themselves are gated by
//! `RequireRole`.

use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::auth::state::use_auth;
use access_guard::Role;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate, NavigateOptions};

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-teal-700 md:p-0";

#[component]
fn NavLink(href: &'static str, label: &'static str, close: WriteSignal<bool>) -> impl IntoView {
    view! {
        <li>
            <A href=href {..} class=LINK_CLASS on:click=move |_| close.set(false)>
                {label}
            </A>
        </li>
    }
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let auth = use_auth();
    let navigate = use_navigate();

    let dashboard_links = move || {
        auth.role.get().map(|role| {
            let plant = matches!(role, Role::Plant | Role::Admin);
            let printing = matches!(role, Role::Printing | Role::Admin);
            view! {
                <NavLink href="/dashboard" label="Dashboard" close=set_menu_open />
                {plant
                    .then(|| {
                        view! { <NavLink href="/dashboard/plant" label="Plant" close=set_menu_open /> }
                    })}
                {printing
                    .then(|| {
                        view! {
                            <NavLink href="/dashboard/printing" label="Printing" close=set_menu_open />
                        }
                    })}
            }
        })
    };

    let sign_out = move |_| {
        auth.clear_session();
        set_menu_open.set(false);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3" on:click=move |_| set_menu_open.set(false)>
                        <img src="/logo.svg" class="h-8" alt="bevpack" />
                        <span class="font-semibold whitespace-nowrap text-teal-900">"Bevpack"</span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100"
                        aria-controls="navbar-main"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        "☰"
                    </button>
                    <div id="navbar-main" class="w-full md:block md:w-auto" class:hidden=move || !menu_open.get()>
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 md:flex-row md:space-x-8 md:mt-0">
                            <NavLink href="/products" label="Products" close=set_menu_open />
                            <NavLink href="/quote" label="Get a quote" close=set_menu_open />
                            <NavLink href="/contact" label="Contact" close=set_menu_open />
                            {dashboard_links}
                            <li>
                                <Show
                                    when=move || auth.is_authenticated.get()
                                    fallback=move || view! { <A href="/login" {..} class=LINK_CLASS>"Staff sign in"</A> }
                                >
                                    <button type="button" class=LINK_CLASS on:click=sign_out.clone()>
                                        "Sign out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">{children()}</main>
            <footer class="border-t border-gray-200 py-6 text-center text-xs text-gray-500">
                {format!("© Bevpack · build {GIT_COMMIT_HASH}")}
            </footer>
        </div>
    }
}
