//! Staff dashboards. Each page is wrapped in `RequireRole`; the overview is
//! open to every signed-in role, the plant and printing boards are not.

use crate::components::AppShell;
use crate::features::auth::{state::use_auth, RequireRole};
use access_guard::Role;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn Board(title: &'static str, children: Children) -> impl IntoView {
    let auth = use_auth();
    let who = move || {
        auth.session.with(|session| {
            session
                .user
                .as_ref()
                .map(|user| format!("Signed in as {} ({})", user.email, user.role))
                .unwrap_or_default()
        })
    };

    view! {
        <section class="max-w-screen-xl mx-auto p-6">
            <h1 class="text-3xl font-bold text-teal-900">{title}</h1>
            <p class="mb-6 text-sm text-gray-500">{who}</p>
            {children()}
        </section>
    }
}

#[component]
fn Tile(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gray-200 bg-white p-5 shadow-sm">
            <h2 class="font-semibold text-gray-900">{title}</h2>
            <p class="mt-1 text-sm text-gray-600">{body}</p>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole roles=Role::ALL.to_vec()>
                <Board title="Dashboard">
                    <div class="grid gap-4 md:grid-cols-2">
                        <A href="/dashboard/plant" {..} class="block">
                            <Tile title="Plant" body="Line schedules, blow-moulding runs and dispatch." />
                        </A>
                        <A href="/dashboard/printing" {..} class="block">
                            <Tile title="Printing" body="Label artwork queue and press status." />
                        </A>
                    </div>
                </Board>
            </RequireRole>
        </AppShell>
    }
}

#[component]
pub fn PlantDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole roles=vec![Role::Plant, Role::Admin]>
                <Board title="Plant operations">
                    <div class="grid gap-4 md:grid-cols-3">
                        <Tile title="Line 1" body="1 Litre Collection, running." />
                        <Tile title="Line 2" body="500 ml Collection, changeover at 14:00." />
                        <Tile title="Dispatch" body="Four trucks booked for today." />
                    </div>
                </Board>
            </RequireRole>
        </AppShell>
    }
}

#[component]
pub fn PrintingDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRole roles=vec![Role::Printing, Role::Admin]>
                <Board title="Label printing">
                    <div class="grid gap-4 md:grid-cols-3">
                        <Tile title="Artwork queue" body="Three files awaiting approval." />
                        <Tile title="Press A" body="Premium Glass Collection labels." />
                        <Tile title="Press B" body="Idle." />
                    </div>
                </Board>
            </RequireRole>
        </AppShell>
    }
}
