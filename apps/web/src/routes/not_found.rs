use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-8xl font-black text-teal-100 select-none">"404"</h1>
                <p class="mt-2 text-2xl font-bold text-gray-900">"Page not found"</p>
                <p class="mt-4 max-w-sm text-gray-500">
                    "That page does not exist. Try the catalog or head back home."
                </p>
                <div class="mt-6 flex flex-col sm:flex-row items-center gap-4">
                    <A
                        href="/"
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-white bg-teal-700 rounded-lg hover:bg-teal-800"
                    >
                        "Go home"
                    </A>
                    <A
                        href="/products"
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-teal-800 border border-teal-600 rounded-lg hover:bg-teal-50"
                    >
                        "Browse products"
                    </A>
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 hover:text-teal-700"
                        on:click=go_back
                    >
                        "Go back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
