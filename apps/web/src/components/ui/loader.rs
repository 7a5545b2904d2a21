//! Full-page loader shown on first paint. Purely decorative.

use leptos::prelude::*;
use std::time::Duration;

const TICK_MS: u64 = 30;

/// Next progress value; eases towards 100 and never overshoots.
fn advance(progress: u8) -> u8 {
    let step = ((100 - progress.min(100)) / 12).max(1);
    progress.saturating_add(step).min(100)
}

#[component]
pub fn PageLoader() -> impl IntoView {
    let (progress, set_progress) = signal(0_u8);
    let (hidden, set_hidden) = signal(false);

    if let Ok(handle) = set_interval_with_handle(
        move || {
            let next = advance(progress.get_untracked());
            set_progress.set(next);
            if next >= 100 {
                set_hidden.set(true);
            }
        },
        Duration::from_millis(TICK_MS),
    ) {
        on_cleanup(move || handle.clear());
        Effect::new(move |_| {
            if hidden.get() {
                handle.clear();
            }
        });
    }

    view! {
        <div
            class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-white transition-opacity duration-500"
            class:opacity-0=move || hidden.get()
            class:pointer-events-none=move || hidden.get()
            aria-hidden=move || hidden.get().to_string()
        >
            <img src="/logo.svg" class="h-12 mb-6" alt="bevpack" />
            <div class="h-1.5 w-48 overflow-hidden rounded-full bg-teal-100">
                <div
                    class="h-full bg-teal-600 transition-[width] duration-100"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
            <span class="mt-3 text-xs text-gray-500">{move || format!("{}%", progress.get())}</span>
        </div>
    }
}
