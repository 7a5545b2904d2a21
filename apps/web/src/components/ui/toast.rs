//! Transient notices. Guards report denials here; forms report success.

use access_guard::Notifier;
use leptos::prelude::*;
use std::time::Duration;

/// How long a toast stays on screen.
const TOAST_MS: u64 = 4_000;

#[derive(Clone, Copy)]
pub struct Toasts {
    message: RwSignal<Option<String>>,
    /// Bumped on every show so an older timeout cannot hide a newer toast.
    generation: RwSignal<u64>,
}

impl Toasts {
    pub fn show(&self, message: &str) {
        self.message.set(Some(message.to_string()));
        self.generation.update(|n| *n += 1);

        let shown = self.generation.get_untracked();
        let message = self.message;
        let generation = self.generation;
        set_timeout(
            move || {
                if generation.get_untracked() == shown {
                    message.set(None);
                }
            },
            Duration::from_millis(TOAST_MS),
        );
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str) {
        self.show(message);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| Toasts {
        message: RwSignal::new(None),
        generation: RwSignal::new(0),
    })
}

/// Provides the toast context and renders the active toast above the page.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts {
        message: RwSignal::new(None),
        generation: RwSignal::new(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        {move || {
            toasts
                .message
                .get()
                .map(|message| {
                    view! {
                        <div
                            class="fixed bottom-6 right-6 z-50 flex items-center gap-3 rounded-lg bg-gray-900 px-4 py-3 text-sm text-white shadow-lg"
                            role="status"
                        >
                            <span>{message}</span>
                            <button
                                type="button"
                                class="text-gray-300 hover:text-white"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss()
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
