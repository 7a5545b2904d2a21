use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            AlertKind::Success => {
                "rounded-lg border border-teal-200 bg-teal-50 px-4 py-3 text-sm text-teal-800"
            }
            AlertKind::Info => "rounded-lg border border-sky-200 bg-sky-50 px-4 py-3 text-sm text-sky-800",
        }
    }
}

/// Inline status banner.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! { <div class=kind.class() role="alert">{message}</div> }
}
