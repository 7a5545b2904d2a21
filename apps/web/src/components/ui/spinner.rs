//! Inline busy indicator for sections waiting on data.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn ring(self) -> &'static str {
        match self {
            Self::Small => "h-4 w-4 border-2",
            Self::Medium => "h-8 w-8 border-4",
            Self::Large => "h-12 w-12 border-[5px]",
        }
    }
}

/// Spinning ring with an optional caption underneath. The caption doubles
/// as the accessible label.
#[component]
pub fn Spinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let aria_label = label.clone().unwrap_or_else(|| "Loading".to_string());
    let ring = format!(
        "inline-block animate-spin rounded-full border-teal-100 border-t-teal-600 {}",
        size.ring()
    );

    view! {
        <div class="flex flex-col items-center gap-3" role="status" aria-live="polite" aria-label=aria_label>
            <div class=ring></div>
            {label.map(|text| view! { <span class="text-sm text-gray-500">{text}</span> })}
        </div>
    }
}
