use crate::components::AppShell;
use crate::features::leads::{form::LeadKind, LeadFormView};
use leptos::prelude::*;

#[component]
pub fn QuotePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="max-w-screen-xl mx-auto p-6">
                <h1 class="mb-2 text-3xl font-bold text-teal-900">"Request a quote"</h1>
                <p class="mb-8 text-gray-600">
                    "Tell us which bottle and how many cases; pricing comes back within one working day."
                </p>
                <LeadFormView kind=LeadKind::Quote />
            </section>
        </AppShell>
    }
}
