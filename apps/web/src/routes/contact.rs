use crate::app_lib::config::AppConfig;
use crate::components::AppShell;
use crate::features::leads::{form::LeadKind, LeadFormView};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let email = AppConfig::load().contact_email;
    let mailto = format!("mailto:{email}");

    view! {
        <AppShell>
            <section class="max-w-screen-xl mx-auto p-6">
                <h1 class="mb-2 text-3xl font-bold text-teal-900">"Contact us"</h1>
                <p class="mb-8 text-gray-600">
                    "Questions about bottles, labels or delivery? Write to "
                    <a href=mailto class="text-teal-700 hover:underline">{email}</a>
                    " or use the form below."
                </p>
                <LeadFormView kind=LeadKind::Contact />
            </section>
        </AppShell>
    }
}
