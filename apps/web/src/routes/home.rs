use crate::components::{AppShell, Carousel, Slide};
use leptos::prelude::*;
use leptos_router::components::A;

fn slides() -> Vec<Slide> {
    vec![
        Slide {
            video: "/media/hero-bottling-line.mp4",
            poster: "/media/hero-bottling-line.webp",
            title: "Bottles built for your brand",
            caption: "PET bottles from 250 ml to 1 litre, blown and capped in-house.",
        },
        Slide {
            video: "/media/hero-label-printing.mp4",
            poster: "/media/hero-label-printing.webp",
            title: "Labels printed on site",
            caption: "Full-colour wraparound labels with short turnaround times.",
        },
        Slide {
            video: "/media/hero-premium-glass.mp4",
            poster: "/media/hero-premium-glass.webp",
            title: "Premium glass for hospitality",
            caption: "Flint glass bottles for hotels, restaurants and events.",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <Carousel slides=slides() />
            <section class="max-w-screen-xl mx-auto grid gap-6 p-8 md:grid-cols-3">
                <div>
                    <h2 class="text-lg font-semibold text-teal-900">"Private label water"</h2>
                    <p class="text-sm text-gray-600">
                        "Pick a bottle, send your artwork and we handle filling, labelling and dispatch."
                    </p>
                </div>
                <div>
                    <h2 class="text-lg font-semibold text-teal-900">"Low minimums"</h2>
                    <p class="text-sm text-gray-600">
                        "Orders start at 150 cases, so new brands can launch without a warehouse."
                    </p>
                </div>
                <div>
                    <h2 class="text-lg font-semibold text-teal-900">"Talk to us"</h2>
                    <p class="text-sm text-gray-600">"Browse the catalog or ask for a quote."</p>
                    <div class="mt-3 flex gap-4 text-sm font-medium">
                        <A href="/products" {..} class="text-teal-700 hover:underline">"Products"</A>
                        <A href="/quote" {..} class="text-teal-700 hover:underline">"Get a quote"</A>
                    </div>
                </div>
            </section>
        </AppShell>
    }
}
