use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone)]
pub struct Slide {
    pub video: &'static str,
    pub poster: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

/// Hero carousel that advances on a fixed interval; dots jump directly.
#[component]
pub fn Carousel(slides: Vec<Slide>, #[prop(default = 6_000)] interval_ms: u64) -> impl IntoView {
    let count = slides.len();
    let (current, set_current) = signal(0_usize);

    if count > 1 {
        if let Ok(handle) = set_interval_with_handle(
            move || set_current.update(|index| *index = (*index + 1) % count),
            Duration::from_millis(interval_ms),
        ) {
            on_cleanup(move || handle.clear());
        }
    }

    let slides = StoredValue::new(slides);

    view! {
        <section class="relative h-[70vh] w-full overflow-hidden bg-gray-900">
            {move || {
                slides
                    .with_value(|slides| slides.get(current.get()).cloned())
                    .map(|slide| {
                        view! {
                            <video
                                class="absolute inset-0 h-full w-full object-cover opacity-70"
                                src=slide.video
                                poster=slide.poster
                                autoplay=true
                                muted=true
                                loop=true
                                playsinline=true
                            ></video>
                            <div class="relative z-10 flex h-full flex-col items-start justify-end gap-3 p-10 text-white">
                                <h1 class="text-4xl font-bold md:text-5xl">{slide.title}</h1>
                                <p class="max-w-xl text-lg text-gray-100">{slide.caption}</p>
                            </div>
                        }
                    })
            }}
            <div class="absolute bottom-6 right-10 z-20 flex gap-2">
                {(0..count)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                class="h-2.5 w-2.5 rounded-full bg-white/50"
                                class:bg-white=move || current.get() == index
                                aria-label=format!("Slide {}", index + 1)
                                on:click=move |_| set_current.set(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
