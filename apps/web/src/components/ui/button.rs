use leptos::prelude::*;

const PRIMARY: &str = "text-white bg-teal-700 hover:bg-teal-800 focus:ring-4 focus:outline-none focus:ring-teal-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center";
const OUTLINE: &str = "text-teal-800 bg-white border border-teal-600 hover:bg-teal-50 focus:ring-4 focus:outline-none focus:ring-teal-200 font-medium rounded-lg text-sm px-4 py-2 text-center";

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    /// Renders the lighter outlined style, used for filter chips.
    #[prop(optional, into, default = Signal::from(false))]
    outline: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=move || if outline.get() { OUTLINE } else { PRIMARY }
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
