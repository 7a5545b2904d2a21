use super::form::{LeadForm, LeadKind};
use crate::components::{use_toasts, Alert, AlertKind, Button};
use leptos::{ev::SubmitEvent, logging, prelude::*};
use leptos_router::{hooks::use_navigate, NavigateOptions};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900";

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    set: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class=LABEL_CLASS for=id>{label}</label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder.unwrap_or("")
                on:input=move |event| set.set(event_target_value(&event))
            />
        </div>
    }
}

/// Contact or quote form. Valid submissions are logged and the visitor is
/// redirected home with a thank-you toast.
#[component]
pub fn LeadFormView(kind: LeadKind) -> impl IntoView {
    let navigate = use_navigate();
    let toasts = use_toasts();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (product, set_product) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let product_names: Vec<String> = catalog::standard()
        .map(|table| table.products().iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = LeadForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            company: company.get_untracked(),
            product: product.get_untracked(),
            quantity: quantity.get_untracked(),
            message: message.get_untracked(),
        };

        match form.validate(kind) {
            Ok(lead) => {
                match serde_json::to_string(&lead) {
                    Ok(json) => logging::log!("lead submitted: {json}"),
                    Err(err) => logging::warn!("lead could not be encoded: {err}"),
                }
                toasts.show("Thank you! Our team will get back to you shortly.");
                navigate("/", NavigateOptions::default());
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let quote_fields = move || {
        (kind == LeadKind::Quote).then(|| {
            let options = product_names.clone();
            view! {
                <Field id="company" label="Company" set=set_company />
                <div class="mb-4">
                    <label class=LABEL_CLASS for="product">"Product"</label>
                    <select
                        id="product"
                        class=INPUT_CLASS
                        on:change=move |event| set_product.set(event_target_value(&event))
                    >
                        <option value="">"Select a bottle"</option>
                        {options
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Field
                    id="quantity"
                    label="Quantity (cases)"
                    input_type="number"
                    placeholder="200"
                    set=set_quantity
                />
            }
        })
    };

    view! {
        <form class="max-w-lg mx-auto" on:submit=on_submit>
            <Field id="name" label="Your name" set=set_name />
            <Field
                id="email"
                label="Email"
                input_type="email"
                placeholder="name@company.com"
                set=set_email
            />
            <Field id="phone" label="Phone" input_type="tel" set=set_phone />
            {quote_fields}
            <div class="mb-4">
                <label class=LABEL_CLASS for="message">
                    {if kind == LeadKind::Quote { "Notes" } else { "Message" }}
                </label>
                <textarea
                    id="message"
                    rows="4"
                    class=INPUT_CLASS
                    on:input=move |event| set_message.set(event_target_value(&event))
                ></textarea>
            </div>
            <Button button_type="submit">
                {if kind == LeadKind::Quote { "Request quote" } else { "Send message" }}
            </Button>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
