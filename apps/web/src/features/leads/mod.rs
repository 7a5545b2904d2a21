//! Contact and quote requests. There is no lead backend: a valid submission
//! is written to the browser console and the visitor is sent home.

pub(crate) mod form;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::LeadFormView;
