//! Frontend features: sign-in state and role gating, the product catalog and
//! lead capture. Routes import these to keep view code focused on layout.

pub(crate) mod auth;
#[cfg(target_arch = "wasm32")]
pub(crate) mod catalog;
pub(crate) mod leads;
