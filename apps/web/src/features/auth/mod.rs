//! Demo sign-in and role gating. The session lives in browser storage and is
//! trusted as-is, so this only shapes navigation; nothing here protects data.

#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod storage;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireRole;
