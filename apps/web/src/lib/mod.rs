//! Shared frontend utilities: API access, configuration, errors and build
//! metadata. Everything here is public information; nothing sensitive passes
//! through these helpers.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

/// Short commit hash of the build, shown in the footer.
#[cfg(target_arch = "wasm32")]
pub(crate) const GIT_COMMIT_HASH: &str = env!("BEVPACK_WEB_GIT_SHA");

#[cfg(target_arch = "wasm32")]
pub(crate) use api::get_json;
#[cfg(target_arch = "wasm32")]
pub(crate) use errors::AppError;
