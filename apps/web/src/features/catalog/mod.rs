//! Product catalog: fetched from the catalog API, with the shipped table as
//! a fallback when the API is unreachable.

mod client;

pub(crate) use client::load;
