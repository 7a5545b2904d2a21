//! Route handlers for the catalog service.

pub mod catalog;
pub mod health;
pub mod root;
