//! Domain logic for the recipes application.
//!
//! This crate has zero internal dependencies and performs no I/O. Every
//! function here operates on collections the caller has already fetched, so
//! the same rules back both the HTML pages and the REST API.
//!
//! Retrieval pipeline, leaf-first:
//!
//! - [`visibility`] -- published-only filtering and per-requester visibility.
//! - [`ownership`] -- who may mutate a recipe.
//! - [`filters`] -- category and tag narrowing.
//! - [`search`] -- free-text matching.
//! - [`pagination`] -- fixed-size pages and the page-number widget window.
//! - [`retrieval`] -- composes all of the above.

pub mod error;
pub mod filters;
pub mod ownership;
pub mod pagination;
pub mod record;
pub mod requester;
pub mod retrieval;
pub mod roles;
pub mod search;
pub mod slug;
pub mod types;
pub mod validation;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_support;
