//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- requires a valid access token.
//! - [`auth::MaybeAuthUser`] -- resolves the caller to a [`Requester`], anonymous when no token is sent.
//! - [`rbac::RequireStaff`] -- requires the `staff` role.
//!
//! [`Requester`]: recipes_core::requester::Requester

pub mod auth;
pub mod rbac;
