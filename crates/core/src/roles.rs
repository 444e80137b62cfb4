//! Well-known role name constants.
//!
//! Roles are derived from the `users.is_staff` column and embedded in JWT
//! claims; there is no roles table.

pub const ROLE_STAFF: &str = "staff";
pub const ROLE_AUTHOR: &str = "author";

/// Resolve the role name for a user row.
pub fn role_for(is_staff: bool) -> &'static str {
    if is_staff {
        ROLE_STAFF
    } else {
        ROLE_AUTHOR
    }
}
