//! Payload validation with per-field error messages.
//!
//! Field rules are declared with `validator` derives; cross-field rules are
//! checked by hand afterwards. Both end up in one [`FieldErrors`] map so a
//! client sees every problem with a payload in a single 400 response.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Field name -> human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten `validator` output into [`FieldErrors`].
///
/// Each error contributes its custom message, or its code when none is set.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = out.entry(field.to_string()).or_default();
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            messages.push(message);
        }
    }
    out
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn finish(errors: FieldErrors) -> Result<(), CoreError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(errors))
    }
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

/// The user-editable recipe fields, as they will be after a create or patch.
///
/// Every field is optional so the same rules apply to partial updates; a
/// `None` field is simply not checked.
#[derive(Debug, Clone, Default, Validate)]
pub struct RecipeFields {
    #[validate(length(min = 5, max = 65, message = "Title must have between 5 and 65 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 165, message = "Description must have at most 165 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Must be a positive number"))]
    pub preparation_time: Option<i32>,

    #[validate(length(min = 1, max = 65, message = "Unit must have between 1 and 65 characters"))]
    pub preparation_time_unit: Option<String>,

    #[validate(range(min = 1, message = "Must be a positive number"))]
    pub servings: Option<i32>,

    #[validate(length(min = 1, max = 65, message = "Unit must have between 1 and 65 characters"))]
    pub servings_unit: Option<String>,

    #[validate(length(min = 1, message = "Preparation steps must not be empty"))]
    pub preparation_steps: Option<String>,
}

/// Validate recipe fields, including the title/description cross-check.
pub fn validate_recipe_fields(fields: &RecipeFields) -> Result<(), CoreError> {
    let mut errors = match fields.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => field_errors(&e),
    };

    if let (Some(title), Some(description)) = (&fields.title, &fields.description) {
        if !title.trim().is_empty() && title.trim() == description.trim() {
            let message = "Title and description must be different";
            push(&mut errors, "title", message);
            push(&mut errors, "description", message);
        }
    }

    finish(errors)
}

// ---------------------------------------------------------------------------
// Author accounts
// ---------------------------------------------------------------------------

/// Fields of an author registration.
#[derive(Debug, Clone, Validate)]
pub struct AccountFields {
    #[validate(length(min = 4, max = 150, message = "Username must have between 4 and 150 characters"))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// Validate registration fields; usernames are additionally restricted to
/// ASCII letters, digits and `@.+-_`.
pub fn validate_account_fields(fields: &AccountFields) -> Result<(), CoreError> {
    let mut errors = match fields.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => field_errors(&e),
    };

    let allowed = |c: char| c.is_ascii_alphanumeric() || "@.+-_".contains(c);
    if !fields.username.chars().all(allowed) {
        push(
            &mut errors,
            "username",
            "Username may contain only letters, numbers and @/./+/-/_",
        );
    }

    finish(errors)
}
