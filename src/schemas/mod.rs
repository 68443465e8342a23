//! Request and response shapes.
//!
//! Inputs are checked in two steps. Deserialization rejects missing fields and
//! wrong primitive types; [`Validate`] then applies the semantic rules. Either
//! way the resulting [`AppError::Validation`] message names the field.
//! Outputs are plain `From<Entity>` conversions.

pub mod collection;
pub mod plan;
pub mod session;
pub mod user;
pub mod workout;

pub use collection::{WorkoutCollectionCreate, WorkoutCollectionOut};
pub use plan::{WorkoutPlanCreate, WorkoutPlanOut};
pub use session::{WorkoutSessionCreate, WorkoutSessionOut};
pub use user::{UserCreate, UserLogin, UserOut};
pub use workout::{WorkoutCreate, WorkoutOut};

use crate::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field}: must not be blank")));
    }
    Ok(())
}

pub(crate) fn require_email(field: &str, value: &str) -> Result<()> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field}: not a valid email address"
        )))
    }
}

/// Lowercases the domain and keeps the local part as written, so addresses
/// that differ only in domain case are the same login key.
pub fn normalize_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => value.to_string(),
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@x.com", "ann.lee+gym@mail.example.org", "x_1@sub-domain.io"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@x.com",
            "a@",
            "a@x",
            "a@x..com",
            "a@.com",
            "a@@x.com",
            "a b@x.com",
            "a@-x.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_normalize_email_lowercases_domain_only() {
        assert_eq!(normalize_email("Ann.Lee@X.COM"), "Ann.Lee@x.com");
        assert_eq!(normalize_email("ann@x.com"), "ann@x.com");
    }

    #[test]
    fn test_require_text_names_field() {
        let err = require_text("name", "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("name:")));
        assert!(require_text("name", "Leg Day").is_ok());
    }

    #[test]
    fn test_require_email_names_field() {
        let err = require_email("email", "nope").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("email:")));
    }
}
