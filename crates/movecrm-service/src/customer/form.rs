//! The add-customer form and its mapping to a record draft.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use movecrm_core::error::AppError;
use movecrm_entity::NewCustomer;

/// Raw add-customer form input.
///
/// Every field is text as typed; blank optional fields become `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerForm {
    /// Full name (required).
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email (required).
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is not a valid address")
    )]
    pub email: String,
    /// Contact phone (required).
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// Free-form notes.
    pub notes: String,
}

impl CustomerForm {
    /// Check required fields and build the record draft.
    pub fn into_draft(self) -> Result<NewCustomer, AppError> {
        let form = self.trimmed();
        form.validate().map_err(validation_error)?;
        Ok(NewCustomer {
            name: form.name,
            email: form.email,
            phone: form.phone,
            address: non_blank(form.address),
            notes: non_blank(form.notes),
        })
    }

    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Flatten `validator` output into a single validation error.
fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            errs.first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"))
        })
        .collect();
    messages.sort();
    AppError::validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use movecrm_core::error::ErrorKind;

    fn jane() -> CustomerForm {
        CustomerForm {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_maps_fields() {
        let draft = jane().into_draft().unwrap();
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.email, "jane@x.com");
        assert_eq!(draft.phone, "555-0100");
        assert_eq!(draft.address, None);
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn test_optional_fields_are_kept_when_filled() {
        let form = CustomerForm {
            address: " 12 Elm St ".to_string(),
            notes: "Call after 5pm".to_string(),
            ..jane()
        };
        let draft = form.into_draft().unwrap();
        assert_eq!(draft.address.as_deref(), Some("12 Elm St"));
        assert_eq!(draft.notes.as_deref(), Some("Call after 5pm"));
    }

    #[test]
    fn test_blank_required_fields_are_rejected() {
        let form = CustomerForm {
            name: "   ".to_string(),
            ..jane()
        };
        let err = form.into_draft().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("Name is required"));
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let form = CustomerForm {
            email: "not-an-email".to_string(),
            ..jane()
        };
        let err = form.into_draft().unwrap_err();
        assert!(err.message.contains("Email is not a valid address"));
    }
}
