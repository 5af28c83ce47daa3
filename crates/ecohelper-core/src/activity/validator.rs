//! Submission validation at the boundary of the activity store.

use serde::{Deserialize, Serialize};

use super::{Category, NewActivity};
use crate::error::ValidationError;

/// Raw form input as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityForm {
    pub category: Option<Category>,
    pub activity_type: String,
    pub duration: String,
}

impl ActivityForm {
    pub fn new(
        category: Category,
        activity_type: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category),
            activity_type: activity_type.into(),
            duration: duration.into(),
        }
    }

    /// Build a form from three text fields. A blank category is left unset
    /// so that [`validate`] reports it as a missing field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownCategory`] when the category text is
    /// present but not recognised.
    pub fn from_fields(
        category: &str,
        activity_type: &str,
        duration: &str,
    ) -> Result<Self, ValidationError> {
        let category = if category.trim().is_empty() {
            None
        } else {
            Some(category.parse()?)
        };
        Ok(Self {
            category,
            activity_type: activity_type.to_string(),
            duration: duration.to_string(),
        })
    }
}

/// Check a form and turn it into a candidate for the store.
///
/// # Errors
///
/// [`ValidationError::MissingField`] when any field is blank,
/// [`ValidationError::InvalidDuration`] when the amount does not parse as a
/// finite number greater than zero.
pub fn validate(form: &ActivityForm) -> Result<NewActivity, ValidationError> {
    let activity_type = form.activity_type.trim();
    let raw = form.duration.trim();

    let category = match form.category {
        Some(category) if !activity_type.is_empty() && !raw.is_empty() => category,
        _ => return Err(ValidationError::MissingField),
    };

    let invalid = || ValidationError::InvalidDuration {
        input: raw.to_string(),
    };
    let duration: f64 = raw.parse().map_err(|_| invalid())?;
    if !duration.is_finite() || duration <= 0.0 {
        return Err(invalid());
    }

    NewActivity::new(category, activity_type, duration)
}
