//! Logged activities and the in-memory store that holds them.
//!
//! An [`Activity`] is one logged instance of water or energy consumption.
//! Activities are created only through [`ActivityStore::append`], which takes
//! a [`NewActivity`] that has already passed validation.

mod catalog;
mod store;
mod validator;

pub use catalog::{describe, types_for, ActivityTypeDescriptor, Icon, ACTIVITY_TYPES};
pub use store::ActivityStore;
pub use validator::{validate, ActivityForm};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Top-level resource classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Water,
    Energy,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Water, Category::Energy];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Water => "water",
            Category::Energy => "energy",
        }
    }

    /// Unit used on summary cards ("liters" / "kWh").
    pub fn unit(self) -> &'static str {
        match self {
            Category::Water => "liters",
            Category::Energy => "kWh",
        }
    }

    /// Unit used in the activity list ("L" / "kWh").
    pub fn short_unit(self) -> &'static str {
        match self {
            Category::Water => "L",
            Category::Energy => "kWh",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "water" => Ok(Category::Water),
            "energy" => Ok(Category::Energy),
            _ => Err(ValidationError::UnknownCategory {
                input: s.to_string(),
            }),
        }
    }
}

/// A validated submission waiting to be stamped by the store.
///
/// Fields are private so `duration > 0` and a non-empty type hold for every
/// value that exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    activity_type: String,
    category: Category,
    duration: f64,
}

impl NewActivity {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for a blank type and
    /// [`ValidationError::InvalidDuration`] for a non-finite or non-positive
    /// duration.
    pub fn new(
        category: Category,
        activity_type: impl Into<String>,
        duration: f64,
    ) -> Result<Self, ValidationError> {
        let activity_type = activity_type.into();
        if activity_type.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ValidationError::InvalidDuration {
                input: duration.to_string(),
            });
        }
        Ok(Self {
            activity_type,
            category,
            duration,
        })
    }

    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// One logged activity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub category: Category,
    /// Liters for water, kWh for energy.
    pub duration: f64,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    /// Display label from the type catalog, or the raw type when unknown.
    pub fn label(&self) -> &str {
        describe(&self.activity_type)
            .map(|d| d.label)
            .unwrap_or(self.activity_type.as_str())
    }

    pub fn icon(&self) -> Icon {
        describe(&self.activity_type)
            .map(|d| d.icon)
            .unwrap_or(Icon::Clock)
    }
}
