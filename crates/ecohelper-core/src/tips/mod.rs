//! Advisory tips and their personalization.
//!
//! The catalog is a fixed constant list. [`select_tips`] picks and orders up
//! to [`MAX_TIPS`] of them from the categories present in the activity log.

mod catalog;
mod selector;

pub use catalog::TIP_CATALOG;
pub use selector::{select_tips, LogProfile, MAX_TIPS, SHORTER_SHOWERS, SHOWER_TYPE};

use serde::Serialize;
use std::fmt;

use crate::activity::{Category, Icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        })
    }
}

/// Category affinity of a tip. `General` tips survive every filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Water,
    Energy,
    General,
}

impl TipCategory {
    pub fn icon(self) -> Icon {
        match self {
            TipCategory::Water => Icon::Droplets,
            TipCategory::Energy => Icon::Zap,
            TipCategory::General => Icon::Sparkles,
        }
    }

    /// Whether a tip of this category stays eligible when the log only
    /// holds `category` activities.
    pub fn fits(self, category: Category) -> bool {
        matches!(
            (self, category),
            (TipCategory::General, _)
                | (TipCategory::Water, Category::Water)
                | (TipCategory::Energy, Category::Energy)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub category: TipCategory,
}

impl Tip {
    /// Badge text, e.g. "high impact".
    pub fn badge(&self) -> String {
        format!("{} impact", self.impact)
    }
}

/// A tip as drawn on the tip panel, with its category icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipCard {
    #[serde(flatten)]
    pub tip: Tip,
    pub icon: Icon,
}

impl From<Tip> for TipCard {
    fn from(tip: Tip) -> Self {
        Self {
            tip,
            icon: tip.category.icon(),
        }
    }
}
