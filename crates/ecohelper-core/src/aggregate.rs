//! Usage totals and potential-saving estimates.
//!
//! Savings are fixed percentages of each total, rounded half-up to a whole
//! unit. Totals are never negative, so `f64::round` (half away from zero)
//! gives exactly that rule: a 2.5 liter total saves 1 liter, 12.5 saves 3.

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, Category};

/// Share of water use assumed avoidable.
pub const WATER_SAVING_RATE: f64 = 0.20;
/// Share of energy use assumed avoidable.
pub const ENERGY_SAVING_RATE: f64 = 0.15;

/// Today's totals across the activity log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Liters
    pub water_total: f64,
    /// kWh
    pub energy_total: f64,
    pub water_saving: i64,
    pub energy_saving: i64,
    pub activity_count: usize,
}

impl UsageSummary {
    pub fn total(&self, category: Category) -> f64 {
        match category {
            Category::Water => self.water_total,
            Category::Energy => self.energy_total,
        }
    }

    pub fn saving(&self, category: Category) -> i64 {
        match category {
            Category::Water => self.water_saving,
            Category::Energy => self.energy_saving,
        }
    }
}

/// Round `total * rate` half-up to a whole unit.
pub fn potential_saving(total: f64, rate: f64) -> i64 {
    (total * rate).round() as i64
}

/// Sum durations in ascending order so the total does not depend on the
/// order they were logged in.
fn ordered_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Sum durations per category and derive the saving estimates.
///
/// An empty input yields all zeros. Reordering the input never changes the
/// result.
pub fn aggregate<'a, I>(activities: I) -> UsageSummary
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut water = Vec::new();
    let mut energy = Vec::new();
    for activity in activities {
        match activity.category {
            Category::Water => water.push(activity.duration),
            Category::Energy => energy.push(activity.duration),
        }
    }

    let mut summary = UsageSummary {
        activity_count: water.len() + energy.len(),
        water_total: ordered_sum(water),
        energy_total: ordered_sum(energy),
        ..UsageSummary::default()
    };
    summary.water_saving = potential_saving(summary.water_total, WATER_SAVING_RATE);
    summary.energy_saving = potential_saving(summary.energy_total, ENERGY_SAVING_RATE);
    summary
}
