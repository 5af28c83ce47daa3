//! Static catalog of known activity types.
//!
//! The average magnitude is only a placeholder hint for the input form; it
//! never feeds into totals.

use serde::Serialize;

use super::Category;

/// Icon reference for an activity or tip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Droplets,
    Zap,
    Sparkles,
    Clock,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Droplets => "droplets",
            Icon::Zap => "zap",
            Icon::Sparkles => "sparkles",
            Icon::Clock => "clock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityTypeDescriptor {
    pub value: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub icon: Icon,
    pub avg_magnitude: f64,
}

const fn water(value: &'static str, label: &'static str, avg: f64) -> ActivityTypeDescriptor {
    ActivityTypeDescriptor {
        value,
        label,
        category: Category::Water,
        icon: Icon::Droplets,
        avg_magnitude: avg,
    }
}

const fn energy(value: &'static str, label: &'static str, avg: f64) -> ActivityTypeDescriptor {
    ActivityTypeDescriptor {
        value,
        label,
        category: Category::Energy,
        icon: Icon::Zap,
        avg_magnitude: avg,
    }
}

pub const ACTIVITY_TYPES: [ActivityTypeDescriptor; 10] = [
    water("shower", "Shower", 40.0),
    water("bath", "Bath", 80.0),
    water("dishwasher", "Dishwasher", 15.0),
    water("laundry", "Laundry", 50.0),
    water("garden", "Garden Watering", 30.0),
    energy("hvac", "Heating/Cooling", 2.0),
    energy("lighting", "Lighting", 0.5),
    energy("cooking", "Cooking", 1.5),
    energy("tv", "TV/Entertainment", 0.3),
    energy("computer", "Computer", 0.4),
];

/// Look up a type identifier across both categories.
pub fn describe(value: &str) -> Option<&'static ActivityTypeDescriptor> {
    ACTIVITY_TYPES.iter().find(|d| d.value == value)
}

/// Types offered for a category, in catalog order.
pub fn types_for(category: Category) -> impl Iterator<Item = &'static ActivityTypeDescriptor> {
    ACTIVITY_TYPES.iter().filter(move |d| d.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_types_per_category() {
        assert_eq!(types_for(Category::Water).count(), 5);
        assert_eq!(types_for(Category::Energy).count(), 5);
    }

    #[test]
    fn describe_known_and_unknown() {
        let hvac = describe("hvac").unwrap();
        assert_eq!(hvac.label, "Heating/Cooling");
        assert_eq!(hvac.category, Category::Energy);
        assert_eq!(hvac.icon, Icon::Zap);
        assert!(describe("sauna").is_none());
    }

    #[test]
    fn values_are_unique() {
        for (i, a) in ACTIVITY_TYPES.iter().enumerate() {
            assert!(ACTIVITY_TYPES[i + 1..].iter().all(|b| b.value != a.value));
        }
    }
}
