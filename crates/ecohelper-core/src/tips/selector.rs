use super::{Tip, TipCategory};
use crate::activity::{Activity, Category};

/// Upper bound on tips shown at once.
pub const MAX_TIPS: usize = 6;
/// Activity type that promotes [`SHORTER_SHOWERS`].
pub const SHOWER_TYPE: &str = "shower";
pub const SHORTER_SHOWERS: &str = "Shorter Showers";

/// Which kinds of activity appear in a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogProfile {
    pub has_water: bool,
    pub has_energy: bool,
    pub has_shower: bool,
}

impl LogProfile {
    pub fn from_activities(activities: &[Activity]) -> Self {
        activities.iter().fold(Self::default(), |mut profile, a| {
            match a.category {
                Category::Water => profile.has_water = true,
                Category::Energy => profile.has_energy = true,
            }
            profile.has_shower |= a.activity_type == SHOWER_TYPE;
            profile
        })
    }

    /// The single category logged, if only one is.
    pub fn sole_category(&self) -> Option<Category> {
        match (self.has_water, self.has_energy) {
            (true, false) => Some(Category::Water),
            (false, true) => Some(Category::Energy),
            _ => None,
        }
    }
}

/// Pick up to [`MAX_TIPS`] tips for the current log.
///
/// A logged shower moves "Shorter Showers" to the front without disturbing
/// the relative order of the rest. When only one category has been logged,
/// tips for the other category are dropped. An empty log gets the first
/// tips of the catalog unchanged.
pub fn select_tips(activities: &[Activity], catalog: &[Tip]) -> Vec<Tip> {
    let profile = LogProfile::from_activities(activities);
    let mut tips = catalog.to_vec();

    if profile.has_shower {
        // sort_by_key is stable; false sorts before true
        tips.sort_by_key(|tip| tip.title != SHORTER_SHOWERS);
    }

    if let Some(category) = profile.sole_category() {
        tips.retain(|tip| tip.category.fits(category));
    }

    tips.truncate(MAX_TIPS);
    tips
}
