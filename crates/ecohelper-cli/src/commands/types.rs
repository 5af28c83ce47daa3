//! Activity type catalog listing.

use ecohelper_core::activity::types_for;
use ecohelper_core::{Category, ACTIVITY_TYPES};

use crate::render;

pub fn run(category: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let category: Option<Category> = category.map(str::parse::<Category>).transpose()?;
    let descriptors: Vec<_> = match category {
        Some(category) => types_for(category).collect(),
        None => ACTIVITY_TYPES.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        print!("{}", render::types(descriptors));
    }
    Ok(())
}
