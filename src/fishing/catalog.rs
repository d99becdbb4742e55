//! Static species catalog and rarity sampling weights.

use std::collections::HashSet;

use super::types::{Rarity, Species};
use crate::error::CatalogError;

/// Tolerance for the rarity weights summing to one.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Unconditioned probability of drawing each tier, indexed by `Rarity::index()`.
/// Common 50%, Uncommon 25%, Rare 14%, Epic 7%, Legendary 3%, Mythic 1%
pub const RARITY_WEIGHTS: [f64; 6] = [0.50, 0.25, 0.14, 0.07, 0.03, 0.01];

macro_rules! species {
    ($id:literal, $name:literal, $rarity:ident, $value:literal, $color:expr, $shiny:expr, $void:literal, $flavor:literal) => {
        Species {
            id: $id,
            name: $name,
            rarity: Rarity::$rarity,
            base_value: $value,
            color: $color,
            shiny_color: $shiny,
            void_touched: $void,
            flavor: $flavor,
        }
    };
}

/// Every species that can be caught, grouped by tier.
pub static SPECIES: &[Species] = &[
    // Common
    species!("minnow", "Minnow", Common, 10, (150, 160, 170), (255, 215, 0), false,
        "Small, quick, and everywhere."),
    species!("anchovy", "Anchovy", Common, 10, (120, 140, 160), (255, 180, 60), false,
        "Travels in schools of thousands."),
    species!("sardine", "Sardine", Common, 12, (170, 180, 200), (255, 120, 200), false,
        "Packed tight in the shallows."),
    species!("perch", "Perch", Common, 15, (190, 170, 60), (120, 255, 200), false,
        "Striped and stubborn."),
    species!("bluegill", "Bluegill", Common, 15, (70, 110, 180), (255, 100, 100), false,
        "A dock regular."),
    species!("carp", "Carp", Common, 18, (160, 120, 60), (240, 240, 255), false,
        "Patient bottom feeder."),
    species!("smelt", "Smelt", Common, 12, (180, 200, 210), (255, 240, 140), false,
        "Smells faintly of cucumber."),
    species!("goby", "Goby", Common, 14, (140, 120, 90), (160, 255, 160), false,
        "Perches on rocks like a lookout."),
    species!("sunfish", "Pumpkinseed", Common, 16, (220, 150, 60), (120, 200, 255), false,
        "Orange belly, bright as a lantern."),
    // Uncommon
    species!("tilapia", "Tilapia", Uncommon, 30, (150, 150, 130), (255, 160, 220), false,
        "Hardy and adaptable."),
    species!("trout", "Rainbow Trout", Uncommon, 35, (200, 140, 160), (140, 255, 255), false,
        "Shimmers in every color."),
    species!("mackerel", "Mackerel", Uncommon, 38, (60, 130, 140), (255, 230, 90), false,
        "Fast swimmer with tiger stripes."),
    species!("bass", "Largemouth Bass", Uncommon, 40, (80, 120, 60), (255, 90, 60), false,
        "Hits the lure hard."),
    species!("catfish", "Catfish", Uncommon, 45, (110, 100, 90), (200, 120, 255), false,
        "Whiskers that taste the mud."),
    species!("snapper", "Red Snapper", Uncommon, 50, (220, 80, 70), (90, 200, 255), false,
        "Prized by every harbor cook."),
    species!("walleye", "Walleye", Uncommon, 42, (170, 160, 90), (255, 140, 255), false,
        "Glassy eyes built for dusk."),
    species!("sea_bream", "Sea Bream", Uncommon, 48, (200, 170, 170), (110, 255, 200), false,
        "Silver-pink and sure of itself."),
    // Rare
    species!("flounder", "Flounder", Rare, 85, (170, 150, 110), (130, 255, 130), false,
        "Both eyes on one side."),
    species!("salmon", "King Salmon", Rare, 90, (230, 120, 100), (200, 200, 255), false,
        "Swims upstream against everything."),
    species!("pike", "Northern Pike", Rare, 100, (90, 130, 80), (255, 200, 40), false,
        "All teeth and ambush."),
    species!("pufferfish", "Pufferfish", Rare, 110, (220, 200, 120), (255, 120, 255), false,
        "Handle with care."),
    species!("electric_eel", "Electric Eel", Rare, 120, (60, 80, 60), (120, 220, 255), false,
        "The line hums when it bites."),
    species!("sturgeon", "Sturgeon", Rare, 115, (110, 110, 100), (255, 220, 120), false,
        "Armored plates and ancient patience."),
    species!("octopus", "Octopus", Rare, 125, (190, 90, 110), (120, 255, 255), false,
        "Steals the bait and waves goodbye."),
    species!("lanternfish", "Lanternfish", Rare, 130, (40, 60, 90), (200, 255, 120), true,
        "Blinks in a pattern nobody has decoded."),
    // Epic
    species!("lionfish", "Lionfish", Epic, 220, (200, 90, 60), (255, 255, 160), false,
        "Beautiful and venomous."),
    species!("tuna", "Bluefin Tuna", Epic, 240, (40, 70, 130), (255, 170, 0), false,
        "A torpedo of muscle."),
    species!("marlin", "Blue Marlin", Epic, 250, (30, 90, 170), (255, 215, 0), false,
        "The fight of a lifetime."),
    species!("swordfish", "Swordfish", Epic, 280, (100, 110, 140), (255, 60, 160), false,
        "Parries the waves."),
    species!("anglerfish", "Anglerfish", Epic, 300, (50, 40, 60), (120, 255, 120), true,
        "Its lantern glows from somewhere deeper."),
    species!("mahi_mahi", "Mahi-Mahi", Epic, 260, (60, 170, 90), (255, 200, 80), false,
        "Green and gold, gone in a flash."),
    species!("manta_ray", "Manta Ray", Epic, 290, (40, 50, 70), (230, 230, 255), false,
        "Glides under the boat like a shadow."),
    // Legendary
    species!("golden_koi", "Golden Koi", Legendary, 600, (255, 200, 40), (255, 255, 255), false,
        "Said to grant a single wish."),
    species!("coelacanth", "Coelacanth", Legendary, 700, (70, 90, 130), (200, 160, 255), false,
        "A living fossil."),
    species!("ghost_shark", "Ghost Shark", Legendary, 750, (200, 210, 230), (90, 255, 220), true,
        "Seen only in the corner of the eye."),
    species!("void_fish", "Void Fish", Legendary, 800, (20, 10, 40), (180, 80, 255), true,
        "Exists between the ripples."),
    species!("oarfish", "Giant Oarfish", Legendary, 650, (200, 200, 220), (255, 80, 80), false,
        "Sailors called it a sea serpent."),
    species!("crystal_sturgeon", "Crystal Sturgeon", Legendary, 720, (210, 240, 255), (255, 180, 255), false,
        "You can see the lake through it."),
    // Mythic
    species!("prism_fish", "Prism Fish", Mythic, 2000, (240, 240, 255), (255, 120, 255), false,
        "Splits the sunlight into song."),
    species!("moon_whale", "Moon Whale Calf", Mythic, 2200, (180, 190, 230), (255, 250, 200), true,
        "Surfaces only when the tide remembers it."),
    species!("leviathan_fry", "Leviathan Fry", Mythic, 2500, (30, 100, 90), (255, 70, 70), false,
        "Small today. Not for long."),
    species!("star_eater", "Star Eater", Mythic, 2800, (10, 10, 30), (255, 255, 120), true,
        "Rises on clear nights to swallow reflections."),
];

/// Looks up a species by id.
pub fn species_by_id(id: &str) -> Option<&'static Species> {
    SPECIES.iter().find(|s| s.id == id)
}

/// Returns every species in the given tier, in catalog order.
pub fn species_in_tier(rarity: Rarity) -> Vec<&'static Species> {
    SPECIES.iter().filter(|s| s.rarity == rarity).collect()
}

/// Number of species in the catalog.
pub fn species_count() -> usize {
    SPECIES.len()
}

/// Checks that tier weights are non-negative and sum to one.
pub fn validate_weights(weights: &[f64; 6]) -> Result<(), CatalogError> {
    for rarity in Rarity::ALL {
        let weight = weights[rarity.index()];
        if weight < 0.0 || !weight.is_finite() {
            return Err(CatalogError::NegativeWeight { rarity, weight });
        }
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        return Err(CatalogError::WeightsDoNotSumToOne { sum });
    }
    Ok(())
}

/// Checks species ids are unique, values positive, and every tier populated.
pub fn validate_species(species: &[Species]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for s in species {
        if !seen.insert(s.id) {
            return Err(CatalogError::DuplicateSpecies(s.id.to_string()));
        }
        if s.base_value == 0 {
            return Err(CatalogError::ZeroBaseValue(s.id.to_string()));
        }
    }
    for rarity in Rarity::ALL {
        if !species.iter().any(|s| s.rarity == rarity) {
            return Err(CatalogError::EmptyTier(rarity));
        }
    }
    Ok(())
}
