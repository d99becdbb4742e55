//! Rod catalog.

use std::collections::HashSet;

use crate::error::CatalogError;

/// Id of the rod every angler starts with.
pub const STARTER_ROD_ID: &str = "basic";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rod {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level_req: u32,
    pub cost: u64,
    /// Scales the bite deadline. Lower bites sooner.
    pub bite_speed_mult: f64,
    pub shiny_mult: f64,
    /// Added on top of 1.0 to bias draws toward rarer tiers.
    pub rarity_boost: f64,
}

impl Rod {
    pub fn rarity_mult(&self) -> f64 {
        1.0 + self.rarity_boost
    }
}

pub const ROD_CATALOG: &[Rod] = &[
    Rod {
        id: "basic",
        name: "Basic Rod",
        description: "A plain rod. Everyone starts somewhere.",
        level_req: 1,
        cost: 0,
        bite_speed_mult: 1.0,
        shiny_mult: 1.0,
        rarity_boost: 0.0,
    },
    Rod {
        id: "training",
        name: "Training Rod",
        description: "A little lighter. Fish bite sooner.",
        level_req: 3,
        cost: 500,
        bite_speed_mult: 0.85,
        shiny_mult: 1.0,
        rarity_boost: 0.0,
    },
    Rod {
        id: "steel",
        name: "Steel Rod",
        description: "Sturdy enough to hold something rare.",
        level_req: 5,
        cost: 1500,
        bite_speed_mult: 0.75,
        shiny_mult: 1.0,
        rarity_boost: 0.05,
    },
    Rod {
        id: "lucky",
        name: "Lucky Rod",
        description: "Shinies seem to like it.",
        level_req: 8,
        cost: 3000,
        bite_speed_mult: 0.75,
        shiny_mult: 1.5,
        rarity_boost: 0.05,
    },
    Rod {
        id: "master",
        name: "Master Rod",
        description: "Balanced in every way that matters.",
        level_req: 12,
        cost: 7500,
        bite_speed_mult: 0.6,
        shiny_mult: 1.75,
        rarity_boost: 0.10,
    },
    Rod {
        id: "legendary",
        name: "Legendary Rod",
        description: "Stories follow whoever carries it.",
        level_req: 20,
        cost: 20000,
        bite_speed_mult: 0.5,
        shiny_mult: 2.0,
        rarity_boost: 0.15,
    },
    Rod {
        id: "mythic",
        name: "Mythic Rod",
        description: "Nothing in the water is out of reach.",
        level_req: 30,
        cost: 50000,
        bite_speed_mult: 0.35,
        shiny_mult: 3.0,
        rarity_boost: 0.25,
    },
];

pub fn rod_by_id(id: &str) -> Option<&'static Rod> {
    ROD_CATALOG.iter().find(|r| r.id == id)
}

/// The starter rod. The catalog is validated at session start, so this is
/// only absent if validation was skipped.
pub fn starter_rod() -> &'static Rod {
    rod_by_id(STARTER_ROD_ID).unwrap_or(&ROD_CATALOG[0])
}

/// Checks rod ids are unique and a free level-1 starter exists.
pub fn validate_rods(rods: &[Rod]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for rod in rods {
        if !seen.insert(rod.id) {
            return Err(CatalogError::DuplicateRod(rod.id.to_string()));
        }
    }
    let starter_ok = rods
        .iter()
        .any(|r| r.id == STARTER_ROD_ID && r.cost == 0 && r.level_req <= 1);
    if !starter_ok {
        return Err(CatalogError::MissingStarterRod);
    }
    Ok(())
}
