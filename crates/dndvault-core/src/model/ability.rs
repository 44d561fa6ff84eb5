//! The six ability scores and the racial bonus table used for display.

use serde::{Deserialize, Serialize};

/// Ability score, numbered the way the character API numbers stat ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    Strength = 1,
    Dexterity = 2,
    Constitution = 3,
    Intelligence = 4,
    Wisdom = 5,
    Charisma = 6,
}

impl Ability {
    /// All abilities in stat-id order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn from_id(id: u32) -> Option<Ability> {
        Ability::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    /// Three-letter form used in the stats line ("Str", "Dex", ...).
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Racial ability bonus for `race` (matched against either the base race or
/// the full race name).
///
/// Display only. The change diff compares raw stored scores and never adds
/// this bonus.
pub fn racial_bonus(ability: Ability, race: &str) -> i64 {
    let table: &[(&str, i64)] = match ability {
        Ability::Strength => &[
            ("Mountain Dwarf", 2),
            ("Dragonborn", 2),
            ("Half-Orc", 2),
            ("Human", 1),
        ],
        Ability::Dexterity => &[
            ("Elf", 2),
            ("Halfling", 2),
            ("Forest Gnome", 1),
            ("Human", 1),
        ],
        Ability::Constitution => &[
            ("Dwarf", 2),
            ("Stout halfling", 1),
            ("Rock Gnome", 1),
            ("Half-Orc", 1),
            ("Human", 1),
        ],
        Ability::Intelligence => &[
            ("High Elf", 1),
            ("Gnome", 2),
            ("Tiefling", 1),
            ("Human", 1),
        ],
        Ability::Wisdom => &[("Hill Dwarf", 1), ("Wood Elf", 1), ("Human", 1)],
        Ability::Charisma => &[
            ("Half-Elf", 2),
            ("Drow", 1),
            ("Lightfoot Halfling", 1),
            ("Dragonborn", 1),
            ("Tiefling", 2),
            ("Human", 1),
        ],
    };
    table
        .iter()
        .find(|(name, _)| *name == race)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}
