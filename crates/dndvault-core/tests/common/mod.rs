//! Shared fixtures for dndvault-core integration tests.

use dndvault_core::model::{
    AbilityScore, CharacterSnapshot, ClassEntry, Currencies, EntityId, InventoryItem, Modifier,
    ModifierValue, RacialTrait,
};
use serde_json::{json, Value};

/// Upstream-shaped payload for an approved character.
#[allow(dead_code)]
pub fn upstream_aria() -> Value {
    json!({
        "id": 4242,
        "name": "Aria",
        "race": {
            "fullName": "Wood Elf",
            "baseRaceName": "Elf",
            "racialTraits": [
                {"definition": {"id": 101, "name": "Darkvision", "snippet": "See in dim light within 60 ft."}},
                {"definition": {"id": 102, "name": "Fey Ancestry", "description": "Advantage on saves against being charmed."}}
            ]
        },
        "classes": [
            {"definition": {"name": "Ranger"}, "level": 3, "subclassDefinition": {"name": "Hunter"}}
        ],
        "stats": [
            {"id": 1, "value": 12},
            {"id": 2, "value": 15},
            {"id": 3, "value": 13},
            {"id": 4, "value": 10},
            {"id": 5, "value": 14},
            {"id": 6, "value": 8}
        ],
        "modifiers": {
            "race": [
                [{"id": 1, "friendlySubtypeName": "Dexterity Score", "friendlyTypeName": "Bonus", "value": 2}],
                {"id": 7, "friendlySubtypeName": "Elvish", "friendlyTypeName": "Language"}
            ],
            "class": [],
            "background": null,
            "feat": [],
            "condition": [],
            "item": []
        },
        "inventory": [
            {"definition": {"id": 9, "name": "Rope"}, "quantity": 1},
            {"definition": {"id": 10, "name": "Longbow"}, "quantity": 1}
        ],
        "currencies": {"cp": 0, "sp": 12, "gp": 40, "pp": null},
        "approvalStatus": true,
        "isUpdate": false,
        "approvedBy": "555"
    })
}

/// Canonical snapshot built directly, no ingestion.
#[allow(dead_code)]
pub fn aria() -> CharacterSnapshot {
    let mut snap = CharacterSnapshot::new("Aria");
    snap.id = Some(EntityId::from(4242_i64));
    snap.race.full_name = "Wood Elf".to_string();
    snap.race.base_race_name = "Elf".to_string();
    snap.race.racial_traits = vec![racial_trait(101, "Darkvision")];
    snap.classes = vec![ClassEntry::new("Ranger", 3)];
    snap.stats = (1..=6)
        .map(|id| AbilityScore {
            id,
            value: Some(10 + id as i64),
        })
        .collect();
    snap.modifiers.race = vec![modifier(1, "Dexterity Score", "Bonus", Some(2))];
    snap.inventory = vec![item(9, "Rope", 1)];
    snap.currencies = Currencies {
        gp: Some(40),
        ..Currencies::default()
    };
    snap
}

#[allow(dead_code)]
pub fn modifier(id: i64, subtype: &str, type_name: &str, value: Option<i64>) -> Modifier {
    Modifier {
        id: EntityId::from(id),
        subtype_name: subtype.to_string(),
        type_name: type_name.to_string(),
        value: value.map(ModifierValue::from),
    }
}

#[allow(dead_code)]
pub fn item(id: i64, name: &str, quantity: i64) -> InventoryItem {
    InventoryItem {
        item_id: EntityId::from(id),
        name: name.to_string(),
        quantity,
    }
}

#[allow(dead_code)]
pub fn racial_trait(id: i64, name: &str) -> RacialTrait {
    RacialTrait {
        id: EntityId::from(id),
        name: name.to_string(),
        snippet: None,
        description: None,
    }
}
