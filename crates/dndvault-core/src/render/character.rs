//! One-line character descriptions.
//!
//! These are the only place the racial bonus table is applied; the change
//! diff always compares raw stored scores.

use crate::model::{racial_bonus, Ability, CharacterSnapshot, ClassEntry};

/// `"<name> / <race> / <classes>"`, classes with level and subclass.
pub fn character_line(snapshot: &CharacterSnapshot) -> String {
    let classes: Vec<String> = snapshot.classes.iter().map(ClassEntry::label).collect();
    format!(
        "{} / {} / {}",
        snapshot.name,
        snapshot.race.full_name,
        classes.join(" ")
    )
}

/// `"<name> the <classes>"`, classes with level only.
pub fn character_short(snapshot: &CharacterSnapshot) -> String {
    let classes: Vec<String> = snapshot
        .classes
        .iter()
        .map(ClassEntry::short_label)
        .collect();
    format!("{} the {}", snapshot.name, classes.join(" "))
}

/// `"Str: 17(3) | Dex: 14(2) | ..."` in stored order, racial bonus included.
///
/// Stats with an unknown id or no value are skipped; `"N/A"` when nothing
/// is left to show.
pub fn stats_line(snapshot: &CharacterSnapshot) -> String {
    let parts: Vec<String> = snapshot
        .stats
        .iter()
        .filter_map(|stat| {
            let ability = Ability::from_id(stat.id)?;
            let raw = stat.value?;
            let score = raw
                + racial_bonus(ability, &snapshot.race.base_race_name)
                + racial_bonus(ability, &snapshot.race.full_name);
            let modifier = (score - 10).div_euclid(2);
            Some(format!("{}: {}({})", ability.short_name(), score, modifier))
        })
        .collect();

    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join(" | ")
    }
}
