//! Ability score differ over the six fixed ability ids.

use crate::diff::model::ChangeRow;
use crate::model::{Ability, CharacterSnapshot};

/// Compare raw stored ability scores.
///
/// The racial bonus shown by the character display is never applied here.
/// Only stats present on both sides are compared; an unset value reads as
/// `""`.
pub fn diff_abilities(baseline: &CharacterSnapshot, candidate: &CharacterSnapshot) -> Vec<ChangeRow> {
    Ability::ALL
        .iter()
        .filter_map(|ability| {
            let old = baseline.stat(ability.id())?;
            let new = candidate.stat(ability.id())?;
            (old.value != new.value).then(|| {
                ChangeRow::new(ability.name(), score_text(old.value), score_text(new.value))
            })
        })
        .collect()
}

fn score_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
