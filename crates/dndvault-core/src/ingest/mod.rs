//! Ingestion boundary: upstream character payload → canonical snapshot.
//!
//! This is the only place upstream shape quirks are handled. Nested modifier
//! lists are flattened, `null` collections become empty, and `definition`
//! wrappers are unwrapped, so the diff engine only ever sees flat, non-null
//! collections. Entries that arrive without an id cannot be matched across
//! snapshots; they are skipped with a warning instead of failing the payload.

pub mod upstream;

use crate::errors::{ExError, ExErrorKind};
use crate::model::{
    AbilityScore, ApprovalState, CharacterSnapshot, ClassEntry, Currencies, InventoryItem,
    Modifier, ModifierValue, Modifiers, Race, RacialTrait,
};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::time::Instant;
use upstream::{flatten, Nested, UpstreamCharacter, UpstreamModifier};

/// Parse raw character bytes into a canonical [`CharacterSnapshot`].
///
/// # Errors
///
/// - `InvalidSnapshot` - bytes are not valid UTF-8, not valid JSON, the root
///   is not an object, or a field has the wrong type
/// - `MissingField` - `name` is absent
pub fn parse_character_bytes(bytes: &[u8]) -> Result<CharacterSnapshot, ExError> {
    let start = Instant::now();
    log_op_start!("parse_character_bytes", bytes = bytes.len());

    match decode(bytes) {
        Ok(snapshot) => {
            log_op_end!(
                "parse_character_bytes",
                duration_ms = start.elapsed().as_millis() as u64,
                character_id = snapshot.id.as_ref().map(|id| id.as_str()).unwrap_or("")
            );
            Ok(snapshot)
        }
        Err(err) => {
            log_op_error!(
                "parse_character_bytes",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn decode(bytes: &[u8]) -> Result<CharacterSnapshot, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_character_bytes")
            .with_message(format!("character is not valid UTF-8: {}", e))
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_character_bytes")
            .with_message(format!("character is not valid JSON: {}", e))
    })?;

    let obj = raw.as_object().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_character_bytes")
            .with_message("character JSON root must be an object")
    })?;

    if !obj.get("name").is_some_and(Value::is_string) {
        return Err(ExError::new(ExErrorKind::MissingField)
            .with_op("parse_character_bytes")
            .with_message("required field `name` is absent"));
    }

    let character_id = obj.get("id").map(|id| match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });

    let upstream: UpstreamCharacter = serde_json::from_value(raw).map_err(|e| {
        let err = ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_character_bytes")
            .with_message(format!("failed to deserialize character: {}", e));
        match &character_id {
            Some(id) => err.with_character_id(id.clone()),
            None => err,
        }
    })?;

    Ok(CharacterSnapshot::from(upstream))
}

fn warn_missing_id(collection: &str, name: &str) {
    tracing::warn!(
        component = module_path!(),
        op = "parse_character_bytes",
        collection = collection,
        entry = name,
        "entry without id skipped"
    );
}

fn modifier_value(value: Value) -> Option<ModifierValue> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(ModifierValue::Number(n)),
        Value::String(s) => Some(ModifierValue::Text(s)),
        other => Some(ModifierValue::Text(other.to_string())),
    }
}

fn modifiers(entries: Vec<Nested<UpstreamModifier>>) -> Vec<Modifier> {
    flatten(entries)
        .into_iter()
        .filter_map(|m| {
            let Some(id) = m.id else {
                warn_missing_id("modifiers", &m.friendly_subtype_name);
                return None;
            };
            Some(Modifier {
                id,
                subtype_name: m.friendly_subtype_name,
                type_name: m.friendly_type_name,
                value: m.value.and_then(modifier_value),
            })
        })
        .collect()
}

impl From<UpstreamCharacter> for CharacterSnapshot {
    fn from(up: UpstreamCharacter) -> Self {
        let approval = match (up.approval_status, up.is_update) {
            (None, None) => None,
            (approved, is_update) => Some(ApprovalState::from_flags(
                approved.unwrap_or(false),
                is_update.unwrap_or(false),
                up.approved_by,
            )),
        };

        CharacterSnapshot {
            id: up.id,
            name: up.name,
            race: Race {
                full_name: up.race.full_name,
                base_race_name: up.race.base_race_name,
                racial_traits: up
                    .race
                    .racial_traits
                    .into_iter()
                    .filter_map(|t| {
                        let d = t.definition;
                        let Some(id) = d.id else {
                            warn_missing_id("racialTraits", &d.name);
                            return None;
                        };
                        Some(RacialTrait {
                            id,
                            name: d.name,
                            snippet: d.snippet,
                            description: d.description,
                        })
                    })
                    .collect(),
            },
            classes: up
                .classes
                .into_iter()
                .map(|c| ClassEntry {
                    name: c.definition.name,
                    level: c.level,
                    subclass_name: c
                        .subclass_definition
                        .map(|s| s.name)
                        .filter(|s| !s.is_empty()),
                })
                .collect(),
            stats: up
                .stats
                .into_iter()
                .map(|s| AbilityScore {
                    id: s.id,
                    value: s.value,
                })
                .collect(),
            modifiers: Modifiers {
                race: modifiers(up.modifiers.race),
                class: modifiers(up.modifiers.class),
                background: modifiers(up.modifiers.background),
                feat: modifiers(up.modifiers.feat),
                condition: modifiers(up.modifiers.condition),
                item: modifiers(up.modifiers.item),
            },
            inventory: up
                .inventory
                .into_iter()
                .filter_map(|i| {
                    let Some(item_id) = i.definition.id else {
                        warn_missing_id("inventory", &i.definition.name);
                        return None;
                    };
                    Some(InventoryItem {
                        item_id,
                        name: i.definition.name,
                        quantity: i.quantity,
                    })
                })
                .collect(),
            currencies: Currencies {
                cp: up.currencies.cp,
                sp: up.currencies.sp,
                ep: up.currencies.ep,
                gp: up.currencies.gp,
                pp: up.currencies.pp,
            },
            approval,
        }
    }
}
