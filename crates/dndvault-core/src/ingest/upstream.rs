//! Serde mirror of the character payload as the character API delivers it.
//!
//! Every field is lenient: absent or `null` collections become empty,
//! modifier categories may nest lists inside lists, and entry ids may be
//! missing (such entries are dropped during conversion).

use crate::model::{null_as_default, EntityId};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamCharacter {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub race: UpstreamRace,
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<UpstreamClass>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<UpstreamStat>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modifiers: UpstreamModifiers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Vec<UpstreamInventoryItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: UpstreamCurrencies,
    #[serde(default)]
    pub approval_status: Option<bool>,
    #[serde(default)]
    pub is_update: Option<bool>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRace {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_race_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub racial_traits: Vec<UpstreamTrait>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamTrait {
    pub definition: UpstreamDefinition,
}

/// `definition` block shared by traits and inventory items
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamDefinition {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamClass {
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition: NamedDefinition,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub subclass_definition: Option<NamedDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamStat {
    pub id: u32,
    #[serde(default)]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamModifier {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, alias = "subtypeName", deserialize_with = "null_as_default")]
    pub friendly_subtype_name: String,
    #[serde(default, alias = "typeName", deserialize_with = "null_as_default")]
    pub friendly_type_name: String,
    /// Any JSON; interpreted during conversion
    #[serde(default)]
    pub value: Option<Value>,
}

/// A list entry that is either an item or a further list of entries
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Many(Vec<Nested<T>>),
    One(T),
}

impl<T> Nested<T> {
    fn flatten_into(self, out: &mut Vec<T>) {
        match self {
            Nested::One(item) => out.push(item),
            Nested::Many(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

/// Flatten a possibly nested list into a single flat list, preserving order
pub fn flatten<T>(entries: Vec<Nested<T>>) -> Vec<T> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        entry.flatten_into(&mut out);
    }
    out
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamModifiers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub race: Vec<Nested<UpstreamModifier>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: Vec<Nested<UpstreamModifier>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub background: Vec<Nested<UpstreamModifier>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feat: Vec<Nested<UpstreamModifier>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: Vec<Nested<UpstreamModifier>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: Vec<Nested<UpstreamModifier>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamInventoryItem {
    pub definition: UpstreamDefinition,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamCurrencies {
    #[serde(default)]
    pub cp: Option<i64>,
    #[serde(default)]
    pub sp: Option<i64>,
    #[serde(default)]
    pub ep: Option<i64>,
    #[serde(default)]
    pub gp: Option<i64>,
    #[serde(default)]
    pub pp: Option<i64>,
}
