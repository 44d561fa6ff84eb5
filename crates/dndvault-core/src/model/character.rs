//! Character snapshot types.
//!
//! Field names serialize in camelCase to match the stored record layout.

use super::{null_as_default, ApprovalState, EntityId};
use serde::{Deserialize, Serialize};

/// One immutable version of a character (approved or pending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    /// External character id; informational, never compared by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub race: Race,
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<ClassEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<AbilityScore>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modifiers: Modifiers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Vec<InventoryItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: Currencies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalState>,
}

impl CharacterSnapshot {
    /// An otherwise empty snapshot with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            race: Race::default(),
            classes: Vec::new(),
            stats: Vec::new(),
            modifiers: Modifiers::default(),
            inventory: Vec::new(),
            currencies: Currencies::default(),
            approval: None,
        }
    }

    /// Stored stat for `ability_id`; the first entry wins on duplicates
    pub fn stat(&self, ability_id: u32) -> Option<&AbilityScore> {
        self.stats.iter().find(|s| s.id == ability_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_race_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub racial_traits: Vec<RacialTrait>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacialTrait {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RacialTrait {
    /// Short text shown in the label column: snippet, else description, else name
    pub fn summary(&self) -> &str {
        self.snippet
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.description.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub name: String,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass_name: Option<String>,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            subclass_name: None,
        }
    }

    pub fn with_subclass(mut self, subclass: impl Into<String>) -> Self {
        self.subclass_name = Some(subclass.into());
        self
    }

    /// `Name(level)`, suffixed with `(Subclass)` when one is chosen
    pub fn label(&self) -> String {
        match &self.subclass_name {
            Some(sub) => format!("{}({})({})", self.name, self.level, sub),
            None => self.short_label(),
        }
    }

    /// `Name(level)` without subclass
    pub fn short_label(&self) -> String {
        format!("{}({})", self.name, self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityScore {
    pub id: u32,
    #[serde(default)]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub id: EntityId,
    #[serde(default, alias = "friendlySubtypeName")]
    pub subtype_name: String,
    #[serde(default, alias = "friendlyTypeName")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ModifierValue>,
}

impl Modifier {
    /// `typeName`, with `(value)` appended when the modifier carries a non-zero value
    pub fn describe(&self) -> String {
        match &self.value {
            Some(v) if !v.is_blank() => format!("{}({})", self.type_name, v),
            _ => self.type_name.clone(),
        }
    }
}

/// Modifier magnitude. Usually an integer, but the character API also sends
/// fractions and free text, so any number or string is kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    Number(serde_json::Number),
    Text(String),
}

impl ModifierValue {
    /// Zero and empty text render like no value at all
    pub fn is_blank(&self) -> bool {
        match self {
            ModifierValue::Number(n) => n.as_f64() == Some(0.0),
            ModifierValue::Text(t) => t.is_empty(),
        }
    }
}

impl std::fmt::Display for ModifierValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModifierValue::Number(n) => write!(f, "{}", n),
            ModifierValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for ModifierValue {
    fn from(n: i64) -> Self {
        ModifierValue::Number(n.into())
    }
}

/// Modifier source categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierCategory {
    Background,
    Class,
    Condition,
    Feat,
    Item,
    Race,
}

impl ModifierCategory {
    pub const ALL: [ModifierCategory; 6] = [
        ModifierCategory::Background,
        ModifierCategory::Class,
        ModifierCategory::Condition,
        ModifierCategory::Feat,
        ModifierCategory::Item,
        ModifierCategory::Race,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub race: Vec<Modifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: Vec<Modifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub background: Vec<Modifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feat: Vec<Modifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: Vec<Modifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: Vec<Modifier>,
}

impl Modifiers {
    pub fn of(&self, category: ModifierCategory) -> &[Modifier] {
        match category {
            ModifierCategory::Background => &self.background,
            ModifierCategory::Class => &self.class,
            ModifierCategory::Condition => &self.condition,
            ModifierCategory::Feat => &self.feat,
            ModifierCategory::Item => &self.item,
            ModifierCategory::Race => &self.race,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub item_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Coin purse; unset amounts read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currencies {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Copper,
    Electrum,
    Gold,
    Platinum,
    Silver,
}

impl Currency {
    /// Report order
    pub const ALL: [Currency; 5] = [
        Currency::Copper,
        Currency::Electrum,
        Currency::Gold,
        Currency::Platinum,
        Currency::Silver,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Copper => "CP",
            Currency::Electrum => "EP",
            Currency::Gold => "GP",
            Currency::Platinum => "PP",
            Currency::Silver => "SP",
        }
    }
}

impl Currencies {
    pub fn amount(&self, currency: Currency) -> Option<i64> {
        match currency {
            Currency::Copper => self.cp,
            Currency::Electrum => self.ep,
            Currency::Gold => self.gp,
            Currency::Platinum => self.pp,
            Currency::Silver => self.sp,
        }
    }
}
