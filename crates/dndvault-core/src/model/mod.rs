//! Canonical character snapshot model.
//!
//! A [`CharacterSnapshot`] is one immutable version of a character sheet. All
//! collections are flat and never null; upstream shape quirks are resolved
//! once by [`crate::ingest`] before a snapshot exists.

pub mod ability;
pub mod approval;
pub mod character;
pub mod id;

pub use ability::{racial_bonus, Ability};
pub use approval::ApprovalState;
pub use character::{
    AbilityScore, CharacterSnapshot, ClassEntry, Currencies, Currency, InventoryItem, Modifier,
    ModifierCategory, ModifierValue, Modifiers, Race, RacialTrait,
};
pub use id::EntityId;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default (used for collections that the
/// upstream API sends as `null` instead of `[]`).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
