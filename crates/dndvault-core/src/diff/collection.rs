//! Identity-keyed collection differ.
//!
//! One generic differ serves modifiers, racial traits and inventory; the
//! per-collection behaviour lives in a [`CollectionStrategy`].

use crate::diff::model::ChangeRow;
use crate::model::{InventoryItem, Modifier, RacialTrait};
use std::collections::HashMap;
use std::hash::Hash;

/// How items of one collection are matched and rendered.
pub trait CollectionStrategy<T> {
    type Key: Eq + Hash;

    /// Identity of an item across snapshots
    fn key(&self, item: &T) -> Self::Key;

    /// Label column text
    fn label(&self, item: &T) -> String;

    /// Value column text for an item present on only one side
    fn describe(&self, item: &T) -> String;

    /// Value compared for items present on both sides.
    ///
    /// `None` (the default) makes the collection presence-only.
    fn tracked(&self, _item: &T) -> Option<String> {
        None
    }
}

/// Modifiers, keyed by modifier id.
pub struct ModifierStrategy;

impl CollectionStrategy<Modifier> for ModifierStrategy {
    type Key = String;

    fn key(&self, item: &Modifier) -> String {
        item.id.as_str().to_string()
    }

    fn label(&self, item: &Modifier) -> String {
        item.subtype_name.clone()
    }

    fn describe(&self, item: &Modifier) -> String {
        item.describe()
    }
}

/// Racial traits, keyed by trait definition id.
pub struct TraitStrategy;

impl CollectionStrategy<RacialTrait> for TraitStrategy {
    type Key = String;

    fn key(&self, item: &RacialTrait) -> String {
        item.id.as_str().to_string()
    }

    fn label(&self, item: &RacialTrait) -> String {
        item.summary().to_string()
    }

    fn describe(&self, item: &RacialTrait) -> String {
        item.name.clone()
    }
}

/// Inventory, keyed by item id; quantity is tracked.
pub struct InventoryStrategy;

impl CollectionStrategy<InventoryItem> for InventoryStrategy {
    type Key = String;

    fn key(&self, item: &InventoryItem) -> String {
        item.item_id.as_str().to_string()
    }

    fn label(&self, item: &InventoryItem) -> String {
        item.name.clone()
    }

    fn describe(&self, item: &InventoryItem) -> String {
        item.quantity.to_string()
    }

    fn tracked(&self, item: &InventoryItem) -> Option<String> {
        Some(item.quantity.to_string())
    }
}

/// Diff two flat collections by identity.
///
/// Candidate-side rows come first in candidate order: additions, plus a
/// single `[label, old, new]` row for each shared item whose tracked value
/// changed. Removals follow in baseline order. Duplicate keys on one side
/// are matched against the first occurrence on the other side.
pub fn diff_collection<T, S>(baseline: &[T], candidate: &[T], strategy: &S) -> Vec<ChangeRow>
where
    S: CollectionStrategy<T>,
{
    let baseline_index: HashMap<S::Key, &T> = index(baseline, strategy);
    let candidate_index: HashMap<S::Key, &T> = index(candidate, strategy);

    let mut rows = Vec::new();

    for item in candidate {
        match baseline_index.get(&strategy.key(item)) {
            None => rows.push(ChangeRow::added(
                strategy.label(item),
                strategy.describe(item),
            )),
            Some(old) => {
                let (before, after) = (strategy.tracked(old), strategy.tracked(item));
                if before != after {
                    rows.push(ChangeRow::new(
                        strategy.label(item),
                        before.unwrap_or_default(),
                        after.unwrap_or_default(),
                    ));
                }
            }
        }
    }

    for item in baseline {
        if !candidate_index.contains_key(&strategy.key(item)) {
            rows.push(ChangeRow::removed(
                strategy.label(item),
                strategy.describe(item),
            ));
        }
    }

    rows
}

fn index<'a, T, S>(items: &'a [T], strategy: &S) -> HashMap<S::Key, &'a T>
where
    S: CollectionStrategy<T>,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.entry(strategy.key(item)).or_insert(item);
    }
    map
}
