//! Change report output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Sections are keyed by [`SectionKind`], whose `Ord` is the report order.

use crate::model::ModifierCategory;
use serde::{Deserialize, Serialize};

/// One detected difference: `[label, old, new]`.
///
/// An empty `old` or `new` means the value is absent in that snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRow {
    pub label: String,
    pub old: String,
    pub new: String,
}

impl ChangeRow {
    pub fn new(label: impl Into<String>, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            old: old.into(),
            new: new.into(),
        }
    }

    /// Present only in the candidate.
    pub fn added(label: impl Into<String>, new: impl Into<String>) -> Self {
        Self::new(label, "", new)
    }

    /// Present only in the baseline.
    pub fn removed(label: impl Into<String>, old: impl Into<String>) -> Self {
        Self::new(label, old, "")
    }

    pub fn is_added(&self) -> bool {
        self.old.is_empty() && !self.new.is_empty()
    }

    pub fn is_removed(&self) -> bool {
        !self.old.is_empty() && self.new.is_empty()
    }
}

/// Report sections, declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    Core,
    Abilities,
    Background,
    Class,
    Condition,
    Feat,
    Item,
    Race,
    Traits,
    Inventory,
    Currency,
}

impl SectionKind {
    pub const ALL: [SectionKind; 11] = [
        SectionKind::Core,
        SectionKind::Abilities,
        SectionKind::Background,
        SectionKind::Class,
        SectionKind::Condition,
        SectionKind::Feat,
        SectionKind::Item,
        SectionKind::Race,
        SectionKind::Traits,
        SectionKind::Inventory,
        SectionKind::Currency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Core => "Core",
            SectionKind::Abilities => "Abilities",
            SectionKind::Background => "Background",
            SectionKind::Class => "Class",
            SectionKind::Condition => "Condition",
            SectionKind::Feat => "Feat",
            SectionKind::Item => "Item",
            SectionKind::Race => "Race",
            SectionKind::Traits => "Traits",
            SectionKind::Inventory => "Inventory",
            SectionKind::Currency => "Currency",
        }
    }

    /// Display title, e.g. `"Race Changes"`
    pub fn title(&self) -> String {
        format!("{} Changes", self.name())
    }
}

impl From<ModifierCategory> for SectionKind {
    fn from(category: ModifierCategory) -> Self {
        match category {
            ModifierCategory::Background => SectionKind::Background,
            ModifierCategory::Class => SectionKind::Class,
            ModifierCategory::Condition => SectionKind::Condition,
            ModifierCategory::Feat => SectionKind::Feat,
            ModifierCategory::Item => SectionKind::Item,
            ModifierCategory::Race => SectionKind::Race,
        }
    }
}

/// A titled, budget-capped group of change rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeSection {
    pub kind: SectionKind,
    pub title: String,
    /// Every detected change, including rows cut from `rendered_text`
    pub rows: Vec<ChangeRow>,
    /// Column-aligned text, never longer than the section budget
    pub rendered_text: String,
    /// Rows replaced by the truncation marker in `rendered_text`
    pub omitted_rows: usize,
}

impl ChangeSection {
    pub fn is_truncated(&self) -> bool {
        self.omitted_rows > 0
    }
}

/// The full change report; sections with no rows never appear.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeReport {
    pub sections: Vec<ChangeSection>,
}

impl ChangeReport {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ChangeSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Total change rows across all sections
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }
}
