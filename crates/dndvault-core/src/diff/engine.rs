//! Change report orchestration.
//!
//! The core entry point is [`compute_changes`], which compares an approved
//! baseline with a pending candidate and produces a [`ChangeReport`].

use crate::diff::abilities::diff_abilities;
use crate::diff::collection::{diff_collection, InventoryStrategy, ModifierStrategy, TraitStrategy};
use crate::diff::formatter::ReportFormatter;
use crate::diff::model::{ChangeReport, ChangeRow, SectionKind};
use crate::diff::positional::diff_positional;
use crate::diff::scalar::{diff_currencies, diff_scalar};
use crate::model::{CharacterSnapshot, ModifierCategory};
use crate::settings::ReportSettings;
use crate::{log_op_end, log_op_start};
use dndvault_core_types::RequestContext;
use std::collections::BTreeMap;
use std::time::Instant;

pub const NAME_LABEL: &str = "Character Name";
pub const RACE_LABEL: &str = "Race";

/// Runs every differ in report order and hands the rows to the formatter.
///
/// Holds no per-call state; one engine can serve any number of diffs.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    formatter: ReportFormatter,
}

impl DiffEngine {
    pub fn new(settings: ReportSettings) -> Self {
        Self {
            formatter: ReportFormatter::new(settings),
        }
    }

    pub fn settings(&self) -> &ReportSettings {
        self.formatter.settings()
    }

    /// Compare `baseline` (approved) with `candidate` (pending).
    ///
    /// Both snapshots are assumed to be the same character; that is not
    /// checked. `diff(A, A)` is always an empty report.
    pub fn compute(&self, baseline: &CharacterSnapshot, candidate: &CharacterSnapshot) -> ChangeReport {
        self.compute_in(&RequestContext::new(), baseline, candidate)
    }

    /// Same as [`DiffEngine::compute`], correlating log events with `ctx`.
    pub fn compute_in(
        &self,
        ctx: &RequestContext,
        baseline: &CharacterSnapshot,
        candidate: &CharacterSnapshot,
    ) -> ChangeReport {
        let start = Instant::now();
        let character_id = baseline
            .id
            .as_ref()
            .or(candidate.id.as_ref())
            .map(|id| id.as_str())
            .unwrap_or("");
        log_op_start!(
            "compute_changes",
            request_id = ctx.request_id.as_str(),
            guild_id = ctx.guild_id.as_deref().unwrap_or(""),
            character_id = character_id
        );

        let report = self.formatter.format(sectioned_rows(baseline, candidate));

        log_op_end!(
            "compute_changes",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str(),
            sections = report.sections.len(),
            rows = report.row_count()
        );
        report
    }
}

/// Change rows for every section, including empty ones.
pub fn sectioned_rows(
    baseline: &CharacterSnapshot,
    candidate: &CharacterSnapshot,
) -> BTreeMap<SectionKind, Vec<ChangeRow>> {
    let mut sections = BTreeMap::new();

    let mut core: Vec<ChangeRow> = Vec::new();
    core.extend(diff_scalar(NAME_LABEL, &baseline.name, &candidate.name));
    core.extend(diff_scalar(
        RACE_LABEL,
        &baseline.race.full_name,
        &candidate.race.full_name,
    ));
    core.extend(diff_positional(&baseline.classes, &candidate.classes));
    sections.insert(SectionKind::Core, core);

    sections.insert(SectionKind::Abilities, diff_abilities(baseline, candidate));

    for category in ModifierCategory::ALL {
        sections.insert(
            SectionKind::from(category),
            diff_collection(
                baseline.modifiers.of(category),
                candidate.modifiers.of(category),
                &ModifierStrategy,
            ),
        );
    }

    sections.insert(
        SectionKind::Traits,
        diff_collection(
            &baseline.race.racial_traits,
            &candidate.race.racial_traits,
            &TraitStrategy,
        ),
    );
    sections.insert(
        SectionKind::Inventory,
        diff_collection(&baseline.inventory, &candidate.inventory, &InventoryStrategy),
    );
    sections.insert(
        SectionKind::Currency,
        diff_currencies(&baseline.currencies, &candidate.currencies),
    );

    sections
}

/// Diff with default report settings.
pub fn compute_changes(baseline: &CharacterSnapshot, candidate: &CharacterSnapshot) -> ChangeReport {
    DiffEngine::default().compute(baseline, candidate)
}
