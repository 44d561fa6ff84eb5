//! Change report scenarios over canonical and ingested snapshots.

mod common;

use common::{aria, item, modifier, racial_trait, upstream_aria};
use dndvault_core::diff::{compute_changes, diff_positional, render_human_summary, DiffEngine};
use dndvault_core::model::{ClassEntry, Currencies};
use dndvault_core::{parse_character_bytes, ChangeRow, ReportSettings, SectionKind};

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_name_change_only() {
    let baseline = aria();
    let mut candidate = aria();
    candidate.name = "Aria Stormwind".to_string();

    let report = compute_changes(&baseline, &candidate);

    assert_eq!(report.sections.len(), 1);
    let core = &report.sections[0];
    assert_eq!(core.kind, SectionKind::Core);
    assert_eq!(core.title, "Core Changes");
    assert_eq!(
        core.rows,
        vec![ChangeRow::new("Character Name", "Aria", "Aria Stormwind")]
    );
    assert!(core.rendered_text.starts_with("FIELD"));
}

#[test]
fn test_race_modifier_added() {
    let baseline = aria();
    let mut candidate = aria();
    candidate
        .modifiers
        .race
        .push(modifier(2, "Darkvision", "Sense", None));

    let report = compute_changes(&baseline, &candidate);

    assert_eq!(report.sections.len(), 1);
    let race = report.section(SectionKind::Race).unwrap();
    assert_eq!(race.title, "Race Changes");
    assert_eq!(race.rows, vec![ChangeRow::new("Darkvision", "", "Sense")]);
}

#[test]
fn test_inventory_quantity_change() {
    let baseline = aria();
    let mut candidate = aria();
    candidate.inventory = vec![item(9, "Rope", 3)];

    let report = compute_changes(&baseline, &candidate);

    let inventory = report.section(SectionKind::Inventory).unwrap();
    assert_eq!(inventory.title, "Inventory Changes");
    assert_eq!(inventory.rows, vec![ChangeRow::new("Rope", "1", "3")]);
}

#[test]
fn test_positional_class_sensitivity() {
    let rows = diff_positional(
        &[ClassEntry::new("Fighter", 3)],
        &[ClassEntry::new("Fighter", 3), ClassEntry::new("Rogue", 1)],
    );
    assert_eq!(rows, vec![ChangeRow::new("Class", "", "Rogue(1)")]);
}

#[test]
fn test_currency_unset_versus_zero() {
    let mut baseline = aria();
    baseline.currencies = Currencies::default();
    let mut candidate = aria();
    candidate.currencies = Currencies {
        cp: Some(0),
        sp: Some(0),
        ep: Some(0),
        gp: Some(0),
        pp: Some(0),
    };
    assert!(compute_changes(&baseline, &candidate).is_empty());
}

#[test]
fn test_identical_snapshots() {
    let a = aria();
    assert!(compute_changes(&a, &a).is_empty());

    let up = parse_character_bytes(&serde_json::to_vec(&upstream_aria()).unwrap()).unwrap();
    assert!(compute_changes(&up, &up).is_empty());
}

#[test]
fn test_trait_removed_and_replaced() {
    let baseline = aria();
    let mut candidate = aria();
    candidate.race.racial_traits = vec![racial_trait(103, "Mask of the Wild")];

    let report = compute_changes(&baseline, &candidate);
    let traits = report.section(SectionKind::Traits).unwrap();
    assert_eq!(
        traits.rows,
        vec![
            ChangeRow::new("Mask of the Wild", "", "Mask of the Wild"),
            ChangeRow::new("Darkvision", "Darkvision", ""),
        ]
    );
}

#[test]
fn test_multi_section_report_order() {
    let baseline = aria();
    let mut candidate = aria();
    candidate.currencies.gp = Some(15);
    candidate.stats[0].value = Some(20);
    candidate.race.full_name = "High Elf".to_string();
    candidate.inventory.push(item(11, "Torch", 5));

    let report = compute_changes(&baseline, &candidate);
    let kinds: Vec<SectionKind> = report.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Core,
            SectionKind::Abilities,
            SectionKind::Inventory,
            SectionKind::Currency
        ]
    );
    assert_eq!(
        report.section(SectionKind::Abilities).unwrap().rows,
        vec![ChangeRow::new("Strength", "11", "20")]
    );
    assert_eq!(
        report.section(SectionKind::Currency).unwrap().rows,
        vec![ChangeRow::new("GP", "40", "15")]
    );
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[test]
fn test_large_inventory_is_truncated_to_budget() {
    let baseline = aria();
    let mut candidate = aria();
    for i in 0..200 {
        candidate
            .inventory
            .push(item(1000 + i, &format!("Crossbow bolt bundle #{i}"), 20));
    }

    let report = compute_changes(&baseline, &candidate);
    let inventory = report.section(SectionKind::Inventory).unwrap();

    assert_eq!(inventory.rows.len(), 200);
    assert!(inventory.rendered_text.chars().count() <= 1024);
    assert!(inventory.rendered_text.ends_with("\n..."));
    assert!(inventory.omitted_rows > 0);
    for line in inventory.rendered_text.lines().filter(|l| *l != "...") {
        assert!(line.starts_with("Crossbow bolt bundle #"));
        assert!(line.ends_with("| 20"));
    }
}

#[test]
fn test_custom_budget_and_marker() {
    let engine = DiffEngine::new(ReportSettings {
        section_char_limit: 120,
        truncation_marker: "(more)".to_string(),
        ..ReportSettings::default()
    });
    let baseline = aria();
    let mut candidate = aria();
    for i in 0..10 {
        candidate.modifiers.feat.push(modifier(
            500 + i,
            &format!("Skill {i}"),
            "Proficiency",
            None,
        ));
    }

    let report = engine.compute(&baseline, &candidate);
    let feat = report.section(SectionKind::Feat).unwrap();
    assert!(feat.rendered_text.chars().count() <= 120);
    assert!(feat.rendered_text.ends_with("(more)"));
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[test]
fn test_human_summary_for_ingested_pair() {
    let approved = parse_character_bytes(&serde_json::to_vec(&upstream_aria()).unwrap()).unwrap();

    let mut pending_json = upstream_aria();
    pending_json["inventory"][0]["quantity"] = serde_json::json!(3);
    pending_json["approvalStatus"] = serde_json::json!(false);
    pending_json["isUpdate"] = serde_json::json!(true);
    let pending = parse_character_bytes(&serde_json::to_vec(&pending_json).unwrap()).unwrap();

    let report = compute_changes(&approved, &pending);
    let summary = render_human_summary(&report, &approved.name);

    assert!(summary.starts_with("## Review Changes for Character: Aria"));
    assert!(summary.contains("### Inventory Changes"));
    assert!(!summary.contains("### Core Changes"));
}
