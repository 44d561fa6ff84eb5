//! Section assembly and the per-section character budget.

use crate::diff::model::{ChangeReport, ChangeRow, ChangeSection, SectionKind};
use crate::settings::{ReportSettings, DEFAULT_SECTION_CHAR_LIMIT};
use std::collections::BTreeMap;

/// Header row placed at the top of the Core section only.
pub const CORE_HEADER: [&str; 3] = ["FIELD", "OLD VALUE", "NEW VALUE"];

/// Turns sectioned change rows into a [`ChangeReport`].
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    settings: ReportSettings,
}

impl ReportFormatter {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Build the report. Empty sections are dropped; the map's key order is
    /// the report order.
    pub fn format(&self, sectioned: BTreeMap<SectionKind, Vec<ChangeRow>>) -> ChangeReport {
        let sections = sectioned
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(kind, rows)| self.format_section(kind, rows))
            .collect();
        ChangeReport { sections }
    }

    fn format_section(&self, kind: SectionKind, rows: Vec<ChangeRow>) -> ChangeSection {
        let header = (kind == SectionKind::Core)
            .then(|| self.render_line(CORE_HEADER[0], CORE_HEADER[1], CORE_HEADER[2]));
        let lines: Vec<String> = rows.iter().map(|r| self.render_row(r)).collect();

        let (rendered_text, omitted_rows) = self.fit(header.as_deref(), &lines);
        if omitted_rows > 0 {
            tracing::debug!(
                component = module_path!(),
                op = "format_section",
                section = kind.name(),
                rows = rows.len(),
                omitted_rows = omitted_rows,
                "section truncated to budget"
            );
        }

        ChangeSection {
            kind,
            title: kind.title(),
            rows,
            rendered_text,
            omitted_rows,
        }
    }

    /// One column-aligned row with trailing padding trimmed. Embedded line
    /// breaks are flattened so a row always occupies one line.
    pub fn render_row(&self, row: &ChangeRow) -> String {
        self.render_line(&row.label, &row.old, &row.new)
    }

    fn render_line(&self, label: &str, old: &str, new: &str) -> String {
        let line = format!(
            "{:<lw$} | {:<ow$} | {}",
            label,
            old,
            new,
            lw = self.settings.label_width,
            ow = self.settings.old_value_width
        );
        line.trim_end()
            .replace(|c: char| c == '\n' || c == '\r', " ")
    }

    /// Join lines within the budget, returning the text and how many change
    /// rows were left out. Rows are never split; once one does not fit, the
    /// marker replaces it and everything after it.
    fn fit(&self, header: Option<&str>, lines: &[String]) -> (String, usize) {
        // settings built in code skip validation, so cap here too
        let limit = self
            .settings
            .section_char_limit
            .min(DEFAULT_SECTION_CHAR_LIMIT);
        let all: Vec<&str> = header
            .into_iter()
            .chain(lines.iter().map(String::as_str))
            .collect();

        let full = all.join("\n");
        if full.chars().count() <= limit {
            return (full, 0);
        }

        let marker = self.settings.truncation_marker.as_str();
        let marker_len = marker.chars().count();

        let mut out = String::new();
        let mut used = 0usize;
        let mut kept = 0usize;
        for line in &all {
            let sep = usize::from(!out.is_empty());
            let line_len = line.chars().count();
            // the marker still needs its own line after this one
            if used + sep + line_len + 1 + marker_len > limit {
                break;
            }
            if sep == 1 {
                out.push('\n');
            }
            out.push_str(line);
            used += sep + line_len;
            kept += 1;
        }

        let kept_rows = kept.saturating_sub(usize::from(header.is_some()));
        let omitted = lines.len() - kept_rows;

        if out.is_empty() {
            out = marker.chars().take(limit).collect();
        } else {
            out.push('\n');
            out.push_str(marker);
        }
        (out, omitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(limit: usize) -> ReportFormatter {
        ReportFormatter::new(ReportSettings {
            section_char_limit: limit,
            ..ReportSettings::default()
        })
    }

    fn rows(n: usize) -> Vec<ChangeRow> {
        (0..n)
            .map(|i| ChangeRow::added(format!("Item {i}"), "1"))
            .collect()
    }

    #[test]
    fn test_empty_sections_dropped() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Core, vec![]);
        map.insert(SectionKind::Race, vec![ChangeRow::added("Darkvision", "Sense")]);
        let report = ReportFormatter::default().format(map);
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].title, "Race Changes");
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Currency, vec![ChangeRow::new("GP", "0", "5")]);
        map.insert(SectionKind::Core, vec![ChangeRow::new("Race", "Elf", "Human")]);
        map.insert(SectionKind::Inventory, vec![ChangeRow::new("Rope", "1", "3")]);
        let report = ReportFormatter::default().format(map);
        let kinds: Vec<SectionKind> = report.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Core, SectionKind::Inventory, SectionKind::Currency]
        );
    }

    #[test]
    fn test_header_only_on_core() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Core, vec![ChangeRow::new("Race", "Elf", "Human")]);
        map.insert(SectionKind::Traits, vec![ChangeRow::added("Keen", "Keen Senses")]);
        let report = ReportFormatter::default().format(map);
        let core = &report.sections[0];
        assert!(core.rendered_text.starts_with("FIELD"));
        assert_eq!(core.rows.len(), 1);
        assert_eq!(core.rendered_text.lines().count(), 2);
        assert!(!report.sections[1].rendered_text.contains("FIELD"));
    }

    #[test]
    fn test_row_columns_are_aligned() {
        let f = ReportFormatter::default();
        let line = f.render_row(&ChangeRow::new("Rope", "1", "3"));
        assert_eq!(line, format!("{:<16} | {:<14} | 3", "Rope", "1"));
        let removed = f.render_row(&ChangeRow::removed("Rope", "1"));
        assert!(!removed.ends_with(' '));
    }

    #[test]
    fn test_multiline_text_stays_on_one_line() {
        let f = ReportFormatter::default();
        let line = f.render_row(&ChangeRow::added("Keen Senses", "Perception\nproficiency"));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_fitting_section_is_not_truncated() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Inventory, rows(3));
        let report = ReportFormatter::default().format(map);
        let section = &report.sections[0];
        assert!(!section.is_truncated());
        assert!(!section.rendered_text.ends_with("..."));
    }

    #[test]
    fn test_truncation_keeps_whole_rows_and_marker() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Inventory, rows(100));
        let f = formatter(200);
        let report = f.format(map);
        let section = &report.sections[0];

        assert!(section.rendered_text.chars().count() <= 200);
        assert!(section.is_truncated());
        assert_eq!(section.rows.len(), 100);

        let mut lines: Vec<&str> = section.rendered_text.lines().collect();
        assert_eq!(lines.pop(), Some("..."));
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, f.render_row(&section.rows[i]));
        }
        assert_eq!(lines.len() + section.omitted_rows, 100);
    }

    #[test]
    fn test_oversized_single_row_becomes_marker() {
        let mut map = BTreeMap::new();
        map.insert(
            SectionKind::Traits,
            vec![ChangeRow::added("x".repeat(2000), "Huge")],
        );
        let report = ReportFormatter::default().format(map);
        assert_eq!(report.sections[0].rendered_text, "...");
        assert_eq!(report.sections[0].omitted_rows, 1);
    }

    #[test]
    fn test_unvalidated_limit_is_capped_at_section_max() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Inventory, rows(200));
        let report = formatter(4096).format(map);
        let section = &report.sections[0];
        assert!(section.rendered_text.chars().count() <= DEFAULT_SECTION_CHAR_LIMIT);
        assert!(section.is_truncated());
    }

    #[test]
    fn test_budget_counts_characters_not_bytes() {
        let mut map = BTreeMap::new();
        map.insert(SectionKind::Traits, vec![ChangeRow::added("é".repeat(90), "ü")]);
        let report = formatter(120).format(map);
        assert!(!report.sections[0].is_truncated());
    }
}
