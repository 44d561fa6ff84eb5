//! Human-readable summary renderer for change reports.

use crate::diff::model::ChangeReport;

/// Render a [`ChangeReport`] as a titled text block for review displays.
///
/// Each section is emitted as its title followed by its budget-capped
/// rendered text in a code fence, so column alignment survives chat clients.
pub fn render_human_summary(report: &ChangeReport, character_name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("## Review Changes for Character: {character_name}\n\n"));

    if report.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    for section in &report.sections {
        out.push_str(&format!("### {}\n\n", section.title));
        out.push_str("```\n");
        out.push_str(&section.rendered_text);
        out.push_str("\n```\n");
        if section.is_truncated() {
            out.push_str(&format!(
                "_{} more change(s) not shown._\n",
                section.omitted_rows
            ));
        }
        out.push('\n');
    }

    out
}
