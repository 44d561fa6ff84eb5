//! Index-aligned differ for the ordered class list.

use crate::diff::model::ChangeRow;
use crate::model::ClassEntry;

pub const CLASS_LABEL: &str = "Class";

/// Compare classes slot by slot.
///
/// Order-sensitive: swapping two classes yields two rows even though the
/// set of classes is unchanged.
pub fn diff_positional(baseline: &[ClassEntry], candidate: &[ClassEntry]) -> Vec<ChangeRow> {
    let n = baseline.len().max(candidate.len());
    (0..n)
        .filter_map(|i| {
            let old = baseline.get(i).map(ClassEntry::label).unwrap_or_default();
            let new = candidate.get(i).map(ClassEntry::label).unwrap_or_default();
            (old != new).then(|| ChangeRow::new(CLASS_LABEL, old, new))
        })
        .collect()
}
