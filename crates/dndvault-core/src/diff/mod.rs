//! Character change-diff engine.
//!
//! Compares an approved character snapshot with a pending update and
//! produces a sectioned, size-bounded change report for review.
//!
//! ## Entry point
//!
//! ```
//! use dndvault_core::diff::{compute_changes, render_human_summary};
//! use dndvault_core::CharacterSnapshot;
//!
//! let approved = CharacterSnapshot::new("Aria");
//! let pending = CharacterSnapshot::new("Aria Stormwind");
//! let report = compute_changes(&approved, &pending);
//! let summary = render_human_summary(&report, &approved.name);
//! assert!(summary.contains("Core Changes"));
//! ```
//!
//! ## Guarantees
//!
//! - **Identity**: diffing a snapshot against itself yields no sections.
//! - **Presence-only collections**: modifiers and racial traits are reported
//!   only as added or removed; inventory also reports quantity changes.
//! - **Budget**: every section's rendered text fits the configured character
//!   limit, and truncation never splits a row.
//! - **Determinism**: section order is fixed; rows follow candidate order,
//!   then baseline order.

pub mod abilities;
pub mod collection;
pub mod engine;
pub mod formatter;
pub mod human_summary;
pub mod model;
pub mod positional;
pub mod scalar;

pub use abilities::diff_abilities;
pub use collection::{diff_collection, CollectionStrategy};
pub use engine::{compute_changes, DiffEngine};
pub use formatter::ReportFormatter;
pub use human_summary::render_human_summary;
pub use model::{ChangeReport, ChangeRow, ChangeSection, SectionKind};
pub use positional::diff_positional;
pub use scalar::{diff_currencies, diff_scalar};
