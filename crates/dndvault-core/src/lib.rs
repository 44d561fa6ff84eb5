//! D&D Vault Core - character change-diff engine
//!
//! This crate turns two versions of a character sheet (the approved record and
//! a pending update) into a size-bounded change report ready for display:
//! - Canonical, immutable character snapshot model
//! - Ingestion boundary that normalises upstream character payloads
//! - Identity, scalar, positional and ability-score differs
//! - Report formatting with a hard per-section character budget
//! - Character display helpers used alongside the review
//!
//! The engine is pure and synchronous; fetching the two records and delivering
//! the report are left to the caller.

pub mod diff;
pub mod errors;
pub mod ingest;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod settings;

// Re-export commonly used types
pub use diff::{compute_changes, ChangeReport, ChangeRow, ChangeSection, DiffEngine, SectionKind};
pub use errors::{ExError, ExErrorKind, Result, VaultError};
pub use ingest::parse_character_bytes;
pub use model::CharacterSnapshot;
pub use settings::ReportSettings;
