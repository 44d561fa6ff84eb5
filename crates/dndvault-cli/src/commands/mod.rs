pub mod changes;
pub mod show;

use dndvault_core::errors::ExError;
use dndvault_core::{parse_character_bytes, CharacterSnapshot};
use std::path::Path;

/// Read and ingest one character file.
///
/// # Errors
///
/// - `Io` - the file cannot be read
/// - `InvalidSnapshot` / `MissingField` - see [`parse_character_bytes`]
pub fn load_character(path: &Path) -> Result<CharacterSnapshot, ExError> {
    let bytes = std::fs::read(path).map_err(|e| {
        let message = format!("cannot read {}: {}", path.display(), e);
        ExError::from(e)
            .with_op("load_character")
            .with_message(message)
    })?;
    parse_character_bytes(&bytes)
}
