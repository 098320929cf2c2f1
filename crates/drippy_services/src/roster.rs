//! Character manifest loading
//!
//! The roster ships as an embedded JSON manifest. Manifest order is roster
//! order. A malformed entry (including an avatar name outside the shipped
//! art set) fails the whole load; there is no partial roster.

use drippy_core::character::{Character, Roster};
use thiserror::Error;

const MANIFEST: &str = include_str!("../assets/characters.json");

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("character manifest is malformed")]
    Malformed(#[from] serde_json::Error),

    #[error("character manifest contains no characters")]
    Empty,
}

/// Load the shipped roster.
pub fn load_roster() -> Result<Roster, RosterError> {
    parse_manifest(MANIFEST)
}

/// Parse a roster from manifest JSON.
pub fn parse_manifest(json: &str) -> Result<Roster, RosterError> {
    let characters: Vec<Character> = serde_json::from_str(json)?;
    if characters.is_empty() {
        return Err(RosterError::Empty);
    }
    tracing::debug!(count = characters.len(), "character roster loaded");
    Ok(Roster::new(characters))
}
