//! Character roster model

use serde::{Deserialize, Serialize};

/// Entity archetype in the roster.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    Player,
    Enemy,
    Npc,
}

/// Art identity for a roster entry.
///
/// This is a closed set: every variant maps to exactly one sprite sheet,
/// and the mapping is exhaustive. A manifest naming an avatar outside this
/// set fails at load time instead of falling back to a missing-texture
/// lookup at draw time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Avatar {
    Drippy,
    Wick,
    Sable,
    CaveBat,
    Stalag,
    Merchant,
}

impl Avatar {
    /// Sprite sheet shipped for this avatar.
    pub fn sprite_path(self) -> &'static str {
        match self {
            Avatar::Drippy => "sprites/drippy.png",
            Avatar::Wick => "sprites/wick.png",
            Avatar::Sable => "sprites/sable.png",
            Avatar::CaveBat => "sprites/cave_bat.png",
            Avatar::Stalag => "sprites/stalag.png",
            Avatar::Merchant => "sprites/merchant.png",
        }
    }

    /// Portrait drawn on the title screen's selection panel.
    pub fn portrait_path(self) -> &'static str {
        match self {
            Avatar::Drippy => "portraits/drippy.png",
            Avatar::Wick => "portraits/wick.png",
            Avatar::Sable => "portraits/sable.png",
            Avatar::CaveBat => "portraits/cave_bat.png",
            Avatar::Stalag => "portraits/stalag.png",
            Avatar::Merchant => "portraits/merchant.png",
        }
    }
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub kind: CharacterKind,
    pub avatar: Avatar,
    /// One-liner shown under the portrait on the selection panel.
    #[serde(default)]
    pub blurb: String,
}

/// Ordered collection of characters.
///
/// Order is whatever the source (manifest) provided; filtering preserves it.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// Characters of one kind, in roster order.
    pub fn by_kind(&self, kind: CharacterKind) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.kind == kind).collect()
    }
}
