//! The accepted-word dictionary.
//!
//! An immutable set queried by exact membership, built once from the
//! embedded word list and read-only for the lifetime of the session.

use bevy::prelude::*;
use std::collections::HashSet;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Dictionary>();
}

/// Words the game accepts. All uppercase, none longer than the word-length
/// guard allows.
const WORDS: &[&str] = &[
    "ACE", "AIM", "ARM", "ART", "BAG", "BAT", "BED", "BEE", "BOX", "BUS", "CAB", "CAR", "CAT",
    "COW", "CUP", "DOG", "EAR", "EGG", "EYE", "FOX", "HAT", "ICE", "JAM", "KEY", "LEG", "MAP",
    "NET", "OWL", "PEN", "PIG", "RAT", "SUN", "TEA", "WEB", "ZIP", "BEAR", "BIRD", "BLUE", "BOAT",
    "BOOK", "CAKE", "COLD", "DOOR", "DUCK", "FIRE", "FISH", "FROG", "GAME", "GOLD", "HAND", "KITE",
    "LAMP", "LION", "MOON", "RAIN", "SHIP", "SNOW", "STAR", "TREE", "WIND", "WORD",
];

/// Immutable set of valid words.
#[derive(Resource, Debug)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::from_words(WORDS)
    }
}

impl Dictionary {
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Exact membership lookup.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
