//! Core domain types for the Decklens card list analyzer.
//!
//! This module defines the fundamental types used throughout the system:
//! - The positional card list field layout
//! - Raw card records as read from the list
//! - Keyword abilities and their letter codes

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Field Layout
// ============================================================================

/// Field positions within a card list record.
///
/// The list is positional and unlabeled; these indices are the contract.
pub const FIELD_ID: usize = 0;
pub const FIELD_NAME: usize = 1;
pub const FIELD_TYPE: usize = 2;
pub const FIELD_COST: usize = 3;
pub const FIELD_ATTACK: usize = 4;
pub const FIELD_HEALTH: usize = 5;
pub const FIELD_ABILITIES: usize = 6;
pub const FIELD_PLAYER_HP: usize = 7;
pub const FIELD_ENEMY_HP: usize = 8;
pub const FIELD_CARD_DRAW: usize = 9;
pub const FIELD_TEXT: usize = 10;

/// Column labels for the card list, in field order.
pub const HEADER_LABELS: [&str; 11] = [
    "id",
    "Name",
    "Type",
    "Cost",
    "Damage",
    "Health",
    "Abilities",
    "PlayerHP",
    "EnemyHP",
    "CardDraw",
    "Text description",
];

// ============================================================================
// Keyword Abilities
// ============================================================================

/// Keyword abilities a card can carry.
///
/// The abilities field encodes these as single upper-case letters, either
/// positionally (`---G--`) or as a bare letter run (`BG`). Membership is
/// letter containment, so both encodings work.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Breakthrough,
    Charge,
    Drain,
    Guard,
    Lethal,
    Ward,
}

impl Ability {
    /// All keyword abilities, in letter-code order.
    pub const ALL: [Ability; 6] = [
        Ability::Breakthrough,
        Ability::Charge,
        Ability::Drain,
        Ability::Guard,
        Ability::Lethal,
        Ability::Ward,
    ];

    /// The single-letter code used in the abilities field
    pub fn letter(&self) -> char {
        match self {
            Ability::Breakthrough => 'B',
            Ability::Charge => 'C',
            Ability::Drain => 'D',
            Ability::Guard => 'G',
            Ability::Lethal => 'L',
            Ability::Ward => 'W',
        }
    }

    /// Lowercase name, matching the serde encoding
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Breakthrough => "breakthrough",
            Ability::Charge => "charge",
            Ability::Drain => "drain",
            Ability::Guard => "guard",
            Ability::Lethal => "lethal",
            Ability::Ward => "ward",
        }
    }

    /// Look up an ability by its letter code (exact case)
    pub fn from_letter(letter: char) -> Option<Ability> {
        Ability::ALL.into_iter().find(|a| a.letter() == letter)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = Error;

    /// Parse either a letter code (`G`) or a lowercase name (`guard`).
    ///
    /// Letter codes are case-sensitive to match the filter semantics.
    fn from_str(s: &str) -> Result<Ability> {
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Ability::from_letter(letter)
                .ok_or_else(|| Error::UnknownAbility(s.to_string()));
        }

        Ability::ALL
            .into_iter()
            .find(|a| a.name() == trimmed)
            .ok_or_else(|| Error::UnknownAbility(s.to_string()))
    }
}

// ============================================================================
// Card Records
// ============================================================================

/// One record from the card list, kept as the raw trimmed fields.
///
/// The list format is positional and nothing enforces a field count at
/// parse time; accessors return [`Error::MissingField`] when a record is
/// too short for the requested field. Reports echo field values verbatim,
/// so fields stay strings and are only parsed where a numeric key is
/// required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    fields: Vec<String>,
    line: u64,
}

impl CardRecord {
    /// Create a record from already-trimmed fields and a 1-based line number
    pub fn new(fields: Vec<String>, line: u64) -> Self {
        Self { fields, line }
    }

    /// Source line number (1-based), for diagnostics
    pub fn line(&self) -> u64 {
        self.line
    }

    /// All fields, in list order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, or [`Error::MissingField`] if the record is shorter
    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(Error::MissingField {
                line: self.line,
                index,
                found: self.fields.len(),
            })
    }

    /// Raw cost field
    pub fn cost(&self) -> Result<&str> {
        self.field(FIELD_COST)
    }

    /// Raw attack (damage) field
    pub fn attack(&self) -> Result<&str> {
        self.field(FIELD_ATTACK)
    }

    /// Raw abilities field
    pub fn abilities(&self) -> Result<&str> {
        self.field(FIELD_ABILITIES)
    }

    /// Cost parsed as the numeric sort key
    pub fn cost_value(&self) -> Result<i64> {
        let raw = self.cost()?;
        raw.parse().map_err(|_| Error::InvalidCost {
            line: self.line,
            value: raw.to_string(),
        })
    }

    /// Whether the abilities field contains `ability`'s letter code.
    ///
    /// Case-sensitive containment, not word-boundary: `B-G` carries Guard,
    /// `g` does not.
    pub fn has_ability(&self, ability: Ability) -> Result<bool> {
        Ok(self.abilities()?.contains(ability.letter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> CardRecord {
        CardRecord::new(fields.iter().map(|f| f.to_string()).collect(), 1)
    }

    #[test]
    fn test_field_access() {
        let r = record(&["1", "Slimer", "creature", "1", "2", "1", "------"]);
        assert_eq!(r.cost().unwrap(), "1");
        assert_eq!(r.attack().unwrap(), "2");
        assert_eq!(r.abilities().unwrap(), "------");
    }

    #[test]
    fn test_short_record_reports_missing_field() {
        let r = record(&["1", "A", "creature", "3"]);
        assert_eq!(r.cost().unwrap(), "3");

        let err = r.abilities().unwrap_err();
        match err {
            Error::MissingField { index, found, .. } => {
                assert_eq!(index, FIELD_ABILITIES);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_cost_value_parses_integers() {
        assert_eq!(record(&["1", "A", "c", "12"]).cost_value().unwrap(), 12);
        assert_eq!(record(&["1", "A", "c", "-2"]).cost_value().unwrap(), -2);
    }

    #[test]
    fn test_cost_value_rejects_non_numeric() {
        let err = record(&["1", "A", "c", "abc"]).cost_value().unwrap_err();
        assert!(matches!(err, Error::InvalidCost { ref value, .. } if value == "abc"));
    }

    #[test]
    fn test_has_ability_is_case_sensitive_containment() {
        let guard = record(&["1", "A", "c", "3", "2", "0", "---G--"]);
        assert!(guard.has_ability(Ability::Guard).unwrap());

        let hyphenated = record(&["1", "A", "c", "3", "2", "0", "B-G"]);
        assert!(hyphenated.has_ability(Ability::Guard).unwrap());

        let lowercase = record(&["1", "A", "c", "3", "2", "0", "g"]);
        assert!(!lowercase.has_ability(Ability::Guard).unwrap());
    }

    #[test]
    fn test_ability_from_str() {
        assert_eq!("G".parse::<Ability>().unwrap(), Ability::Guard);
        assert_eq!("lethal".parse::<Ability>().unwrap(), Ability::Lethal);
        assert_eq!(" W ".parse::<Ability>().unwrap(), Ability::Ward);

        assert!("g".parse::<Ability>().is_err()); // letter codes are case-sensitive
        assert!("X".parse::<Ability>().is_err());
        assert!("taunt".parse::<Ability>().is_err());
    }

    #[test]
    fn test_ability_letters_round_trip() {
        for ability in Ability::ALL {
            assert_eq!(Ability::from_letter(ability.letter()), Some(ability));
        }
    }
}
