//! Report rendering.
//!
//! The ability report is two lines: the card list column labels, then the
//! `(cost, attack)` pairs for the matching cards. Both use a bracketed,
//! comma-separated, single-quoted list notation; the exact bytes are load
//! bearing, downstream tooling diffs them against archived runs. A JSON
//! rendering is available as the structured alternative.

use crate::{ability_pairs, Ability, CardRecord, Result, HEADER_LABELS};
use serde::Serialize;

/// Quote one value for list notation.
///
/// Single quotes wrap the value; backslashes and single quotes inside it
/// are backslash-escaped.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// The card list column labels as a single list-notation line
pub fn header_line() -> String {
    let quoted: Vec<String> = HEADER_LABELS.iter().map(|label| quote(label)).collect();
    format!("[{}]", quoted.join(", "))
}

/// `(cost, attack)` pairs as a single list-notation line of 2-tuples
pub fn pairs_line(pairs: &[(String, String)]) -> String {
    let rendered: Vec<String> = pairs
        .iter()
        .map(|(cost, attack)| format!("({}, {})", quote(cost), quote(attack)))
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// Report of the `(cost, attack)` pairs for one keyword ability.
///
/// Built from an already-sorted record list; the pairs keep that order.
#[derive(Clone, Debug, Serialize)]
pub struct AbilityReport {
    pub ability: Ability,
    pub header: Vec<String>,
    pub pairs: Vec<(String, String)>,
}

impl AbilityReport {
    /// Build the report over `records`, filtering on `ability`
    pub fn build(records: &[CardRecord], ability: Ability) -> Result<Self> {
        Ok(Self {
            ability,
            header: HEADER_LABELS.iter().map(|label| label.to_string()).collect(),
            pairs: ability_pairs(records, ability)?,
        })
    }

    /// The two report lines in list notation: header, then pairs
    pub fn render_lines(&self) -> (String, String) {
        (header_line(), pairs_line(&self.pairs))
    }

    /// The report as one JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_is_exact() {
        assert_eq!(
            header_line(),
            "['id', 'Name', 'Type', 'Cost', 'Damage', 'Health', 'Abilities', \
             'PlayerHP', 'EnemyHP', 'CardDraw', 'Text description']"
        );
    }

    #[test]
    fn test_pairs_line_formats_tuples() {
        let pairs = vec![
            ("3".to_string(), "2".to_string()),
            ("5".to_string(), "4".to_string()),
        ];
        assert_eq!(pairs_line(&pairs), "[('3', '2'), ('5', '4')]");
    }

    #[test]
    fn test_empty_pairs_line() {
        assert_eq!(pairs_line(&[]), "[]");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("3"), "'3'");
        assert_eq!(quote("don't"), r"'don\'t'");
        assert_eq!(quote(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_report_build_and_json() {
        let record = CardRecord::new(
            vec![
                "1".into(),
                "Fireball".into(),
                "Spell".into(),
                "3".into(),
                "2".into(),
                "0".into(),
                "G".into(),
                "0".into(),
                "0".into(),
                "0".into(),
                "desc".into(),
            ],
            1,
        );

        let report = AbilityReport::build(&[record], Ability::Guard).unwrap();
        let (header, pairs) = report.render_lines();
        assert!(header.starts_with("['id', "));
        assert_eq!(pairs, "[('3', '2')]");

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["ability"], "guard");
        assert_eq!(json["pairs"][0][0], "3");
        assert_eq!(json["pairs"][0][1], "2");
    }
}
