//! Aggregate statistics over a card list.
//!
//! Complements the ability report with a coarse overview: how many cards,
//! which card types, which keyword abilities, and the cost spread.

use crate::{Ability, CardRecord, Result, FIELD_TYPE};
use serde::Serialize;
use std::collections::BTreeMap;

/// Spread of the numeric cost column
#[derive(Clone, Debug, Serialize)]
pub struct CostStats {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
}

/// Aggregate view of one card list
#[derive(Clone, Debug, Serialize)]
pub struct CardListSummary {
    pub total: usize,
    /// Count per raw `Type` field value, as written in the list
    pub types: BTreeMap<String, usize>,
    /// Count per keyword ability name; every ability is present, zeros kept
    pub abilities: BTreeMap<&'static str, usize>,
    /// None when the list is empty
    pub cost: Option<CostStats>,
}

impl CardListSummary {
    /// The summary as one JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Summarize `records`.
///
/// Requires the same fields as the ability report (type, cost, abilities);
/// short records and non-numeric costs fail the call.
pub fn summarize(records: &[CardRecord]) -> Result<CardListSummary> {
    let mut types: BTreeMap<String, usize> = BTreeMap::new();
    let mut abilities: BTreeMap<&'static str, usize> =
        Ability::ALL.iter().map(|a| (a.name(), 0)).collect();
    let mut costs = Vec::with_capacity(records.len());

    for record in records {
        *types.entry(record.field(FIELD_TYPE)?.to_string()).or_insert(0) += 1;

        for ability in Ability::ALL {
            if record.has_ability(ability)? {
                *abilities.entry(ability.name()).or_insert(0) += 1;
            }
        }

        costs.push(record.cost_value()?);
    }

    let cost = if costs.is_empty() {
        None
    } else {
        let min = *costs.iter().min().unwrap_or(&0);
        let max = *costs.iter().max().unwrap_or(&0);
        let mean = costs.iter().sum::<i64>() as f64 / costs.len() as f64;
        Some(CostStats { min, max, mean })
    };

    tracing::debug!("Summarized {} records", records.len());

    Ok(CardListSummary {
        total: records.len(),
        types,
        abilities,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(card_type: &str, cost: &str, abilities: &str) -> CardRecord {
        CardRecord::new(
            vec![
                "1".into(),
                "Name".into(),
                card_type.into(),
                cost.into(),
                "2".into(),
                "1".into(),
                abilities.into(),
                "0".into(),
                "0".into(),
                "0".into(),
                "text".into(),
            ],
            1,
        )
    }

    #[test]
    fn test_counts_types_and_abilities() {
        let records = vec![
            record("creature", "1", "---G--"),
            record("creature", "3", "BC----"),
            record("itemGreen", "2", "---G-W"),
        ];

        let summary = summarize(&records).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.types["creature"], 2);
        assert_eq!(summary.types["itemGreen"], 1);
        assert_eq!(summary.abilities["guard"], 2);
        assert_eq!(summary.abilities["breakthrough"], 1);
        assert_eq!(summary.abilities["ward"], 1);
        assert_eq!(summary.abilities["lethal"], 0);
    }

    #[test]
    fn test_cost_stats() {
        let records = vec![
            record("creature", "1", "-"),
            record("creature", "2", "-"),
            record("creature", "6", "-"),
        ];

        let summary = summarize(&records).unwrap();
        let cost = summary.cost.unwrap();

        assert_eq!(cost.min, 1);
        assert_eq!(cost.max, 6);
        assert!((cost.mean - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_list() {
        let summary = summarize(&[]).unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.types.is_empty());
        assert!(summary.cost.is_none());
        // Ability rows stay present at zero
        assert_eq!(summary.abilities.len(), Ability::ALL.len());
    }

    #[test]
    fn test_fails_on_bad_cost() {
        let records = vec![record("creature", "abc", "-")];
        assert!(summarize(&records).is_err());
    }

    #[test]
    fn test_json_rendering() {
        let summary = summarize(&[record("creature", "2", "---G--")]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["types"]["creature"], 1);
        assert_eq!(json["abilities"]["guard"], 1);
        assert_eq!(json["cost"]["min"], 2);
    }
}
