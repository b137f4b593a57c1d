//! Sorting and filtering over parsed card records.
//!
//! The analysis pipeline is: sort the whole list by numeric cost, then
//! project `(cost, attack)` pairs for the records carrying a keyword
//! ability. Both steps fail fast on records too short or costs that do
//! not parse; nothing is skipped or repaired.

use crate::{Ability, CardRecord, Result};

/// Sort records ascending by numeric cost.
///
/// Every cost is parsed before the sort runs, so a single bad record
/// fails the whole call. The sort is stable: records with equal cost keep
/// their relative arrival order.
pub fn sort_by_cost(records: Vec<CardRecord>) -> Result<Vec<CardRecord>> {
    let mut keyed = records
        .into_iter()
        .map(|record| record.cost_value().map(|cost| (cost, record)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(cost, _)| *cost);

    tracing::debug!("Sorted {} records by cost", keyed.len());
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Collect `(cost, attack)` for every record carrying `ability`.
///
/// Values are the raw trimmed field strings, never re-parsed, in the
/// order the records are given; pass a sorted list for a sorted report.
pub fn ability_pairs(
    records: &[CardRecord],
    ability: Ability,
) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for record in records {
        if record.has_ability(ability)? {
            pairs.push((record.cost()?.to_string(), record.attack()?.to_string()));
        }
    }

    tracing::debug!(
        "{} of {} records carry {}",
        pairs.len(),
        records.len(),
        ability
    );
    Ok(pairs)
}
