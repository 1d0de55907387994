//! Ledger - Stacked levels keyed by identity
//!
//! Every equipped source accumulates its grants into a ledger and releases
//! exactly the same grants when it is unequipped. An entry lives only while
//! its summed level is above zero.

use super::{Skill, SkillMaxLevelOverride};
use crate::error::{GearError, GearResult, LedgerFault};
use serde::Serialize;
use std::collections::HashMap;

/// An entry that can be stacked inside a [`Ledger`]
pub trait LedgerEntry: Clone {
    /// Identity the entry is keyed by
    fn key(&self) -> &str;

    fn level(&self) -> u32;

    fn level_mut(&mut self) -> &mut u32;

    /// Whether the non-level fields of two entries agree
    fn same_definition(&self, other: &Self) -> bool;
}

/// Accumulating map from identity to summed level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger<E: LedgerEntry> {
    entries: HashMap<String, E>,
}

/// Active skills keyed by skill name
pub type SkillLedger = Ledger<Skill>;

/// Skill-limit overrides keyed by override name
pub type OverrideLedger = Ledger<SkillMaxLevelOverride>;

impl<E: LedgerEntry> Default for Ledger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LedgerEntry> Ledger<E> {
    pub fn new() -> Self {
        Ledger {
            entries: HashMap::new(),
        }
    }

    /// Add a contribution, inserting a copy when the key is new
    ///
    /// Only the level stacks. The other fields keep the values of the first
    /// contribution that created the entry. A level 0 grant changes nothing.
    pub fn accumulate(&mut self, delta: &E) -> GearResult<()> {
        if delta.level() == 0 {
            return Ok(());
        }

        match self.entries.get_mut(delta.key()) {
            Some(existing) => {
                if !existing.same_definition(delta) {
                    tracing::warn!(
                        key = delta.key(),
                        "contribution disagrees with the stored entry; keeping the stored definition"
                    );
                }
                let held = existing.level();
                let Some(total) = held.checked_add(delta.level()) else {
                    return Err(inconsistency(
                        delta.key(),
                        LedgerFault::Overflow {
                            held,
                            added: delta.level(),
                        },
                    ));
                };
                *existing.level_mut() = total;
            }
            None => {
                self.entries.insert(delta.key().to_string(), delta.clone());
            }
        }
        Ok(())
    }

    /// Remove a contribution, dropping the entry once it reaches zero
    pub fn release(&mut self, delta: &E) -> GearResult<()> {
        if delta.level() == 0 {
            return Ok(());
        }

        let key = delta.key();
        let Some(existing) = self.entries.get_mut(key) else {
            return Err(inconsistency(key, LedgerFault::MissingEntry));
        };

        let held = existing.level();
        let Some(remaining) = held.checked_sub(delta.level()) else {
            return Err(inconsistency(
                key,
                LedgerFault::Underflow {
                    held,
                    released: delta.level(),
                },
            ));
        };

        if remaining == 0 {
            self.entries.remove(key);
        } else {
            *existing.level_mut() = remaining;
        }
        Ok(())
    }

    /// Get the entry for a key
    pub fn get(&self, key: &str) -> Option<&E> {
        self.entries.get(key)
    }

    /// Stacked level for a key, 0 when absent
    pub fn level(&self, key: &str) -> u32 {
        self.entries.get(key).map(|e| e.level()).unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }
}

fn inconsistency(key: &str, fault: LedgerFault) -> GearError {
    tracing::error!(key, %fault, "ledger update rejected");
    GearError::LedgerInconsistency {
        key: key.to_string(),
        fault,
    }
}

/// Effective cap of a skill after active overrides
///
/// Starts from the skill's own `max_level` and takes the highest
/// `new_max_level` of every active override targeting it.
pub fn resolve_max_level(skill: &Skill, overrides: &OverrideLedger) -> u32 {
    overrides
        .iter()
        .filter(|ov| ov.skill_name == skill.name && ov.is_active())
        .map(|ov| ov.new_max_level)
        .fold(skill.max_level, u32::max)
}
