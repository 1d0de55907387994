//! Aggregate - Running totals and ledgers derived from equipped gear

use super::BaseStats;
use crate::error::GearResult;
use crate::skill::{OverrideLedger, SkillLedger};
use crate::source::StatAccumulator;
use crate::types::ElementResistances;
use serde::Serialize;

/// Base stats plus every equipped contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub attack: i32,
    pub defense: i32,
    pub resistances: ElementResistances,
    pub skills: SkillLedger,
    pub skill_limit_overrides: OverrideLedger,
}

impl Aggregate {
    /// Totals with nothing equipped
    pub fn from_base(base: &BaseStats) -> Self {
        Aggregate {
            attack: base.attack,
            defense: base.defense,
            resistances: base.resistances,
            skills: SkillLedger::new(),
            skill_limit_overrides: OverrideLedger::new(),
        }
    }

    /// Add a contribution
    ///
    /// Like [`Aggregate::revert`], may leave `self` half-applied on error.
    pub fn apply(&mut self, stats: &StatAccumulator) -> GearResult<()> {
        self.attack += stats.attack;
        self.defense += stats.defense;
        self.resistances += stats.resistances;

        for skill in &stats.skills {
            self.skills.accumulate(skill)?;
        }
        for skill_override in &stats.skill_limit_overrides {
            self.skill_limit_overrides.accumulate(skill_override)?;
        }
        Ok(())
    }

    /// Remove a contribution that was applied earlier
    ///
    /// May leave `self` half-reverted on error, so callers revert a staged
    /// copy and only commit it on success.
    pub fn revert(&mut self, stats: &StatAccumulator) -> GearResult<()> {
        self.attack -= stats.attack;
        self.defense -= stats.defense;
        self.resistances -= stats.resistances;

        for skill in &stats.skills {
            self.skills.release(skill)?;
        }
        for skill_override in &stats.skill_limit_overrides {
            self.skill_limit_overrides.release(skill_override)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GearError;
    use crate::skill::Skill;

    #[test]
    fn test_apply_then_revert() {
        let base = BaseStats {
            attack: 100,
            defense: 20,
            resistances: ElementResistances::uniform(1),
        };
        let start = Aggregate::from_base(&base);

        let mut stats = StatAccumulator::new();
        stats.attack = 30;
        stats.defense = -5;
        stats.resistances = ElementResistances::new(2, -1, 0, 0, 3);
        stats.add_skill(&Skill::new("Guard", 2, 5));

        let mut aggregate = start.clone();
        aggregate.apply(&stats).unwrap();
        assert_eq!(aggregate.attack, 130);
        assert_eq!(aggregate.defense, 15);
        assert_eq!(aggregate.skills.level("Guard"), 2);

        aggregate.revert(&stats).unwrap();
        assert_eq!(aggregate, start);
    }

    #[test]
    fn test_revert_unknown_skill() {
        let mut aggregate = Aggregate::from_base(&BaseStats::default());
        let mut stats = StatAccumulator::new();
        stats.add_skill(&Skill::new("Guard", 1, 5));

        assert!(matches!(
            aggregate.revert(&stats),
            Err(GearError::LedgerInconsistency { .. })
        ));
    }
}
