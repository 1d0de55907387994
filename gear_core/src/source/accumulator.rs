//! StatAccumulator - Collects a source's deltas before they reach a hunter

use crate::skill::{Skill, SkillMaxLevelOverride};
use crate::types::ElementResistances;

/// Stat deltas and grants collected from one or more sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatAccumulator {
    pub attack: i32,
    pub defense: i32,
    pub resistances: ElementResistances,
    /// Skill grants in the order they were collected
    pub skills: Vec<Skill>,
    /// Override grants in the order they were collected
    pub skill_limit_overrides: Vec<SkillMaxLevelOverride>,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_skill(&mut self, skill: &Skill) {
        self.skills.push(skill.clone());
    }

    pub fn add_override(&mut self, skill_override: &SkillMaxLevelOverride) {
        self.skill_limit_overrides.push(skill_override.clone());
    }

    /// Merge another accumulator into this one
    pub fn merge(&mut self, other: StatAccumulator) {
        self.attack += other.attack;
        self.defense += other.defense;
        self.resistances += other.resistances;
        self.skills.extend(other.skills);
        self.skill_limit_overrides.extend(other.skill_limit_overrides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let mut a = StatAccumulator::new();
        a.defense = 10;
        a.add_skill(&Skill::new("Guard", 1, 5));

        let mut b = StatAccumulator::new();
        b.attack = 5;
        b.resistances = ElementResistances::uniform(1);
        b.add_skill(&Skill::new("Guard", 2, 5));

        a.merge(b);
        assert_eq!(a.attack, 5);
        assert_eq!(a.defense, 10);
        assert_eq!(a.resistances, ElementResistances::uniform(1));
        assert_eq!(a.skills.len(), 2);
    }
}
