//! Skills and skill level-cap overrides

mod ledger;

pub use ledger::{resolve_max_level, Ledger, LedgerEntry, OverrideLedger, SkillLedger};

use serde::{Deserialize, Serialize};

/// A skill grant, or the stacked total of a skill inside a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique skill name
    pub name: String,
    /// Granted (or stacked) level
    pub level: u32,
    /// Ceiling before overrides apply
    pub max_level: u32,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u32, max_level: u32) -> Self {
        Skill {
            name: name.into(),
            level,
            max_level,
        }
    }
}

/// Raises the maximum level of another skill once enough of it is stacked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMaxLevelOverride {
    /// Override identity, distinct from the skill it affects
    pub name: String,
    /// Skill whose cap is raised
    pub skill_name: String,
    /// Stacked magnitude
    pub level: u32,
    /// Cap granted once active
    pub new_max_level: u32,
    /// Stacked level required before `new_max_level` applies
    pub activation_level: u32,
}

impl SkillMaxLevelOverride {
    pub fn new(
        name: impl Into<String>,
        skill_name: impl Into<String>,
        level: u32,
        new_max_level: u32,
        activation_level: u32,
    ) -> Self {
        SkillMaxLevelOverride {
            name: name.into(),
            skill_name: skill_name.into(),
            level,
            new_max_level,
            activation_level,
        }
    }

    /// Whether the stacked level has reached the activation threshold
    pub fn is_active(&self) -> bool {
        self.level >= self.activation_level
    }
}

impl LedgerEntry for Skill {
    fn key(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn level_mut(&mut self) -> &mut u32 {
        &mut self.level
    }

    fn same_definition(&self, other: &Self) -> bool {
        self.max_level == other.max_level
    }
}

impl LedgerEntry for SkillMaxLevelOverride {
    fn key(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn level_mut(&mut self) -> &mut u32 {
        &mut self.level
    }

    fn same_definition(&self, other: &Self) -> bool {
        self.skill_name == other.skill_name
            && self.new_max_level == other.new_max_level
            && self.activation_level == other.activation_level
    }
}
