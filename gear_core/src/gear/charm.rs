//! Charm - A single skill grant

use crate::skill::Skill;
use crate::source::{StatAccumulator, StatSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charm {
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub level_limit: u32,
    pub skill: Skill,
}

impl Charm {
    pub fn new(name: impl Into<String>, skill: Skill) -> Self {
        Charm {
            name: name.into(),
            level: 1,
            level_limit: 1,
            skill,
        }
    }

    pub fn with_level(mut self, level: u32, level_limit: u32) -> Self {
        self.level = level;
        self.level_limit = level_limit;
        self
    }
}

impl StatSource for Charm {
    fn id(&self) -> &str {
        &self.name
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_skill(&self.skill);
    }
}
