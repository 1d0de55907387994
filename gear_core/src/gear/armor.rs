//! Armor - Body pieces with defense, resistances, skills and sockets

use super::decoration::{self, Decoration, DecorationSlot};
use crate::error::GearResult;
use crate::skill::{Skill, SkillMaxLevelOverride};
use crate::source::{StatAccumulator, StatSource};
use crate::types::{ArmorType, ElementResistances};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An armor piece for one body location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    /// Display name
    pub name: String,
    /// Body location this piece is worn on
    pub armor_type: ArmorType,
    pub defense: i32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub level_limit: u32,
    #[serde(default)]
    pub resistances: ElementResistances,
    /// Skills granted while worn, independent of decorations
    #[serde(default)]
    pub innate_skills: Vec<Skill>,
    #[serde(default)]
    pub skill_limit_overrides: Vec<SkillMaxLevelOverride>,
    #[serde(default)]
    decoration_slots: Vec<DecorationSlot>,
}

impl Armor {
    /// Create a bare armor piece
    pub fn new(name: impl Into<String>, armor_type: ArmorType, defense: i32) -> Self {
        Armor {
            name: name.into(),
            armor_type,
            defense,
            level: 1,
            level_limit: 1,
            resistances: ElementResistances::default(),
            innate_skills: Vec::new(),
            skill_limit_overrides: Vec::new(),
            decoration_slots: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: u32, level_limit: u32) -> Self {
        self.level = level;
        self.level_limit = level_limit;
        self
    }

    pub fn with_resistances(mut self, resistances: ElementResistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn with_innate_skill(mut self, skill: Skill) -> Self {
        self.innate_skills.push(skill);
        self
    }

    pub fn with_override(mut self, skill_override: SkillMaxLevelOverride) -> Self {
        self.skill_limit_overrides.push(skill_override);
        self
    }

    /// Add a socket (empty or already filled)
    pub fn with_decoration_slot(mut self, slot: DecorationSlot) -> Self {
        self.decoration_slots.push(slot);
        self
    }

    pub fn decoration_slots(&self) -> &[DecorationSlot] {
        &self.decoration_slots
    }

    pub fn decoration_slot(&self, index: usize) -> GearResult<&DecorationSlot> {
        decoration::slot_at(&self.decoration_slots, index)
    }

    /// Decorations currently socketed, in slot order
    pub fn decorations(&self) -> impl Iterator<Item = &Arc<Decoration>> {
        decoration::socketed(&self.decoration_slots)
    }

    /// Socket or clear a decoration, returning the displaced one
    ///
    /// Only slot compatibility is checked here. Once the armor is worn the
    /// hunter owns it and routes decoration changes through its ledgers.
    pub fn set_decoration(
        &mut self,
        index: usize,
        decoration: Option<Arc<Decoration>>,
    ) -> GearResult<Option<Arc<Decoration>>> {
        decoration::set_slot(&mut self.decoration_slots, index, decoration)
    }
}

impl StatSource for Armor {
    fn id(&self) -> &str {
        &self.name
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.defense += self.defense;
        stats.resistances += self.resistances;

        for skill in &self.innate_skills {
            stats.add_skill(skill);
        }

        for decoration in self.decorations() {
            decoration.apply(stats);
        }

        for skill_override in &self.skill_limit_overrides {
            stats.add_override(skill_override);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GearError;

    fn guard_jewel() -> Arc<Decoration> {
        Arc::new(Decoration::new("Guard Jewel", 1, vec![Skill::new("Guard", 1, 5)]).unwrap())
    }

    #[test]
    fn test_set_decoration_without_slots() {
        let mut armor = Armor::new("Bone Helm", ArmorType::Head, 4);
        assert_eq!(
            armor.set_decoration(0, Some(guard_jewel())),
            Err(GearError::InvalidDecorationSlotIndex { index: 0, slots: 0 })
        );
    }

    #[test]
    fn test_set_decoration_index() {
        let mut armor = Armor::new("Bone Helm", ArmorType::Head, 4)
            .with_decoration_slot(DecorationSlot::new(1))
            .with_decoration_slot(DecorationSlot::new(2));

        assert!(armor.set_decoration(1, Some(guard_jewel())).unwrap().is_none());
        assert!(armor.decoration_slot(0).unwrap().is_empty());
        assert_eq!(armor.decorations().count(), 1);

        assert!(matches!(
            armor.set_decoration(2, None),
            Err(GearError::InvalidDecorationSlotIndex { index: 2, slots: 2 })
        ));
    }

    #[test]
    fn test_contribution() {
        let armor = Armor::new("Guard Mail", ArmorType::Chest, 10)
            .with_resistances(ElementResistances::uniform(2))
            .with_innate_skill(Skill::new("Guard", 2, 5))
            .with_override(SkillMaxLevelOverride::new("guard_secret", "Guard", 1, 7, 1))
            .with_decoration_slot(DecorationSlot::with_decoration(1, guard_jewel()).unwrap());

        let stats = armor.contribution();
        assert_eq!(stats.attack, 0);
        assert_eq!(stats.defense, 10);
        assert_eq!(stats.resistances, ElementResistances::uniform(2));
        assert_eq!(stats.skills.len(), 2);
        assert_eq!(stats.skill_limit_overrides.len(), 1);
    }

    #[test]
    fn test_deserialize_armor() {
        let json = r#"{
            "name": "Rathalos Mail",
            "armor_type": "chest",
            "defense": 20,
            "resistances": {"fire": 3, "water": -3, "lightning": 0, "ice": 0, "dragon": 1},
            "innate_skills": [{"name": "Attack Boost", "level": 1, "max_level": 7}],
            "decoration_slots": [{"level": 2}]
        }"#;

        let armor: Armor = serde_json::from_str(json).unwrap();
        assert_eq!(armor.armor_type, ArmorType::Chest);
        assert_eq!(armor.resistances.water, -3);
        assert_eq!(armor.decoration_slots().len(), 1);
        assert!(armor.skill_limit_overrides.is_empty());
    }
}
