//! Weapon - Attack, defense and sockets

use super::decoration::{self, Decoration, DecorationSlot};
use crate::error::GearResult;
use crate::source::{StatAccumulator, StatSource};
use crate::types::{Element, StatusAilment};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A weapon. Carries no innate skills or overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub attack: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub status_ailment: Option<StatusAilment>,
    #[serde(default)]
    decoration_slots: Vec<DecorationSlot>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, attack: i32) -> Self {
        Weapon {
            name: name.into(),
            attack,
            defense: 0,
            element: None,
            status_ailment: None,
            decoration_slots: Vec::new(),
        }
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_status_ailment(mut self, ailment: StatusAilment) -> Self {
        self.status_ailment = Some(ailment);
        self
    }

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

    pub fn decorations(&self) -> impl Iterator<Item = &Arc<Decoration>> {
        decoration::socketed(&self.decoration_slots)
    }

    /// Socket or clear a decoration, returning the displaced one
    pub fn set_decoration(
        &mut self,
        index: usize,
        decoration: Option<Arc<Decoration>>,
    ) -> GearResult<Option<Arc<Decoration>>> {
        decoration::set_slot(&mut self.decoration_slots, index, decoration)
    }
}

impl StatSource for Weapon {
    fn id(&self) -> &str {
        &self.name
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.attack += self.attack;
        stats.defense += self.defense;

        for decoration in self.decorations() {
            decoration.apply(stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::Skill;

    #[test]
    fn test_weapon_contribution() {
        let jewel = Arc::new(
            Decoration::new("Attack Jewel", 2, vec![Skill::new("Attack Boost", 1, 7)]).unwrap(),
        );
        let weapon = Weapon::new("Buster Sword", 150)
            .with_defense(5)
            .with_element(Element::Fire)
            .with_decoration_slot(DecorationSlot::with_decoration(2, jewel).unwrap());

        let stats = weapon.contribution();
        assert_eq!(stats.attack, 150);
        assert_eq!(stats.defense, 5);
        assert_eq!(stats.skills, vec![Skill::new("Attack Boost", 1, 7)]);
        assert_eq!(weapon.element, Some(Element::Fire));
        assert!(weapon.status_ailment.is_none());
    }

    #[test]
    fn test_deserialize_weapon() {
        let json = r#"{"name": "Hidden Saber", "attack": 120, "status_ailment": "sleep"}"#;
        let weapon: Weapon = serde_json::from_str(json).unwrap();
        assert_eq!(weapon.status_ailment, Some(StatusAilment::Sleep));
        assert!(weapon.decoration_slots().is_empty());
    }
}
