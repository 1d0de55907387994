//! Decorations and the sockets that hold them

use crate::config::GearRules;
use crate::error::{GearError, GearResult};
use crate::skill::Skill;
use crate::source::{StatAccumulator, StatSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A socketable jewel granting one or more skills
///
/// Decorations are shared catalog values. Slots hold them by `Arc`, and the
/// hunter treats each `Arc` allocation as one physical decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DecorationDef")]
pub struct Decoration {
    name: String,
    level: u32,
    skills: Vec<Skill>,
}

#[derive(Deserialize)]
struct DecorationDef {
    name: String,
    level: u32,
    #[serde(default)]
    skills: Vec<Skill>,
}

impl TryFrom<DecorationDef> for Decoration {
    type Error = GearError;

    fn try_from(def: DecorationDef) -> GearResult<Self> {
        Decoration::new(def.name, def.level, def.skills)
    }
}

impl Decoration {
    /// Create a decoration under the default rules
    pub fn new(name: impl Into<String>, level: u32, skills: Vec<Skill>) -> GearResult<Self> {
        Self::with_rules(name, level, skills, &GearRules::default())
    }

    /// Create a decoration, checking level bounds and skill count
    pub fn with_rules(
        name: impl Into<String>,
        level: u32,
        skills: Vec<Skill>,
        rules: &GearRules,
    ) -> GearResult<Self> {
        check_composition(level, skills.len(), rules)?;

        Ok(Decoration {
            name: name.into(),
            level,
            skills,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Check level bounds and skill count against another rule set
    pub fn check_rules(&self, rules: &GearRules) -> GearResult<()> {
        check_composition(self.level, self.skills.len(), rules)
    }
}

fn check_composition(level: u32, skills: usize, rules: &GearRules) -> GearResult<()> {
    if level == 0 || level > rules.max_decoration_level {
        return Err(GearError::InvalidDecorationLevel {
            level,
            max: rules.max_decoration_level,
        });
    }
    if level < rules.combo_decoration_min_level && skills > 1 {
        return Err(GearError::InvalidDecorationComposition { level, skills });
    }
    Ok(())
}

impl StatSource for Decoration {
    fn id(&self) -> &str {
        &self.name
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for skill in &self.skills {
            stats.add_skill(skill);
        }
    }
}

/// A socket of a fixed size holding at most one decoration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DecorationSlotDef")]
pub struct DecorationSlot {
    level: u32,
    occupant: Option<Arc<Decoration>>,
}

#[derive(Deserialize)]
struct DecorationSlotDef {
    level: u32,
    #[serde(default)]
    occupant: Option<Arc<Decoration>>,
}

impl TryFrom<DecorationSlotDef> for DecorationSlot {
    type Error = GearError;

    fn try_from(def: DecorationSlotDef) -> GearResult<Self> {
        let mut slot = DecorationSlot::new(def.level);
        slot.set_decoration(def.occupant)?;
        Ok(slot)
    }
}

impl DecorationSlot {
    /// Create an empty socket
    pub fn new(level: u32) -> Self {
        DecorationSlot {
            level,
            occupant: None,
        }
    }

    /// Create a socket already holding a decoration
    pub fn with_decoration(level: u32, decoration: Arc<Decoration>) -> GearResult<Self> {
        let mut slot = Self::new(level);
        slot.set_decoration(Some(decoration))?;
        Ok(slot)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn occupant(&self) -> Option<&Arc<Decoration>> {
        self.occupant.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Check that a decoration fits without changing the socket
    pub fn check(&self, decoration: &Decoration) -> GearResult<()> {
        if decoration.level > self.level {
            return Err(GearError::DecorationCapacityExceeded {
                decoration_level: decoration.level,
                slot_level: self.level,
            });
        }
        Ok(())
    }

    /// Check the socket level and its occupant against a rule set
    pub fn check_rules(&self, rules: &GearRules) -> GearResult<()> {
        if self.level == 0 || self.level > rules.max_decoration_level {
            return Err(GearError::InvalidDecorationSlotLevel {
                level: self.level,
                max: rules.max_decoration_level,
            });
        }
        match &self.occupant {
            Some(decoration) => decoration.check_rules(rules),
            None => Ok(()),
        }
    }

    /// Replace the occupant, returning the previous one
    ///
    /// Clearing always succeeds. Skill ledgers are not touched here.
    pub fn set_decoration(
        &mut self,
        decoration: Option<Arc<Decoration>>,
    ) -> GearResult<Option<Arc<Decoration>>> {
        if let Some(ref decoration) = decoration {
            self.check(decoration)?;
        }
        Ok(std::mem::replace(&mut self.occupant, decoration))
    }
}

/// Occupied sockets in order
pub(crate) fn socketed(slots: &[DecorationSlot]) -> impl Iterator<Item = &Arc<Decoration>> {
    slots.iter().filter_map(|slot| slot.occupant())
}

/// Check every socket of a gear piece against a rule set
pub(crate) fn check_sockets(slots: &[DecorationSlot], rules: &GearRules) -> GearResult<()> {
    slots.iter().try_for_each(|slot| slot.check_rules(rules))
}

/// Look up a socket by index
pub(crate) fn slot_at(slots: &[DecorationSlot], index: usize) -> GearResult<&DecorationSlot> {
    slots.get(index).ok_or(GearError::InvalidDecorationSlotIndex {
        index,
        slots: slots.len(),
    })
}

/// Validate and set a socket by index
pub(crate) fn set_slot(
    slots: &mut [DecorationSlot],
    index: usize,
    decoration: Option<Arc<Decoration>>,
) -> GearResult<Option<Arc<Decoration>>> {
    let count = slots.len();
    slots
        .get_mut(index)
        .ok_or(GearError::InvalidDecorationSlotIndex {
            index,
            slots: count,
        })?
        .set_decoration(decoration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jewel(level: u32) -> Arc<Decoration> {
        Arc::new(Decoration::new("Guard Jewel", level, vec![Skill::new("Guard", 1, 5)]).unwrap())
    }

    #[test]
    fn test_small_combo_decoration_rejected() {
        let skills = vec![Skill::new("Guard", 1, 5), Skill::new("Attack Boost", 1, 7)];

        let err = Decoration::new("Combo", 2, skills.clone()).unwrap_err();
        assert_eq!(
            err,
            GearError::InvalidDecorationComposition { level: 2, skills: 2 }
        );

        let deco = Decoration::new("Combo", 4, skills).unwrap();
        assert_eq!(deco.skills().len(), 2);
    }

    #[test]
    fn test_decoration_level_bounds() {
        assert!(matches!(
            Decoration::new("Zero", 0, vec![]),
            Err(GearError::InvalidDecorationLevel { level: 0, max: 4 })
        ));
        assert!(matches!(
            Decoration::new("Huge", 5, vec![]),
            Err(GearError::InvalidDecorationLevel { level: 5, max: 4 })
        ));
    }

    #[test]
    fn test_custom_rules() {
        let rules = GearRules {
            max_decoration_level: 5,
            combo_decoration_min_level: 3,
        };
        let skills = vec![Skill::new("Guard", 1, 5), Skill::new("Attack Boost", 1, 7)];
        assert!(Decoration::with_rules("Combo", 3, skills.clone(), &rules).is_ok());
        assert!(Decoration::with_rules("Combo", 2, skills, &rules).is_err());
    }

    #[test]
    fn test_slot_rules() {
        let rules = GearRules {
            max_decoration_level: 3,
            combo_decoration_min_level: 3,
        };
        assert!(DecorationSlot::new(3).check_rules(&rules).is_ok());
        assert_eq!(
            DecorationSlot::new(0).check_rules(&rules),
            Err(GearError::InvalidDecorationSlotLevel { level: 0, max: 3 })
        );
        assert_eq!(
            DecorationSlot::new(4).check_rules(&rules),
            Err(GearError::InvalidDecorationSlotLevel { level: 4, max: 3 })
        );

        // a level 4 jewel is fine by default but too big for these rules
        let slots = vec![DecorationSlot::new(1), DecorationSlot::with_decoration(4, jewel(4)).unwrap()];
        assert!(check_sockets(&slots, &GearRules::default()).is_ok());
        assert_eq!(
            check_sockets(&slots, &rules),
            Err(GearError::InvalidDecorationSlotLevel { level: 4, max: 3 })
        );
    }

    #[test]
    fn test_slot_capacity() {
        for slot_level in 1..=4 {
            for deco_level in 1..=4 {
                let mut slot = DecorationSlot::new(slot_level);
                let result = slot.set_decoration(Some(jewel(deco_level)));
                if deco_level > slot_level {
                    assert_eq!(
                        result,
                        Err(GearError::DecorationCapacityExceeded {
                            decoration_level: deco_level,
                            slot_level,
                        })
                    );
                    assert!(slot.is_empty());
                } else {
                    assert_eq!(result, Ok(None));
                    assert_eq!(slot.occupant().map(|d| d.level()), Some(deco_level));
                }
            }
        }
    }

    #[test]
    fn test_clear_returns_previous() {
        let deco = jewel(1);
        let mut slot = DecorationSlot::with_decoration(2, deco.clone()).unwrap();

        let previous = slot.set_decoration(None).unwrap();
        assert!(Arc::ptr_eq(&previous.unwrap(), &deco));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_set_slot_out_of_range() {
        let mut slots = vec![DecorationSlot::new(1)];
        assert_eq!(
            set_slot(&mut slots, 3, Some(jewel(1))),
            Err(GearError::InvalidDecorationSlotIndex { index: 3, slots: 1 })
        );
        assert_eq!(
            set_slot(&mut [], 0, None),
            Err(GearError::InvalidDecorationSlotIndex { index: 0, slots: 0 })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"name":"Guard Jewel","level":1,"skills":[{"name":"Guard","level":1,"max_level":5}]}"#;
        let deco: Decoration = serde_json::from_str(ok).unwrap();
        assert_eq!(deco.level(), 1);

        let combo = r#"{"name":"Bad","level":1,"skills":[
            {"name":"Guard","level":1,"max_level":5},
            {"name":"Attack Boost","level":1,"max_level":7}]}"#;
        assert!(serde_json::from_str::<Decoration>(combo).is_err());

        let oversized = r#"{"level":1,"occupant":{"name":"Big","level":3,"skills":[]}}"#;
        assert!(serde_json::from_str::<DecorationSlot>(oversized).is_err());
    }
}
