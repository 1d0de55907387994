//! Hunter - The gear set aggregate
//!
//! A hunter owns whatever it wears and keeps two ledgers (active skills and
//! skill-limit overrides) plus running attack, defense and resistance totals
//! that always equal base stats plus the contribution of every equipped item.
//!
//! Every mutation follows the same transaction shape:
//! 1. validate the request (slot type, slot presence, socket fit, uniqueness)
//! 2. stage the new aggregate on a copy: revert outgoing, apply incoming
//! 3. commit the staged aggregate and the equipment change together
//!
//! A failing operation therefore leaves the hunter untouched.

mod aggregate;

pub use aggregate::Aggregate;

use crate::config::{GearRules, HunterConfig};
use crate::error::{GearError, GearResult};
use crate::gear::{self, Armor, Charm, Decoration, DecorationSlot, Weapon};
use crate::skill::{resolve_max_level, OverrideLedger, SkillLedger};
use crate::source::{StatAccumulator, StatSource};
use crate::types::{ArmorType, ElementResistances, EquipmentSlot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Hunter stats before any gear is equipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub resistances: ElementResistances,
}

/// Gear to equip when a hunter is created
#[derive(Debug, Clone, Default)]
pub struct Loadout {
    pub weapon: Option<Weapon>,
    pub head: Option<Armor>,
    pub chest: Option<Armor>,
    pub arms: Option<Armor>,
    pub legs: Option<Armor>,
    pub feet: Option<Armor>,
    pub charm: Option<Charm>,
}

/// Equipped gear plus the totals derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunter {
    base: BaseStats,
    #[serde(skip)]
    rules: GearRules,

    // === Equipment ===
    weapon: Option<Weapon>,
    head: Option<Armor>,
    chest: Option<Armor>,
    arms: Option<Armor>,
    legs: Option<Armor>,
    feet: Option<Armor>,
    charm: Option<Charm>,

    // === Derived ===
    #[serde(flatten)]
    aggregate: Aggregate,
}

impl Default for Hunter {
    fn default() -> Self {
        Self::new(BaseStats::default())
    }
}

impl Hunter {
    /// Create a hunter with nothing equipped under the default rules
    pub fn new(base: BaseStats) -> Self {
        Self::with_rules(base, GearRules::default())
    }

    /// Create a hunter whose sockets and decorations follow `rules`
    pub fn with_rules(base: BaseStats, rules: GearRules) -> Self {
        Hunter {
            base,
            rules,
            weapon: None,
            head: None,
            chest: None,
            arms: None,
            legs: None,
            feet: None,
            charm: None,
            aggregate: Aggregate::from_base(&base),
        }
    }

    /// Create a hunter from configured base stats and rules
    pub fn from_config(config: &HunterConfig) -> Self {
        Self::with_rules(config.base, config.rules)
    }

    /// Create a hunter wearing an initial loadout
    ///
    /// Each piece goes through the regular equip path, so the ledgers are
    /// summed exactly as if the caller had equipped them one by one.
    pub fn with_loadout(base: BaseStats, loadout: Loadout) -> GearResult<Self> {
        let mut hunter = Self::new(base);

        hunter.set_weapon(loadout.weapon)?;
        for (location, armor) in [
            (ArmorType::Head, loadout.head),
            (ArmorType::Chest, loadout.chest),
            (ArmorType::Arms, loadout.arms),
            (ArmorType::Legs, loadout.legs),
            (ArmorType::Feet, loadout.feet),
        ] {
            if let Some(armor) = armor {
                hunter.add_armor(location, armor)?;
            }
        }
        hunter.set_charm(loadout.charm)?;

        Ok(hunter)
    }

    // === Reads ===

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn rules(&self) -> &GearRules {
        &self.rules
    }

    pub fn attack(&self) -> i32 {
        self.aggregate.attack
    }

    pub fn defense(&self) -> i32 {
        self.aggregate.defense
    }

    pub fn resistances(&self) -> ElementResistances {
        self.aggregate.resistances
    }

    /// Active skills summed over every equipped source
    pub fn skills(&self) -> &SkillLedger {
        &self.aggregate.skills
    }

    pub fn skill_limit_overrides(&self) -> &OverrideLedger {
        &self.aggregate.skill_limit_overrides
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn armor(&self, location: ArmorType) -> Option<&Armor> {
        self.armor_slot(location).as_ref()
    }

    pub fn charm(&self) -> Option<&Charm> {
        self.charm.as_ref()
    }

    /// Cap of an active skill after activated overrides
    pub fn skill_max_level(&self, name: &str) -> Option<u32> {
        self.aggregate
            .skills
            .get(name)
            .map(|skill| resolve_max_level(skill, &self.aggregate.skill_limit_overrides))
    }

    /// Stacked level of a skill clamped to its effective cap
    pub fn effective_skill_level(&self, name: &str) -> u32 {
        match self.aggregate.skills.get(name) {
            Some(skill) => {
                let cap = resolve_max_level(skill, &self.aggregate.skill_limit_overrides);
                skill.level.min(cap)
            }
            None => 0,
        }
    }

    /// Rebuild the aggregate from scratch and compare with the running one
    pub fn is_consistent(&self) -> bool {
        let mut total = StatAccumulator::new();

        if let Some(weapon) = &self.weapon {
            total.merge(weapon.contribution());
        }
        for &location in ArmorType::all() {
            if let Some(armor) = self.armor_slot(location) {
                total.merge(armor.contribution());
            }
        }
        if let Some(charm) = &self.charm {
            total.merge(charm.contribution());
        }

        let mut rebuilt = Aggregate::from_base(&self.base);
        rebuilt.apply(&total).is_ok() && rebuilt == self.aggregate
    }

    // === Armor ===

    /// Equip or clear an armor location, returning the displaced piece
    pub fn set_armor(
        &mut self,
        location: ArmorType,
        armor: Option<Armor>,
    ) -> GearResult<Option<Armor>> {
        match armor {
            Some(armor) => self.add_armor(location, armor),
            None => self.remove_armor(location),
        }
    }

    /// Unequip the armor at a location. No-op when the slot is empty.
    pub fn remove_armor(&mut self, location: ArmorType) -> GearResult<Option<Armor>> {
        let staged = self.stage_swap(self.armor_slot(location).as_ref(), None)?;
        self.aggregate = staged;

        let removed = self.armor_slot_mut(location).take();
        if let Some(ref armor) = removed {
            tracing::debug!(slot = %location, armor = %armor.name, defense = self.defense(), "removed armor");
        }
        Ok(removed)
    }

    /// Equip armor at its location, swapping out any current piece
    pub fn add_armor(&mut self, location: ArmorType, armor: Armor) -> GearResult<Option<Armor>> {
        if armor.armor_type != location {
            return Err(GearError::SlotTypeMismatch {
                expected: location,
                found: armor.armor_type,
            });
        }
        gear::check_sockets(armor.decoration_slots(), &self.rules)?;
        let slot = EquipmentSlot::Armor(location);
        self.ensure_unsocketed(armor.decorations(), |s, _| s == slot)?;

        let staged = self.stage_swap(self.armor_slot(location).as_ref(), Some(&armor))?;
        self.aggregate = staged;

        tracing::debug!(slot = %location, armor = %armor.name, defense = self.defense(), "equipped armor");
        Ok(self.armor_slot_mut(location).replace(armor))
    }

    // === Weapon & Charm ===

    /// Equip or clear the weapon, returning the displaced one
    pub fn set_weapon(&mut self, weapon: Option<Weapon>) -> GearResult<Option<Weapon>> {
        if let Some(ref weapon) = weapon {
            gear::check_sockets(weapon.decoration_slots(), &self.rules)?;
            self.ensure_unsocketed(weapon.decorations(), |s, _| s == EquipmentSlot::Weapon)?;
        }

        let staged = self.stage_swap(self.weapon.as_ref(), weapon.as_ref())?;
        self.aggregate = staged;

        match weapon {
            Some(ref w) => tracing::debug!(weapon = %w.name, attack = self.attack(), "equipped weapon"),
            None => tracing::debug!(attack = self.attack(), "cleared weapon"),
        }
        Ok(std::mem::replace(&mut self.weapon, weapon))
    }

    /// Equip or clear the charm, returning the displaced one
    pub fn set_charm(&mut self, charm: Option<Charm>) -> GearResult<Option<Charm>> {
        let staged = self.stage_swap(self.charm.as_ref(), charm.as_ref())?;
        self.aggregate = staged;

        match charm {
            Some(ref c) => tracing::debug!(charm = %c.name, skill = %c.skill.name, "equipped charm"),
            None => tracing::debug!("cleared charm"),
        }
        Ok(std::mem::replace(&mut self.charm, charm))
    }

    // === Decorations ===

    /// Socket or clear a decoration on worn gear, returning the displaced one
    ///
    /// The old occupant's skills are released and the new occupant's skills
    /// accumulated as one transaction.
    pub fn set_decoration(
        &mut self,
        slot: impl Into<EquipmentSlot>,
        index: usize,
        decoration: Option<Arc<Decoration>>,
    ) -> GearResult<Option<Arc<Decoration>>> {
        let slot = slot.into();
        let socket = gear::slot_at(self.sockets(slot)?, index)?;

        if let Some(ref new) = decoration {
            new.check_rules(&self.rules)?;
            socket.check(new)?;
            self.ensure_unsocketed(std::iter::once(new), |s, i| s == slot && i == index)?;
        }

        let previous = socket.occupant().cloned();
        let staged = self.stage_swap(previous.as_deref(), decoration.as_deref())?;

        let name = decoration.as_ref().map(|d| d.name().to_string());
        let displaced = match slot {
            EquipmentSlot::Weapon => self.weapon.as_mut().map(|w| w.set_decoration(index, decoration)),
            EquipmentSlot::Armor(location) => self
                .armor_slot_mut(location)
                .as_mut()
                .map(|a| a.set_decoration(index, decoration)),
            EquipmentSlot::Charm => None,
        }
        .ok_or(GearError::MissingEquipmentSlot(slot))??;
        self.aggregate = staged;

        tracing::debug!(%slot, index, decoration = ?name, "set decoration");
        Ok(displaced)
    }

    // === Internals ===

    fn armor_slot(&self, location: ArmorType) -> &Option<Armor> {
        match location {
            ArmorType::Head => &self.head,
            ArmorType::Chest => &self.chest,
            ArmorType::Arms => &self.arms,
            ArmorType::Legs => &self.legs,
            ArmorType::Feet => &self.feet,
        }
    }

    fn armor_slot_mut(&mut self, location: ArmorType) -> &mut Option<Armor> {
        match location {
            ArmorType::Head => &mut self.head,
            ArmorType::Chest => &mut self.chest,
            ArmorType::Arms => &mut self.arms,
            ArmorType::Legs => &mut self.legs,
            ArmorType::Feet => &mut self.feet,
        }
    }

    /// Sockets of the gear worn in a slot
    fn sockets(&self, slot: EquipmentSlot) -> GearResult<&[DecorationSlot]> {
        let sockets = match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref().map(|w| w.decoration_slots()),
            EquipmentSlot::Armor(location) => self.armor(location).map(|a| a.decoration_slots()),
            // charms have no sockets
            EquipmentSlot::Charm => self.charm.as_ref().map(|_| <&[DecorationSlot]>::default()),
        };
        sockets.ok_or(GearError::MissingEquipmentSlot(slot))
    }

    /// Every socket on worn gear with its position
    fn all_sockets(&self) -> impl Iterator<Item = (EquipmentSlot, usize, &DecorationSlot)> {
        let weapon = self.weapon.iter().flat_map(|w| {
            w.decoration_slots()
                .iter()
                .enumerate()
                .map(|(i, socket)| (EquipmentSlot::Weapon, i, socket))
        });
        let armor = ArmorType::all().iter().flat_map(move |&location| {
            self.armor_slot(location).iter().flat_map(move |a| {
                a.decoration_slots()
                    .iter()
                    .enumerate()
                    .map(move |(i, socket)| (EquipmentSlot::Armor(location), i, socket))
            })
        });
        weapon.chain(armor)
    }

    /// Reject decorations that already sit in a socket this hunter wears
    ///
    /// Sockets for which `replaced` returns true are about to be emptied and
    /// do not count. Duplicates within `incoming` are rejected too.
    fn ensure_unsocketed<'a>(
        &self,
        incoming: impl Iterator<Item = &'a Arc<Decoration>>,
        replaced: impl Fn(EquipmentSlot, usize) -> bool,
    ) -> GearResult<()> {
        let incoming: Vec<&Arc<Decoration>> = incoming.collect();

        for (n, decoration) in incoming.iter().enumerate() {
            let duplicated = incoming[..n].iter().any(|other| Arc::ptr_eq(*other, *decoration));
            let worn = self.all_sockets().any(|(slot, index, socket)| {
                !replaced(slot, index)
                    && socket.occupant().is_some_and(|o| Arc::ptr_eq(o, *decoration))
            });
            if duplicated || worn {
                return Err(GearError::DecorationAlreadySocketed);
            }
        }
        Ok(())
    }

    /// Aggregate after swapping one source for another, without committing
    fn stage_swap<S: StatSource>(
        &self,
        outgoing: Option<&S>,
        incoming: Option<&S>,
    ) -> GearResult<Aggregate> {
        let mut staged = self.aggregate.clone();
        if let Some(outgoing) = outgoing {
            staged.revert(&outgoing.contribution())?;
        }
        if let Some(incoming) = incoming {
            staged.apply(&incoming.contribution())?;
        }
        Ok(staged)
    }
}
