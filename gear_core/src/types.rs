//! Core types shared by gear items and the hunter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Body location an armor piece is worn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    Head,
    Chest,
    Arms,
    Legs,
    Feet,
}

impl ArmorType {
    /// Get all armor locations
    pub fn all() -> &'static [ArmorType] {
        &[
            ArmorType::Head,
            ArmorType::Chest,
            ArmorType::Arms,
            ArmorType::Legs,
            ArmorType::Feet,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArmorType::Head => "head",
            ArmorType::Chest => "chest",
            ArmorType::Arms => "arms",
            ArmorType::Legs => "legs",
            ArmorType::Feet => "feet",
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Equipment slot on a hunter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor(ArmorType),
    Charm,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor(ArmorType::Head),
            EquipmentSlot::Armor(ArmorType::Chest),
            EquipmentSlot::Armor(ArmorType::Arms),
            EquipmentSlot::Armor(ArmorType::Legs),
            EquipmentSlot::Armor(ArmorType::Feet),
            EquipmentSlot::Charm,
        ]
    }
}

impl From<ArmorType> for EquipmentSlot {
    fn from(location: ArmorType) -> Self {
        EquipmentSlot::Armor(location)
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentSlot::Weapon => f.write_str("weapon"),
            EquipmentSlot::Armor(location) => location.fmt(f),
            EquipmentSlot::Charm => f.write_str("charm"),
        }
    }
}

/// Weapon element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Lightning,
    Ice,
    Dragon,
}

/// Status ailment a weapon can inflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAilment {
    Paralysis,
    Poison,
    Blast,
    Sleep,
}

/// Resistance to each element, used both as a gear delta and a running total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementResistances {
    pub fire: i32,
    pub water: i32,
    pub lightning: i32,
    pub ice: i32,
    pub dragon: i32,
}

impl ElementResistances {
    pub fn new(fire: i32, water: i32, lightning: i32, ice: i32, dragon: i32) -> Self {
        ElementResistances {
            fire,
            water,
            lightning,
            ice,
            dragon,
        }
    }

    /// Same value for every element
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value, value)
    }

    /// Resistance against a single element
    pub fn get(&self, element: Element) -> i32 {
        match element {
            Element::Fire => self.fire,
            Element::Water => self.water,
            Element::Lightning => self.lightning,
            Element::Ice => self.ice,
            Element::Dragon => self.dragon,
        }
    }
}

impl Add for ElementResistances {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ElementResistances {
            fire: self.fire + rhs.fire,
            water: self.water + rhs.water,
            lightning: self.lightning + rhs.lightning,
            ice: self.ice + rhs.ice,
            dragon: self.dragon + rhs.dragon,
        }
    }
}

impl Sub for ElementResistances {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for ElementResistances {
    type Output = Self;

    fn neg(self) -> Self {
        ElementResistances {
            fire: -self.fire,
            water: -self.water,
            lightning: -self.lightning,
            ice: -self.ice,
            dragon: -self.dragon,
        }
    }
}

impl AddAssign for ElementResistances {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ElementResistances {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistance_arithmetic() {
        let mut total = ElementResistances::new(1, -2, 3, 0, 5);
        let delta = ElementResistances::uniform(2);

        total += delta;
        assert_eq!(total, ElementResistances::new(3, 0, 5, 2, 7));

        total -= delta;
        assert_eq!(total, ElementResistances::new(1, -2, 3, 0, 5));
    }

    #[test]
    fn test_resistance_get() {
        let res = ElementResistances::new(1, 2, 3, 4, 5);
        assert_eq!(res.get(Element::Fire), 1);
        assert_eq!(res.get(Element::Dragon), 5);
    }

    #[test]
    fn test_slot_from_armor_type() {
        let slot: EquipmentSlot = ArmorType::Legs.into();
        assert_eq!(slot, EquipmentSlot::Armor(ArmorType::Legs));
        assert_eq!(slot.to_string(), "legs");
        assert_eq!(EquipmentSlot::all().len(), 7);
    }
}
