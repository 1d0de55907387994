//! Prelude module for convenient imports
//!
//! ```rust
//! use gear_core::prelude::*;
//! ```

// Aggregate
pub use crate::hunter::{BaseStats, Hunter, Loadout};

// Gear
pub use crate::gear::{Armor, Charm, Decoration, DecorationSlot, Weapon};

// Skills
pub use crate::skill::{Skill, SkillMaxLevelOverride};

// Types
pub use crate::types::{ArmorType, Element, ElementResistances, EquipmentSlot, StatusAilment};

// Errors
pub use crate::error::{GearError, GearResult};
