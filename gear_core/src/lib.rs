//! gear_core - Gear set aggregation for hunter build calculators
//!
//! This library provides:
//! - Hunter: Equipped gear with running stat totals and skill ledgers
//! - Gear items: Armor, Weapon, Charm and socketable Decorations
//! - Ledger: Stacked skill levels and skill-limit overrides
//! - Config: Base hunter stats and decoration rules from TOML

pub mod config;
pub mod error;
pub mod gear;
pub mod hunter;
pub mod prelude;
pub mod skill;
pub mod source;
pub mod types;

// Re-export core types for convenience
pub use config::{default_config, ConfigError, GearRules, HunterConfig};
pub use error::{GearError, GearResult, LedgerFault};
pub use gear::{Armor, Charm, Decoration, DecorationSlot, Weapon};
pub use hunter::{Aggregate, BaseStats, Hunter, Loadout};
pub use skill::{OverrideLedger, Skill, SkillLedger, SkillMaxLevelOverride};
pub use source::{StatAccumulator, StatSource};
pub use types::{ArmorType, Element, ElementResistances, EquipmentSlot, StatusAilment};
