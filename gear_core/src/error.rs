//! Errors raised while composing gear onto a hunter

use crate::types::{ArmorType, EquipmentSlot};
use std::fmt;
use thiserror::Error;

/// Gear composition error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GearError {
    #[error("Armor type {found} does not match the {expected} slot")]
    SlotTypeMismatch {
        expected: ArmorType,
        found: ArmorType,
    },
    #[error("No gear equipped in the {0} slot")]
    MissingEquipmentSlot(EquipmentSlot),
    #[error("Invalid decoration slot index {index} (gear has {slots} slots)")]
    InvalidDecorationSlotIndex { index: usize, slots: usize },
    #[error("Decoration level {decoration_level} is higher than slot level {slot_level}")]
    DecorationCapacityExceeded {
        decoration_level: u32,
        slot_level: u32,
    },
    #[error("Ledger entry '{key}' is inconsistent: {fault}")]
    LedgerInconsistency { key: String, fault: LedgerFault },
    #[error("Level {level} decoration cannot grant {skills} skills")]
    InvalidDecorationComposition { level: u32, skills: usize },
    #[error("Decoration level {level} is outside 1..={max}")]
    InvalidDecorationLevel { level: u32, max: u32 },
    #[error("Decoration slot level {level} is outside 1..={max}")]
    InvalidDecorationSlotLevel { level: u32, max: u32 },
    #[error("Decoration is already socketed in another slot")]
    DecorationAlreadySocketed,
}

/// What went wrong with a ledger release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFault {
    /// Released a key that was never accumulated
    MissingEntry,
    /// Released more than the entry holds
    Underflow { held: u32, released: u32 },
    /// Stacked level no longer fits in a `u32`
    Overflow { held: u32, added: u32 },
}

impl fmt::Display for LedgerFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerFault::MissingEntry => f.write_str("no entry to release"),
            LedgerFault::Underflow { held, released } => {
                write!(f, "releasing {} from a level of {}", released, held)
            }
            LedgerFault::Overflow { held, added } => {
                write!(f, "adding {} to a level of {} overflows", added, held)
            }
        }
    }
}

pub type GearResult<T> = Result<T, GearError>;
