//! Gear items handed to the hunter by a catalog

mod armor;
mod charm;
mod decoration;
mod weapon;

pub use armor::Armor;
pub use charm::Charm;
pub use decoration::{Decoration, DecorationSlot};
pub use weapon::Weapon;

pub(crate) use decoration::{check_sockets, slot_at};
