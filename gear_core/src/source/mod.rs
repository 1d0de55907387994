//! StatSource - Trait for anything that contributes stats to a hunter

mod accumulator;

pub use accumulator::StatAccumulator;

/// Trait for anything that contributes stats to a hunter
///
/// A source writes its whole contribution into a [`StatAccumulator`]. The
/// hunter applies that accumulator on equip and reverts the very same
/// accumulator on unequip, so additions and removals always pair up.
pub trait StatSource: Send + Sync {
    /// Identifier for this source, used in logs
    fn id(&self) -> &str;

    /// Write this source's stats and grants into the accumulator
    fn apply(&self, stats: &mut StatAccumulator);

    /// Collect this source's contribution on its own
    fn contribution(&self) -> StatAccumulator {
        let mut stats = StatAccumulator::new();
        self.apply(&mut stats);
        stats
    }
}
