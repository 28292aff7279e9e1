/*
 * Pulse-skip decision core for the two-phase charge pump.
 *
 * This crate is pure logic so the regulation behavior can be tested on the
 * host. The firmware crate owns the pins and the ADC; this crate only
 * answers one question per loop iteration: pump the next phase, or hold.
 *
 * ASSUMPTIONS:
 * 1. The caller feeds the most recent feedback sample on every iteration.
 * 2. Exactly one pulse is actuated per Some(_) returned from step().
 * 3. Nothing outside step() mutates the phase state.
 */

#![cfg_attr(not(test), no_std)]

/// One of the two pump drive phases. Each phase pushes charge through a
/// different diode pair of the external multiplier ladder, so the drive
/// must alternate strictly between them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    A,
    B,
}

impl Phase {
    pub const fn other(self) -> Phase {
        match self {
            Phase::A => Phase::B,
            Phase::B => Phase::A,
        }
    }
}

/// Bang-bang pulse-skip state machine.
///
/// Pumping happens only strictly below the threshold; a sample at or above
/// it holds the outputs as-is. Phase advances only when a pulse is actually
/// emitted. Skipped cycles must never advance phase or the alternation
/// would desync from the ladder's charge/discharge timing.
pub struct PulseSkipRegulator {
    threshold: u8,
    phase: Phase,
}

impl PulseSkipRegulator {
    pub const fn new(threshold: u8, initial_phase: Phase) -> PulseSkipRegulator {
        PulseSkipRegulator {
            threshold,
            phase: initial_phase,
        }
    }

    /// Decide one loop iteration from the latest feedback sample.
    ///
    /// Returns the phase to drive for this pulse, or None to hold. The
    /// comparison is strict less-than: equality falls into the hold branch,
    /// which together with the load bleeding the output node down gives
    /// one-sided bang-bang regulation.
    pub fn step(&mut self, sample: u8) -> Option<Phase> {
        if sample < self.threshold {
            let fired = self.phase;
            self.phase = self.phase.other();
            Some(fired)
        } else {
            None
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}
