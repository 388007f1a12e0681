//! Wheel state.
//!
//! Three counters determine the shift applied to each letter. They evolve once
//! per processed character and are restored to their initial values at the
//! end of every line.
//!
//! # Invariants
//!
//! - After [`WheelState::reset`], the current wheels equal the initial wheels
//! - [`Wheels::offset`] is always in `0..26`
//! - `w0` is in `1..=8` after any advance, whatever its initial value
//!
//! # Growth
//!
//! `w1` doubles on every even count and so grows without bound on long lines.
//! It stays exact while it fits in an `i64`. Just before an operation would
//! overflow, it is replaced by its residue modulo 26. Doubling and decrementing
//! both commute with reduction modulo 26, and only the residue reaches
//! [`Wheels::offset`], so offsets are unaffected.

use crate::substitution::ALPHABET_SIZE;

/// `w0` cycles through `1..=WHEEL0_PERIOD`.
const WHEEL0_PERIOD: i64 = 8;

/// Snapshot of the three wheel counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wheels {
    /// Fast wheel, cycles 1..=8.
    pub w0: i64,
    /// Doubling/decrementing wheel.
    pub w1: i64,
    /// Wheel set from the substitution count (0, 5 or 10).
    pub w2: i64,
}

impl Wheels {
    /// Create a wheel snapshot.
    pub const fn new(w0: i64, w1: i64, w2: i64) -> Self {
        Self { w0, w1, w2 }
    }

    /// Shift derived from the wheels: `(2*w0 - w1 + w2) mod 26`, floor-mod.
    pub fn offset(&self) -> i64 {
        let [w0, w1, w2] = [self.w0, self.w1, self.w2].map(|w| w.rem_euclid(ALPHABET_SIZE));
        (2 * w0 - w1 + w2).rem_euclid(ALPHABET_SIZE)
    }

    /// Wheels after one character, given the number of letters substituted
    /// so far in the line.
    #[must_use]
    pub fn advanced(self, count: usize) -> Self {
        let w0 = self.w0.rem_euclid(WHEEL0_PERIOD) + 1;

        let w1 = if count.is_multiple_of(2) { double(self.w1) } else { decrement(self.w1) };

        let w2 = if count.is_multiple_of(10) {
            10
        } else if count.is_multiple_of(3) {
            5
        } else {
            0
        };

        Self { w0, w1, w2 }
    }
}

impl From<[i64; 3]> for Wheels {
    fn from([w0, w1, w2]: [i64; 3]) -> Self {
        Self { w0, w1, w2 }
    }
}

impl From<Wheels> for [i64; 3] {
    fn from(wheels: Wheels) -> Self {
        [wheels.w0, wheels.w1, wheels.w2]
    }
}

fn fold(w: i64) -> i64 {
    w.rem_euclid(ALPHABET_SIZE)
}

fn double(w: i64) -> i64 {
    w.checked_mul(2).unwrap_or_else(|| fold(w) * 2)
}

fn decrement(w: i64) -> i64 {
    w.checked_sub(1).unwrap_or_else(|| fold(w) - 1)
}

/// Current wheels plus the initial snapshot they reset to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelState {
    initial: Wheels,
    current: Wheels,
}

impl WheelState {
    /// Start at `initial`.
    pub fn new(initial: Wheels) -> Self {
        Self { initial, current: initial }
    }

    /// Current wheel values.
    pub fn current(&self) -> Wheels {
        self.current
    }

    /// Values restored by [`reset`](Self::reset).
    pub fn initial(&self) -> Wheels {
        self.initial
    }

    /// Shift for the current position.
    pub fn offset(&self) -> i64 {
        self.current.offset()
    }

    /// Advance all three wheels. `count` is the number of real letter
    /// substitutions so far in the line, not counting pass-through characters.
    pub fn advance(&mut self, count: usize) {
        self.current = self.current.advanced(count);
    }

    /// Restore the initial wheels.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Returns true if the wheels are at their initial position.
    pub fn is_at_initial(&self) -> bool {
        self.current == self.initial
    }
}
