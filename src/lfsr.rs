//! Lfsr: linear-feedback shift register keystream source.
//!
//! Implements the atomic unit of the cipher. Each register holds an
//! ordered fixed-length sequence of single-bit values and advances one
//! bit at a time under an XOR feedback of configurable tap positions.
//!
//! Orientation: index 0 is the end the feedback bit enters (the newest
//! bit); index `size - 1` is the output end. Tap positions are counted
//! from the output end, so tap `t` reads the element at `size - 1 - t`.
//! Integer seeds are converted to this representation at construction
//! only — the feedback loop itself never leaves the bit sequence.

use std::collections::HashSet;

use crate::error::CssCryptError;

/// Policy used by [`Lfsr::check_period_with`] to decide when a state
/// repetition counts as a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Track every visited state and flag any repetition.
    ///
    /// This is the only method that is sound for an arbitrary
    /// deterministic state machine, whose cycle does not need to pass
    /// through the starting state. Default.
    #[default]
    Strict,
    /// Compare each visited state against the starting state only.
    ///
    /// Cheaper (constant memory) but under-detects cycles that loop
    /// without revisiting the start. Kept as a documented alternative
    /// for callers that need the constant-memory behavior.
    SeedOnly,
}

/// Outcome of a period check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodOutcome {
    /// The register visits every nonzero state before repeating.
    FullPeriod,
    /// A state repeated before the full period was reached.
    ShortCycle {
        /// Number of advances at which the first duplicate appeared.
        iteration: u64,
        /// The repeated state, newest bit first.
        state: Vec<u8>,
    },
}

impl PeriodOutcome {
    /// Returns `true` if the register completed a full period.
    pub fn is_full_period(&self) -> bool {
        matches!(self, PeriodOutcome::FullPeriod)
    }
}

/// Linear-feedback shift register with a configurable tap set.
///
/// The register advances in Fibonacci style: the output bit leaves at
/// the output end, the feedback bit (output XOR tap bits) enters at the
/// opposite end, and the length never changes. For a fixed seed and tap
/// set the produced bit sequence is fully deterministic.
///
/// # Examples
///
/// ```
/// use csscrypt::Lfsr;
///
/// // Seed written newest-bit first; taps counted from the output end.
/// let mut lfsr = Lfsr::new(8, &[1, 0, 0, 1, 0, 1, 1, 0], &[2, 3, 4]).unwrap();
/// assert_eq!(lfsr.advance(), 0);
/// assert_eq!(lfsr.iterations(), 1);
///
/// lfsr.reset();
/// assert_eq!(lfsr.iterations(), 0);
/// ```
#[derive(Debug)]
pub struct Lfsr {
    size: usize,
    seed: Vec<u8>,
    taps: Vec<usize>,
    state: Vec<u8>,
    last_output: Option<u8>,
    iterations: u64,
}

impl Lfsr {
    /// Creates a register from explicit seed bits.
    ///
    /// Duplicate tap positions are collapsed and tap 0 is dropped: the
    /// output bit already participates in the feedback, so a tap on it
    /// would cancel itself out.
    ///
    /// # Parameters
    /// - `size`: Number of bits in the register (≥ 1).
    /// - `seed`: `size` values of 0 or 1, newest bit first. At least
    ///   one bit must be 1 — the all-zero state is a fixed point.
    /// - `taps`: Tap positions in `[0, size - 1]`, counted from the
    ///   output end.
    ///
    /// # Errors
    /// - [`CssCryptError::SizeMismatch`] if `seed.len() != size`.
    /// - [`CssCryptError::InvalidSeed`] if the seed is all-zero or
    ///   contains values other than 0 and 1.
    /// - [`CssCryptError::InvalidTaps`] if a tap position is ≥ `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use csscrypt::Lfsr;
    ///
    /// assert!(Lfsr::new(4, &[0, 0, 0, 0], &[]).is_err()); // all-zero seed
    /// assert!(Lfsr::new(4, &[1, 0, 0, 0], &[4]).is_err()); // tap out of range
    /// ```
    pub fn new(size: usize, seed: &[u8], taps: &[usize]) -> Result<Self, CssCryptError> {
        if seed.len() != size {
            return Err(CssCryptError::SizeMismatch);
        }
        if seed.iter().any(|&bit| bit > 1) || !seed.contains(&1) {
            return Err(CssCryptError::InvalidSeed);
        }
        if taps.iter().any(|&tap| tap >= size) {
            return Err(CssCryptError::InvalidTaps);
        }
        let mut taps: Vec<usize> = taps.iter().copied().filter(|&tap| tap != 0).collect();
        taps.sort_unstable();
        taps.dedup();

        Ok(Lfsr {
            size,
            seed: seed.to_vec(),
            taps,
            state: seed.to_vec(),
            last_output: None,
            iterations: 0,
        })
    }

    /// Creates a register from an integer seed.
    ///
    /// Bit `t` of `seed` maps to the element at `size - 1 - t`, so bit
    /// 0 of the integer is the output end of the register.
    ///
    /// # Parameters
    /// - `size`: Number of bits in the register (1..=64).
    /// - `seed`: Nonzero seed value that fits in `size` bits.
    /// - `taps`: Tap positions in `[0, size - 1]`, counted from the
    ///   output end.
    ///
    /// # Errors
    /// - [`CssCryptError::SizeMismatch`] if `size` is 0 or above 64.
    /// - [`CssCryptError::InvalidSeed`] if `seed` is zero or wider
    ///   than `size` bits.
    /// - [`CssCryptError::InvalidTaps`] if a tap position is ≥ `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use csscrypt::Lfsr;
    ///
    /// let lfsr = Lfsr::from_value(17, 1 << 16, &[14, 0]).unwrap();
    /// assert_eq!(lfsr.size(), 17);
    /// assert_eq!(lfsr.taps(), &[14]); // tap 0 is dropped
    ///
    /// assert!(Lfsr::from_value(8, 0, &[]).is_err()); // zero seed
    /// ```
    pub fn from_value(size: usize, seed: u64, taps: &[usize]) -> Result<Self, CssCryptError> {
        if !(1..=64).contains(&size) {
            return Err(CssCryptError::SizeMismatch);
        }
        if size < 64 && (seed >> size) != 0 {
            return Err(CssCryptError::InvalidSeed);
        }
        let bits: Vec<u8> = (0..size).rev().map(|t| ((seed >> t) & 1) as u8).collect();
        Self::new(size, &bits, taps)
    }

    /// Advances the register one step and returns the output bit.
    ///
    /// The bit at the output end is emitted, the feedback bit (output
    /// XOR tap bits) enters at index 0, and every other bit moves one
    /// position toward the output end. Always succeeds.
    pub fn advance(&mut self) -> u8 {
        let output = self.state[self.size - 1];
        let mut feedback = output;
        for &tap in &self.taps {
            feedback ^= self.state[self.size - 1 - tap];
        }
        self.state.rotate_right(1);
        self.state[0] = feedback;
        self.last_output = Some(output);
        self.iterations += 1;
        output
    }

    /// Restores the seed state, clears the last output, and zeroes the
    /// iteration counter.
    pub fn reset(&mut self) {
        self.state.copy_from_slice(&self.seed);
        self.last_output = None;
        self.iterations = 0;
    }

    /// Checks whether the register completes a full period, using the
    /// [`CyclePolicy::Strict`] policy.
    ///
    /// A register of `size` bits has `2^size − 1` nonzero states; a
    /// full period visits all of them before repeating. The register
    /// is advanced at most `2^size − 2` times and is restored to its
    /// prior state, last output, and iteration count before returning,
    /// so interleaving this check with keystream generation does not
    /// perturb the keystream.
    ///
    /// Strict tracking stores every visited state; memory use is
    /// proportional to the period, so treat this as an offline
    /// diagnostic, never part of the encode/decode path.
    ///
    /// # Examples
    ///
    /// ```
    /// use csscrypt::Lfsr;
    ///
    /// let mut lfsr = Lfsr::new(8, &[1, 0, 0, 1, 0, 1, 1, 0], &[2, 3, 4]).unwrap();
    /// assert!(lfsr.check_period().is_full_period());
    /// ```
    pub fn check_period(&mut self) -> PeriodOutcome {
        self.check_period_with(CyclePolicy::Strict)
    }

    /// Checks whether the register completes a full period under the
    /// given policy.
    ///
    /// # Parameters
    /// - `policy`: How state repetitions are detected. See
    ///   [`CyclePolicy`] for the soundness trade-off.
    ///
    /// # Returns
    /// [`PeriodOutcome::FullPeriod`], or
    /// [`PeriodOutcome::ShortCycle`] with the advance count at which
    /// the first duplicate appeared and the repeated state.
    pub fn check_period_with(&mut self, policy: CyclePolicy) -> PeriodOutcome {
        let saved_state = self.state.clone();
        let saved_output = self.last_output;
        let saved_iterations = self.iterations;

        let mut visited = HashSet::new();
        if policy == CyclePolicy::Strict {
            visited.insert(self.state.clone());
        }

        let mut outcome = PeriodOutcome::FullPeriod;
        for iteration in 1..=Self::period_budget(self.size) {
            self.advance();
            let repeated = match policy {
                CyclePolicy::Strict => !visited.insert(self.state.clone()),
                CyclePolicy::SeedOnly => self.state == saved_state,
            };
            if repeated {
                outcome = PeriodOutcome::ShortCycle {
                    iteration,
                    state: self.state.clone(),
                };
                break;
            }
        }

        self.state.copy_from_slice(&saved_state);
        self.last_output = saved_output;
        self.iterations = saved_iterations;
        outcome
    }

    /// Maximum advances needed to distinguish a maximal-length
    /// register: after `2^size − 2` duplicate-free advances all
    /// `2^size − 1` nonzero states have been visited.
    fn period_budget(size: usize) -> u64 {
        match 1u128.checked_shl(size as u32) {
            Some(states) => u64::try_from(states.saturating_sub(2)).unwrap_or(u64::MAX),
            None => u64::MAX,
        }
    }

    // --- Getters ---

    /// Returns the number of bits in the register.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the effective tap positions, sorted, without duplicates
    /// or tap 0.
    pub fn taps(&self) -> &[usize] {
        &self.taps
    }

    /// Returns the current state, newest bit first.
    pub fn state(&self) -> &[u8] {
        &self.state
    }

    /// Returns the last emitted bit, or `None` before the first
    /// advance and after a reset.
    pub fn last_output(&self) -> Option<u8> {
        self.last_output
    }

    /// Returns the number of advances since construction or the last
    /// reset.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Drop for Lfsr {
    /// Clears the register state and seed on drop.
    fn drop(&mut self) {
        self.seed.fill(0);
        self.state.fill(0);
        self.last_output = None;
        self.iterations = 0;
    }
}
