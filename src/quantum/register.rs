//! Two-qubit state vector.
//!
//! Basis index `i` stores qubit `k` in bit `k`, so index `0b10` is
//! "qubit 0 = 0, qubit 1 = 1". Each zone of a pair owns one qubit.

use std::f64::consts::FRAC_1_SQRT_2;

use super::Amplitude;
use crate::core::GameRng;

/// Number of qubits in a register.
pub const QUBITS: usize = 2;

const STATES: usize = 1 << QUBITS;

/// State vector for two entangled two-outcome properties.
#[derive(Clone, Debug, PartialEq)]
pub struct QubitRegister {
    amplitudes: [Amplitude; STATES],
}

impl QubitRegister {
    /// Register in a definite basis state, `values[k]` being qubit `k`.
    #[must_use]
    pub fn from_basis(values: [u8; QUBITS]) -> Self {
        let mut amplitudes = [Amplitude::ZERO; STATES];
        let index = values
            .iter()
            .enumerate()
            .fold(0, |acc, (k, &v)| acc | (usize::from(v & 1) << k));
        amplitudes[index] = Amplitude::ONE;
        Self { amplitudes }
    }

    /// Index pairs `(i, j)` differing only in `qubit`, with the qubit 0 at `i`.
    fn pairs(qubit: usize) -> impl Iterator<Item = (usize, usize)> {
        let mask = 1 << qubit;
        (0..STATES)
            .filter(move |i| i & mask == 0)
            .map(move |i| (i, i | mask))
    }

    /// Mixing transform: spreads a definite value into an even superposition.
    pub fn hadamard(&mut self, qubit: usize) {
        for (i, j) in Self::pairs(qubit) {
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = (a + b).scale(FRAC_1_SQRT_2);
            self.amplitudes[j] = (a - b).scale(FRAC_1_SQRT_2);
        }
    }

    /// Flip a qubit's value.
    pub fn cycle(&mut self, qubit: usize) {
        for (i, j) in Self::pairs(qubit) {
            self.amplitudes.swap(i, j);
        }
    }

    /// Rotate the phase of the qubit's `0` component by `angle` radians.
    pub fn phase_rotate(&mut self, qubit: usize, angle: f64) {
        let rotation = Amplitude::phase(angle);
        for (i, _) in Self::pairs(qubit) {
            self.amplitudes[i] = self.amplitudes[i] * rotation;
        }
    }

    /// Cross-coupling: flip `target` wherever `control` is 1.
    pub fn controlled_cycle(&mut self, control: usize, target: usize) {
        debug_assert_ne!(control, target);
        let control_mask = 1 << control;
        for (i, j) in Self::pairs(target) {
            if i & control_mask != 0 {
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Probability that `qubit` reads `value`.
    #[must_use]
    pub fn probability(&self, qubit: usize, value: u8) -> f64 {
        let want = usize::from(value & 1);
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| (i >> qubit) & 1 == want)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Probability of a full basis state.
    #[must_use]
    pub fn basis_probability(&self, values: [u8; QUBITS]) -> f64 {
        let index = values
            .iter()
            .enumerate()
            .fold(0, |acc, (k, &v)| acc | (usize::from(v & 1) << k));
        self.amplitudes[index].norm_sqr()
    }

    /// Total probability mass. Stays 1 up to rounding.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Collapse `qubit` to a definite value sampled from its distribution.
    ///
    /// Returns the observed value. The surviving amplitudes are renormalized.
    pub fn measure(&mut self, qubit: usize, rng: &mut GameRng) -> u8 {
        let p_zero = self.probability(qubit, 0);
        let mut outcome = if rng.gen_unit() < p_zero { 0 } else { 1 };
        let mut kept = self.probability(qubit, outcome);
        if kept <= 0.0 {
            // rounding put the draw on an empty branch
            outcome ^= 1;
            kept = self.probability(qubit, outcome);
        }

        let factor = 1.0 / kept.sqrt();
        for (i, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if (i >> qubit) & 1 == usize::from(outcome) {
                *amplitude = amplitude.scale(factor);
            } else {
                *amplitude = Amplitude::ZERO;
            }
        }
        outcome
    }
}
