//! Cascaded angular-momentum integrator
//!
//! The heading of a path is the first term of a fixed-arity vector of
//! angle derivatives. Each step, every term absorbs the one above it
//! scaled by the time step; the last term never changes. Small constant
//! jerk therefore winds the heading into slowly tightening curls.

use crate::io::configuration::{MOMENTUM_SEED_JERK, MOMENTUM_SEED_SPANS};
use rand::{Rng, rngs::StdRng};

/// Number of derivative terms tracked per path
pub const MOMENTUM_TERMS: usize = 4;

/// Angle, angular velocity, angular acceleration and jerk of a heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    terms: [f64; MOMENTUM_TERMS],
}

impl Momentum {
    /// Create a momentum vector from its terms
    pub const fn new(terms: [f64; MOMENTUM_TERMS]) -> Self {
        Self { terms }
    }

    /// The all-zero momentum vector (a straight heading)
    pub const fn zero() -> Self {
        Self::new([0.0; MOMENTUM_TERMS])
    }

    /// Draw a random momentum vector from the seeding distribution
    ///
    /// The angle, velocity and acceleration terms are uniform in
    /// progressively narrower spans; the jerk term is a small positive
    /// constant.
    pub fn seeded(rng: &mut StdRng) -> Self {
        let mut terms = [MOMENTUM_SEED_JERK; MOMENTUM_TERMS];
        for (term, span) in terms.iter_mut().zip(MOMENTUM_SEED_SPANS) {
            *term = (rng.random::<f64>() - 0.5) * span;
        }
        Self { terms }
    }

    /// Current heading angle in radians
    pub const fn heading(&self) -> f64 {
        self.terms[0]
    }

    /// Current angular velocity
    pub const fn turn_rate(&self) -> f64 {
        self.terms[1]
    }

    /// All derivative terms, lowest order first
    pub const fn terms(&self) -> [f64; MOMENTUM_TERMS] {
        self.terms
    }

    /// Advance every term by explicit Euler integration
    ///
    /// `terms[i] += terms[i + 1] * dt` for all but the last term.
    pub fn advance(&mut self, dt: f64) {
        for i in 0..MOMENTUM_TERMS - 1 {
            self.terms[i] = self.terms[i + 1].mul_add(dt, self.terms[i]);
        }
    }

    /// A copy with the three lowest-order terms independently sign
    /// flipped at random; the constant jerk term keeps its sign
    pub fn randomly_mirrored(&self, rng: &mut StdRng) -> Self {
        let mut terms = self.terms;
        for term in terms.iter_mut().take(MOMENTUM_TERMS - 1) {
            if rng.random_bool(0.5) {
                *term = -*term;
            }
        }
        Self { terms }
    }
}
