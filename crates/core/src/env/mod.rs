//! Injected environment for the roster engine.
//!
//! The engine has no hidden dependencies on the outside world: everything it
//! needs beyond the state itself arrives through [`RosterEnv`]. Today that is
//! only randomness, kept behind a trait so tests can substitute a fixed
//! generator.

pub mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

/// Bundle of environment capabilities handed to the engine per execution.
#[derive(Clone, Copy)]
pub struct RosterEnv<'a> {
    rng: &'a dyn RngOracle,
}

impl<'a> RosterEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}
