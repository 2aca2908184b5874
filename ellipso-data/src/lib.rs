#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One Lorentzian (bound-resonance) oscillator term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lorentzian {
    /// Resonance energy (eV)
    pub ek: f64,
    /// Oscillator strength
    pub fk: f64,
    /// Broadening (eV)
    pub gk: f64,
}

impl Lorentzian {
    pub const fn new(ek: f64, fk: f64, gk: f64) -> Self {
        Self { ek, fk, gk }
    }
}

/// Drude-Lorentz parameter set: one Drude term plus an ordered list of
/// Lorentzian terms.
///
/// `g` and every `gk` are expected to be non-zero. Nothing here enforces
/// that; see `ellipso::validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// High-frequency dielectric constant
    pub einf: f64,
    /// Drude amplitude (plasma energy, eV)
    pub ep: f64,
    /// Drude damping (eV)
    pub g: f64,
    pub lorentzians: Vec<Lorentzian>,
}

impl ModelParameters {
    /// A Drude-only parameter set.
    pub const fn new(einf: f64, ep: f64, g: f64) -> Self {
        Self {
            einf,
            ep,
            g,
            lorentzians: Vec::new(),
        }
    }

    pub fn with_lorentzian(mut self, ek: f64, fk: f64, gk: f64) -> Self {
        self.lorentzians.push(Lorentzian::new(ek, fk, gk));
        self
    }

    pub fn push_lorentzian(&mut self, term: Lorentzian) {
        self.lorentzians.push(term);
    }

    pub fn is_drude_only(&self) -> bool {
        self.lorentzians.is_empty()
    }
}
