//! Superposition of the Drude and Lorentzian terms.

use ellipso_data::{Lorentzian, ModelParameters};

use crate::oscillator::{drude_imag, drude_real, lorentzian_imag, lorentzian_real};

/// Total real permittivity ε1 at photon energy `e` (eV).
///
/// Lorentzian terms are summed in input order.
pub fn total_real(e: f64, params: &ModelParameters) -> f64 {
    let mut sum = drude_real(e, params.einf, params.ep, params.g);
    for term in &params.lorentzians {
        sum += lorentzian_real(e, term.ek, term.fk, term.gk);
    }
    sum
}

/// Total imaginary permittivity ε2 at photon energy `e` (eV).
pub fn total_imag(e: f64, params: &ModelParameters) -> f64 {
    let mut sum = drude_imag(e, params.ep, params.g);
    for term in &params.lorentzians {
        sum += lorentzian_imag(e, term.ek, term.fk, term.gk);
    }
    sum
}

/// Returns `(ε1, ε2)` at photon energy `e` (eV).
pub fn evaluate_permittivity(e: f64, params: &ModelParameters) -> (f64, f64) {
    (total_real(e, params), total_imag(e, params))
}

/// `(re, im)` of the Drude term alone.
pub fn drude_contribution(e: f64, params: &ModelParameters) -> (f64, f64) {
    (
        drude_real(e, params.einf, params.ep, params.g),
        drude_imag(e, params.ep, params.g),
    )
}

/// `(re, im)` of a single Lorentzian term.
pub fn lorentzian_contribution(e: f64, term: &Lorentzian) -> (f64, f64) {
    (
        lorentzian_real(e, term.ek, term.fk, term.gk),
        lorentzian_imag(e, term.ek, term.fk, term.gk),
    )
}

/// Complex permittivity ε = ε1 + iε2.
#[cfg(feature = "optics")]
pub fn permittivity(e: f64, params: &ModelParameters) -> num_complex::Complex64 {
    let (re, im) = evaluate_permittivity(e, params);
    num_complex::Complex64::new(re, im)
}
