//! Closed-form Drude and Lorentzian dielectric terms.
//!
//! All functions take the photon energy `e` in eV. None of them validate
//! their inputs: zero damping or `e = 0` in the Drude imaginary part yield
//! infinities or NaN under IEEE-754 arithmetic.

/// Real part of the Drude term: `einf - ep² / (e² + g²)`.
#[inline]
pub fn drude_real(e: f64, einf: f64, ep: f64, g: f64) -> f64 {
    einf - (ep * ep) / (e * e + g * g)
}

/// Imaginary part of the Drude term: `ep²·g·e / (e⁴ + g²·e²)`.
///
/// 0/0 at `e = 0`.
#[inline]
pub fn drude_imag(e: f64, ep: f64, g: f64) -> f64 {
    let quad_e = e * e;
    (ep * ep * g * e) / (quad_e * quad_e + g * g * quad_e)
}

/// Real part of a Lorentzian term.
///
/// With `δ = ek² - e²`: `fk·ek²·δ / (δ² + gk²·e²)`. Exactly zero at `e = ek`.
#[inline]
pub fn lorentzian_real(e: f64, ek: f64, fk: f64, gk: f64) -> f64 {
    let quad_e = e * e;
    let quad_ek = ek * ek;
    let delta = quad_ek - quad_e;

    (fk * quad_ek * delta) / (delta * delta + gk * gk * quad_e)
}

/// Imaginary part (absorption line shape) of a Lorentzian term:
/// `fk·ek²·gk·e / (gk²·e² + δ²)`.
#[inline]
pub fn lorentzian_imag(e: f64, ek: f64, fk: f64, gk: f64) -> f64 {
    let quad_e = e * e;
    let quad_ek = ek * ek;
    let delta = quad_ek - quad_e;

    (fk * quad_ek * gk * e) / (gk * gk * quad_e + delta * delta)
}
