//! WASM bindings for ellipso.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p ellipso-wasm
//! ```
//!
//! Lorentzian terms cross the boundary as a flat `[ek0, fk0, gk0, ek1, ...]` array.

use js_sys::{Array, Float64Array};
use wasm_bindgen::prelude::*;

use ellipso::spectrum::{permittivity_spectrum, reflectivity_spectrum};
use ellipso::{Lorentzian, ModelParameters, ReflectivityEngine};

fn to_js(e: ellipso::EllipsoError) -> JsError {
    JsError::new(&e.to_string())
}

fn model(einf: f64, ep: f64, g: f64, lorentzians: &[f64]) -> Result<ModelParameters, JsError> {
    if lorentzians.len() % 3 != 0 {
        return Err(JsError::new(&format!(
            "lorentzians must hold (ek, fk, gk) triples, got {} values",
            lorentzians.len()
        )));
    }
    let mut params = ModelParameters::new(einf, ep, g);
    for k in lorentzians.chunks_exact(3) {
        params.push_lorentzian(Lorentzian::new(k[0], k[1], k[2]));
    }
    Ok(params)
}

/// Interleave `(ε1, ε2)` pairs as `[ε1_0, ε2_0, ε1_1, ...]`.
fn flatten(pairs: &[(f64, f64)]) -> Float64Array {
    let flat: Vec<f64> = pairs.iter().flat_map(|&(re, im)| [re, im]).collect();
    Float64Array::from(&flat[..])
}

// ── Single energy ──

/// Returns [ε1, ε2] at photon energy `e` (eV).
#[wasm_bindgen]
pub fn permittivity(
    e: f64,
    einf: f64,
    ep: f64,
    g: f64,
    lorentzians: &[f64],
) -> Result<Vec<f64>, JsError> {
    let params = model(einf, ep, g, lorentzians)?;
    let (re, im) = ellipso::evaluate_permittivity(e, &params);
    Ok(vec![re, im])
}

/// Returns normal-incidence reflectivity at photon energy `e` (eV).
#[wasm_bindgen]
pub fn reflectivity(
    e: f64,
    einf: f64,
    ep: f64,
    g: f64,
    lorentzians: &[f64],
) -> Result<f64, JsError> {
    let params = model(einf, ep, g, lorentzians)?;
    ellipso::evaluate_reflectivity(e, &params).map_err(to_js)
}

/// Checks the non-zero damping invariant.
#[wasm_bindgen]
pub fn validate_parameters(
    einf: f64,
    ep: f64,
    g: f64,
    lorentzians: &[f64],
) -> Result<(), JsError> {
    let params = model(einf, ep, g, lorentzians)?;
    ellipso::validate(&params).map_err(to_js)
}

// ── Spectra ──

/// Returns interleaved [ε1, ε2, ...] for each energy.
#[wasm_bindgen]
pub fn permittivity_curve(
    energies: &[f64],
    einf: f64,
    ep: f64,
    g: f64,
    lorentzians: &[f64],
) -> Result<Float64Array, JsError> {
    let params = model(einf, ep, g, lorentzians)?;
    Ok(flatten(&permittivity_spectrum(energies, &params)))
}

/// Returns reflectivity for each energy.
#[wasm_bindgen]
pub fn reflectivity_curve(
    energies: &[f64],
    einf: f64,
    ep: f64,
    g: f64,
    lorentzians: &[f64],
) -> Result<Float64Array, JsError> {
    let params = model(einf, ep, g, lorentzians)?;
    let r = reflectivity_spectrum(energies, &params, &ReflectivityEngine::new()).map_err(to_js)?;
    Ok(Float64Array::from(&r[..]))
}

// ── Presets ──

/// Returns the symbols of the built-in metal presets.
#[wasm_bindgen]
pub fn preset_names() -> Array {
    ellipso::preset_names()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Returns interleaved [ε1, ε2, ...] for a preset material.
#[wasm_bindgen]
pub fn preset_permittivity(name: &str, energies: &[f64]) -> Result<Float64Array, JsError> {
    let params = ellipso::preset(name).map_err(to_js)?;
    Ok(flatten(&permittivity_spectrum(energies, &params)))
}

/// Returns reflectivity for a preset material.
#[wasm_bindgen]
pub fn preset_reflectivity(name: &str, energies: &[f64]) -> Result<Float64Array, JsError> {
    let params = ellipso::preset(name).map_err(to_js)?;
    let r = reflectivity_spectrum(energies, &params, &ReflectivityEngine::new()).map_err(to_js)?;
    Ok(Float64Array::from(&r[..]))
}
