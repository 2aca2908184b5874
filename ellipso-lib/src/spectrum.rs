//! Evaluation over a set of photon energies.

use ellipso_data::ModelParameters;

use crate::permittivity::evaluate_permittivity;

#[cfg(feature = "optics")]
use crate::error::Result;
#[cfg(feature = "optics")]
use crate::reflectivity::ReflectivityEngine;
#[cfg(feature = "optics")]
use crate::thinfilm::ThinFilmSimulator;

/// `n` evenly spaced energies from `start` to `stop`, both included.
pub fn energy_grid(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// `(ε1, ε2)` at each energy.
pub fn permittivity_spectrum(energies: &[f64], params: &ModelParameters) -> Vec<(f64, f64)> {
    energies
        .iter()
        .map(|&e| evaluate_permittivity(e, params))
        .collect()
}

/// Reflectivity at each energy. Stops at the first simulator error.
#[cfg(feature = "optics")]
pub fn reflectivity_spectrum<S: ThinFilmSimulator>(
    energies: &[f64],
    params: &ModelParameters,
    engine: &ReflectivityEngine<S>,
) -> Result<Vec<f64>> {
    energies
        .iter()
        .map(|&e| engine.reflectivity(e, params))
        .collect()
}

/// Parallel [`permittivity_spectrum`]; results stay in input order.
#[cfg(feature = "parallel")]
pub fn par_permittivity_spectrum(energies: &[f64], params: &ModelParameters) -> Vec<(f64, f64)> {
    use rayon::prelude::*;

    energies
        .par_iter()
        .map(|&e| evaluate_permittivity(e, params))
        .collect()
}

/// Parallel [`reflectivity_spectrum`]; results stay in input order.
#[cfg(all(feature = "parallel", feature = "optics"))]
pub fn par_reflectivity_spectrum<S: ThinFilmSimulator + Sync>(
    energies: &[f64],
    params: &ModelParameters,
    engine: &ReflectivityEngine<S>,
) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    energies
        .par_iter()
        .map(|&e| engine.reflectivity(e, params))
        .collect()
}
