//! Normal-incidence reflectivity of a Drude-Lorentz material.
//!
//! Requires the `optics` feature.

use ellipso_data::ModelParameters;
use num_complex::Complex64;

use crate::constants::{NORMAL_INCIDENCE, UNPOLARIZED, VACUUM_INDEX, energy_to_wavelength_nm};
use crate::error::Result;
use crate::permittivity::permittivity;
use crate::thinfilm::{Layer, ThinFilm, ThinFilmSimulator};

/// Complex refractive index `√ε` on the principal branch (real part ≥ 0).
///
/// For ε2 ≥ 0 this is the `n + ik` form.
pub fn refractive_index(e: f64, params: &ModelParameters) -> Complex64 {
    permittivity(e, params).sqrt()
}

/// Exit-medium index handed to the simulator: the conjugate of
/// [`refractive_index`], i.e. `n - ik`.
///
/// The conjugate is taken unconditionally, whatever the sign of ε2.
pub fn exit_index(e: f64, params: &ModelParameters) -> Complex64 {
    refractive_index(e, params).conj()
}

/// Reflectivity pipeline: permittivity, refractive index, then a
/// thin-film simulation in air at normal incidence with unpolarized light.
///
/// The simulator is injected; [`ThinFilm`] is the default.
#[derive(Debug, Clone, Default)]
pub struct ReflectivityEngine<S = ThinFilm> {
    simulator: S,
}

impl ReflectivityEngine<ThinFilm> {
    pub fn new() -> Self {
        ReflectivityEngine {
            simulator: ThinFilm,
        }
    }
}

impl<S: ThinFilmSimulator> ReflectivityEngine<S> {
    pub fn with_simulator(simulator: S) -> Self {
        ReflectivityEngine { simulator }
    }

    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    /// Bare-substrate reflectivity at photon energy `e` (eV, expected > 0).
    pub fn reflectivity(&self, e: f64, params: &ModelParameters) -> Result<f64> {
        self.reflectivity_with_layers(e, params, &[])
    }

    /// Reflectivity with the model material as the exit medium below
    /// `layers` (ordered from the air side).
    ///
    /// Simulator errors are returned unchanged.
    pub fn reflectivity_with_layers(
        &self,
        e: f64,
        params: &ModelParameters,
        layers: &[Layer],
    ) -> Result<f64> {
        let exit = exit_index(e, params);
        let wavelength_nm = energy_to_wavelength_nm(e);
        log::trace!("reflectivity at {e} eV ({wavelength_nm} nm): exit index {exit}");

        self.simulator.simulate(
            NORMAL_INCIDENCE,
            wavelength_nm,
            UNPOLARIZED,
            VACUUM_INDEX,
            exit,
            layers,
        )
    }
}

/// Bare-substrate reflectivity using the built-in [`ThinFilm`] simulator.
pub fn evaluate_reflectivity(e: f64, params: &ModelParameters) -> Result<f64> {
    ReflectivityEngine::new().reflectivity(e, params)
}
