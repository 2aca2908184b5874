//! Selection of a single model quantity for evaluation.
//!
//! Requires the `optics` feature.

use ellipso_data::ModelParameters;
use serde::{Deserialize, Serialize};

use crate::error::{EllipsoError, Result};
use crate::oscillator::{drude_imag, drude_real, lorentzian_imag, lorentzian_real};
use crate::permittivity::{total_imag, total_real};
use crate::reflectivity::ReflectivityEngine;
use crate::thinfilm::ThinFilmSimulator;

/// Real (ε1) or imaginary (ε2) part of the permittivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    Real,
    Imag,
}

/// One quantity of the model as a function of photon energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    /// Full Drude + Lorentzian permittivity
    Total(Part),
    /// Drude term alone
    Drude(Part),
    /// A single Lorentzian term, by position in `ModelParameters::lorentzians`
    Lorentzian { index: usize, part: Part },
    /// Normal-incidence reflectivity
    Reflectivity,
}

impl Curve {
    pub fn evaluate<S: ThinFilmSimulator>(
        &self,
        e: f64,
        params: &ModelParameters,
        engine: &ReflectivityEngine<S>,
    ) -> Result<f64> {
        match *self {
            Curve::Total(Part::Real) => Ok(total_real(e, params)),
            Curve::Total(Part::Imag) => Ok(total_imag(e, params)),
            Curve::Drude(Part::Real) => Ok(drude_real(e, params.einf, params.ep, params.g)),
            Curve::Drude(Part::Imag) => Ok(drude_imag(e, params.ep, params.g)),
            Curve::Lorentzian { index, part } => {
                let term = params.lorentzians.get(index).ok_or(
                    EllipsoError::UnknownOscillator {
                        index,
                        count: params.lorentzians.len(),
                    },
                )?;
                Ok(match part {
                    Part::Real => lorentzian_real(e, term.ek, term.fk, term.gk),
                    Part::Imag => lorentzian_imag(e, term.ek, term.fk, term.gk),
                })
            }
            Curve::Reflectivity => engine.reflectivity(e, params),
        }
    }

    /// Evaluate at every energy, in order.
    pub fn sample<S: ThinFilmSimulator>(
        &self,
        energies: &[f64],
        params: &ModelParameters,
        engine: &ReflectivityEngine<S>,
    ) -> Result<Vec<f64>> {
        energies
            .iter()
            .map(|&e| self.evaluate(e, params, engine))
            .collect()
    }
}
