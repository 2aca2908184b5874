//! Thin-film stack reflectivity.
//!
//! Indices follow the `n - ik` convention: an absorbing medium has a
//! negative imaginary part. Requires the `optics` feature.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{EllipsoError, Result};

/// One homogeneous film between the incident and exit media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Complex refractive index (`n - ik`)
    pub index: Complex64,
    /// Physical thickness in nm
    pub thickness_nm: f64,
}

impl Layer {
    pub fn new(index: Complex64, thickness_nm: f64) -> Self {
        Layer {
            index,
            thickness_nm,
        }
    }
}

/// Computes the reflectivity of a layer stack.
///
/// # Arguments
/// * `cos_incidence` - Cosine of the angle of incidence in the incident medium
/// * `wavelength_nm` - Vacuum wavelength in nm
/// * `polarization_angle` - 0 for parallel (p), π/2 for perpendicular (s), π/4 for the average
/// * `incident_index` - Real index of the incident medium
/// * `exit_index` - Complex index of the exit medium (substrate)
/// * `layers` - Films ordered from the incident side to the exit side
pub trait ThinFilmSimulator {
    fn simulate(
        &self,
        cos_incidence: f64,
        wavelength_nm: f64,
        polarization_angle: f64,
        incident_index: f64,
        exit_index: Complex64,
        layers: &[Layer],
    ) -> Result<f64>;
}

impl<F> ThinFilmSimulator for F
where
    F: Fn(f64, f64, f64, f64, Complex64, &[Layer]) -> Result<f64>,
{
    fn simulate(
        &self,
        cos_incidence: f64,
        wavelength_nm: f64,
        polarization_angle: f64,
        incident_index: f64,
        exit_index: Complex64,
        layers: &[Layer],
    ) -> Result<f64> {
        self(
            cos_incidence,
            wavelength_nm,
            polarization_angle,
            incident_index,
            exit_index,
            layers,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarization {
    S,
    P,
}

/// Built-in simulator using the Parratt recursion over tilted admittances.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThinFilm;

/// Convert f64 to Complex64 (real part only).
#[inline]
fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

/// Normal component `N·cosθ` of the index in a medium, given the
/// conserved tangential component `kx = N0·sinθ0`.
fn normal_component(n: Complex64, kx: f64) -> Complex64 {
    let z = n * n - c(kx * kx);
    if z.im == 0.0 && z.re < 0.0 {
        // evanescent in a lossless medium: take the decaying root
        Complex64::new(0.0, -(-z.re).sqrt())
    } else {
        z.sqrt()
    }
}

/// Tilted admittance of a medium with index `n` and normal component `q`.
fn tilt(n: Complex64, q: Complex64, polarization: Polarization) -> Complex64 {
    match polarization {
        Polarization::S => q,
        Polarization::P => n * n / q,
    }
}

/// Returns (normal component, tilted admittance).
fn admittance(n: Complex64, kx: f64, polarization: Polarization) -> (Complex64, Complex64) {
    let q = normal_component(n, kx);
    (q, tilt(n, q, polarization))
}

impl ThinFilm {
    pub fn new() -> Self {
        ThinFilm
    }

    fn check(cos_incidence: f64, layers: &[Layer]) -> Result<()> {
        if !(cos_incidence > 0.0 && cos_incidence <= 1.0) {
            return Err(EllipsoError::InvalidGeometry(format!(
                "cos(theta) = {cos_incidence}, expected 0 < cos(theta) <= 1"
            )));
        }
        for (index, layer) in layers.iter().enumerate() {
            if !layer.thickness_nm.is_finite() || layer.thickness_nm < 0.0 {
                return Err(EllipsoError::InvalidLayer {
                    index,
                    reason: format!("thickness {} nm", layer.thickness_nm),
                });
            }
            if !layer.index.re.is_finite() || !layer.index.im.is_finite() {
                return Err(EllipsoError::InvalidLayer {
                    index,
                    reason: format!("refractive index {}", layer.index),
                });
            }
        }
        Ok(())
    }

    fn reflectance(
        cos_incidence: f64,
        kx: f64,
        wavelength_nm: f64,
        incident_index: f64,
        exit_index: Complex64,
        layers: &[Layer],
        polarization: Polarization,
    ) -> f64 {
        let one = c(1.0);
        let minus_two_i = Complex64::new(0.0, -2.0);

        // N0·cosθ0 taken directly: near grazing N0² - kx² cancels to zero
        let n0 = c(incident_index);
        let eta0 = tilt(n0, c(incident_index * cos_incidence), polarization);
        let (_, mut below) = admittance(exit_index, kx, polarization);

        // Recurse upward from the exit medium
        let mut r_amp = c(0.0);
        let mut phase = one;
        for layer in layers.iter().rev() {
            let (q, eta) = admittance(layer.index, kx, polarization);
            let fresnel_r = (eta - below) / (eta + below);
            r_amp = (fresnel_r + r_amp * phase) / (one + fresnel_r * r_amp * phase);

            let delta = q * c(2.0 * PI * layer.thickness_nm / wavelength_nm);
            phase = (minus_two_i * delta).exp();
            below = eta;
        }

        let fresnel_r = (eta0 - below) / (eta0 + below);
        r_amp = (fresnel_r + r_amp * phase) / (one + fresnel_r * r_amp * phase);

        r_amp.norm_sqr()
    }
}

impl ThinFilmSimulator for ThinFilm {
    fn simulate(
        &self,
        cos_incidence: f64,
        wavelength_nm: f64,
        polarization_angle: f64,
        incident_index: f64,
        exit_index: Complex64,
        layers: &[Layer],
    ) -> Result<f64> {
        Self::check(cos_incidence, layers)?;
        if !layers.is_empty() {
            log::debug!(
                "thin film: {} layers at {wavelength_nm} nm, cos(theta) = {cos_incidence}",
                layers.len()
            );
        }

        let sin_incidence = (1.0 - cos_incidence * cos_incidence).sqrt();
        let kx = incident_index * sin_incidence;

        let weight_p = polarization_angle.cos().powi(2);
        let weight_s = polarization_angle.sin().powi(2);

        let rp = Self::reflectance(
            cos_incidence,
            kx,
            wavelength_nm,
            incident_index,
            exit_index,
            layers,
            Polarization::P,
        );
        let rs = Self::reflectance(
            cos_incidence,
            kx,
            wavelength_nm,
            incident_index,
            exit_index,
            layers,
            Polarization::S,
        );

        Ok(weight_p * rp + weight_s * rs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_normal_component_lossy_branch() {
        // n - ik medium: decaying root has negative imaginary part
        let q = normal_component(Complex64::new(2.0, -0.5), 0.7);
        assert!(q.re > 0.0);
        assert!(q.im < 0.0);
    }

    #[test]
    fn test_normal_component_evanescent() {
        let q = normal_component(c(1.0), 1.5);
        assert_eq!(q.re, 0.0);
        assert!(q.im < 0.0);
    }

    #[test]
    fn test_near_grazing_incidence_stays_finite() {
        let sub = c(1.5);
        for &cos_incidence in &[1e-6, 1e-9, 1e-12] {
            let r = ThinFilm
                .simulate(cos_incidence, 500.0, FRAC_PI_4, 1.0, sub, &[])
                .unwrap();
            assert!(r.is_finite(), "cos = {cos_incidence}: R = {r}");
            assert!(r > 0.999 && r <= 1.0, "cos = {cos_incidence}: R = {r}");
        }
    }

    #[test]
    fn test_zero_thickness_layer_is_transparent() {
        let sub = Complex64::new(3.0, -0.2);
        let bare = ThinFilm
            .simulate(1.0, 500.0, 0.3, 1.0, sub, &[])
            .unwrap();
        let coated = ThinFilm
            .simulate(1.0, 500.0, 0.3, 1.0, sub, &[Layer::new(c(1.7), 0.0)])
            .unwrap();
        assert!((bare - coated).abs() < 1e-12);
    }
}
