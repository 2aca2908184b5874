/// Photon energy times wavelength used by the model (eV·nm)
///
/// The rounded value; `1239.84193` is the CODATA figure.
pub const PLANCK_HC_NM: f64 = 1240.0;

/// Refractive index of the incident medium (vacuum/air)
pub const VACUUM_INDEX: f64 = 1.0;

/// Cosine of the angle of incidence for normal incidence
pub const NORMAL_INCIDENCE: f64 = 1.0;

/// Polarization angle averaging s and p light (rad)
pub const UNPOLARIZED: f64 = std::f64::consts::FRAC_PI_4;

/// Convert photon energy (eV) to vacuum wavelength (nm).
#[inline]
pub fn energy_to_wavelength_nm(energy: f64) -> f64 {
    PLANCK_HC_NM / energy
}

/// Convert vacuum wavelength (nm) to photon energy (eV).
#[inline]
pub fn wavelength_nm_to_energy(wavelength_nm: f64) -> f64 {
    PLANCK_HC_NM / wavelength_nm
}
