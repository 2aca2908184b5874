use ellipso_data::{Lorentzian, ModelParameters};

use crate::error::{EllipsoError, Result};
use crate::presets_db::{PRESETS, find_preset};

/// Built-in parameter set for a metal ("Ag", "gold", ...).
///
/// The Lorentz-Drude form `1 - f0·ωp²/(ω(ω + iΓ0)) + Σ fj·ωp²/(ωj² - ω² - iωΓj)`
/// maps onto this model with `ep = √f0·ωp`, `g = Γ0`, `ek = ωj`,
/// `fk = fj·ωp²/ωj²` and `gk = Γj`.
pub fn preset(name: &str) -> Result<ModelParameters> {
    let &(_, _, wp, f0, gamma0, oscillators) =
        find_preset(name).ok_or_else(|| EllipsoError::UnknownPreset(name.to_string()))?;

    let mut params = ModelParameters::new(1.0, f0.sqrt() * wp, gamma0);
    for &(fj, gamma_j, wj) in oscillators {
        params.push_lorentzian(Lorentzian::new(wj, fj * wp * wp / (wj * wj), gamma_j));
    }
    Ok(params)
}

/// Symbols of all built-in presets.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|entry| entry.0).collect()
}
