pub mod constants;
#[cfg(feature = "optics")]
pub mod curve;
pub mod error;
pub mod oscillator;
pub mod permittivity;
pub mod presets;
pub(crate) mod presets_db;
#[cfg(feature = "optics")]
pub mod reflectivity;
pub mod spectrum;
#[cfg(feature = "optics")]
pub mod thinfilm;
pub mod validate;

pub use constants::{energy_to_wavelength_nm, wavelength_nm_to_energy};
#[cfg(feature = "optics")]
pub use curve::{Curve, Part};
pub use ellipso_data;
pub use ellipso_data::{Lorentzian, ModelParameters};
pub use error::{EllipsoError, Result};
pub use permittivity::{evaluate_permittivity, total_imag, total_real};
pub use presets::{preset, preset_names};
#[cfg(feature = "optics")]
pub use reflectivity::{ReflectivityEngine, evaluate_reflectivity};
#[cfg(feature = "optics")]
pub use thinfilm::{Layer, ThinFilm, ThinFilmSimulator};
pub use validate::validate;
