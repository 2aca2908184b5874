use ellipso_data::ModelParameters;

use crate::error::{EllipsoError, Result};

/// Check the non-zero damping invariant and that every coefficient is finite.
///
/// Evaluation never calls this; the model functions stay total and return
/// NaN/Inf for degenerate inputs. Fitting code should call it before
/// accepting a candidate parameter set.
pub fn validate(params: &ModelParameters) -> Result<()> {
    let drude = [("einf", params.einf), ("ep", params.ep), ("g", params.g)];
    for (name, value) in drude {
        check_finite(name.to_string(), value)?;
    }
    if params.g == 0.0 {
        log::warn!("rejecting parameters: Drude damping is zero");
        return Err(EllipsoError::ZeroDamping { term: None });
    }

    for (i, term) in params.lorentzians.iter().enumerate() {
        check_finite(format!("ek[{i}]"), term.ek)?;
        check_finite(format!("fk[{i}]"), term.fk)?;
        check_finite(format!("gk[{i}]"), term.gk)?;
        if term.gk == 0.0 {
            log::warn!("rejecting parameters: Lorentzian term {i} has zero damping");
            return Err(EllipsoError::ZeroDamping { term: Some(i) });
        }
    }

    Ok(())
}

fn check_finite(name: String, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        log::warn!("rejecting parameters: {name} = {value}");
        Err(EllipsoError::NonFinite { name })
    }
}
