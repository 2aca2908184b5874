use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EllipsoError {
    /// A damping coefficient is zero. `term` is `None` for the Drude term,
    /// otherwise the index of the Lorentzian term.
    ZeroDamping { term: Option<usize> },
    NonFinite { name: String },
    UnknownOscillator { index: usize, count: usize },
    UnknownPreset(String),
    InvalidLayer { index: usize, reason: String },
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, EllipsoError>;

impl fmt::Display for EllipsoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDamping { term: None } => write!(f, "Drude damping g must be non-zero"),
            Self::ZeroDamping { term: Some(i) } => {
                write!(f, "damping gk of Lorentzian term {i} must be non-zero")
            }
            Self::NonFinite { name } => write!(f, "parameter {name} is not finite"),
            Self::UnknownOscillator { index, count } => {
                write!(f, "no Lorentzian term {index} (model has {count})")
            }
            Self::UnknownPreset(name) => write!(f, "unknown material preset: {name}"),
            Self::InvalidLayer { index, reason } => write!(f, "invalid layer {index}: {reason}"),
            Self::InvalidGeometry(msg) => write!(f, "invalid incidence geometry: {msg}"),
        }
    }
}

impl std::error::Error for EllipsoError {}
