mod convergence_curve;
mod error;
mod pi_estimate;
mod pi_estimator;

pub use convergence_curve::ConvergenceCurve;
pub use error::EstimationError;
pub use pi_estimate::{PiEstimate, relative_error};
pub use pi_estimator::{estimate_pi, estimate_pi_signed};
