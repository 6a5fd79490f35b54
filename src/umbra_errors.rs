use thiserror::Error;

/// Error taxonomy of the synthesis pipeline.
///
/// Every stage is a pure function of its inputs, so none of these errors is
/// retried internally: the pipeline either returns a complete
/// [`SimulationResult`](crate::simulation::SimulationResult) or fails fast
/// with the first error encountered, producing no partial output.
#[derive(Error, Debug)]
pub enum UmbraError {
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Unknown spectral classification: {0}")]
    UnknownSpectralClass(String),

    #[error("Geometry overflow: {0}")]
    GeometryOverflow(String),

    #[error("Degenerate motion: combined shadow velocity is zero")]
    DegenerateMotion,

    #[error("Poisson noise generation failed: {0:?}")]
    NoiseInjection(rand_distr::PoissonError),
}

impl From<rand_distr::PoissonError> for UmbraError {
    fn from(err: rand_distr::PoissonError) -> Self {
        UmbraError::NoiseInjection(err)
    }
}

impl PartialEq for UmbraError {
    fn eq(&self, other: &Self) -> bool {
        use UmbraError::*;
        match (self, other) {
            (
                InvalidParameter { name: a, value: x },
                InvalidParameter { name: b, value: y },
            ) => a == b && x == y,
            (UnknownSpectralClass(a), UnknownSpectralClass(b)) => a == b,
            (GeometryOverflow(a), GeometryOverflow(b)) => a == b,
            (DegenerateMotion, DegenerateMotion) => true,
            (NoiseInjection(_), NoiseInjection(_)) => true,
            _ => false,
        }
    }
}
