//! # Photon-noise injection
//!
//! Converts the target's apparent magnitude into an expected per-sample
//! photon count through the survey's photometric model, draws each mesh
//! pixel from a Poisson process scaled by the deterministic intensity, and
//! renormalizes back to intensity units.
//!
//! The random source is an explicit [`Rng`] argument: runs are reproducible
//! under a seeded generator, and intentionally stochastic otherwise: two
//! calls with different seeds are expected to differ.

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::constants::Magnitude;
use crate::photometry::photons_per_frame;
use crate::plane::check_finite;
use crate::umbra_errors::UmbraError;

use super::{DiffractionField, DiffractionStage};

/// Inject photon-counting noise into an extended-source pattern.
///
/// Every pixel's expected count is `intensity × N(m)` with `N(m)` the
/// per-frame source count at magnitude `m`; the drawn count divided by
/// `N(m)` is the noisy intensity. Brighter targets (lower magnitudes) yield
/// proportionally tighter curves.
///
/// Arguments
/// -----------------
/// * `field`: extended-source [`DiffractionField`].
/// * `apparent_magnitude`: target magnitude in the survey band.
/// * `rng`: random source; seed it for reproducible output.
///
/// Return
/// ----------
/// * The noisy [`DiffractionField`], or an error for non-finite magnitudes.
pub fn add_noise<R: Rng + ?Sized>(
    field: &DiffractionField,
    apparent_magnitude: Magnitude,
    rng: &mut R,
) -> Result<DiffractionField, UmbraError> {
    check_finite("apparent_magnitude", apparent_magnitude)?;

    let expected_photons = photons_per_frame(apparent_magnitude);
    let m = field.mesh_size();

    let mut noisy = Vec::with_capacity(m * m);
    for &intensity in field.intensity.as_slice() {
        let lambda = intensity * expected_photons;
        if lambda > 0.0 {
            let counts: f64 = Poisson::new(lambda)?.sample(rng);
            noisy.push(counts / expected_photons);
        } else {
            noisy.push(0.0);
        }
    }

    Ok(DiffractionField {
        stage: DiffractionStage::Noisy,
        intensity: DMatrix::from_column_slice(m, m, &noisy),
    })
}
