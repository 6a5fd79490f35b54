//! # Monochromatic Fresnel propagation
//!
//! Propagates the pupil's transmission function to the observer's distance
//! with the scalar-wave Fresnel approximation, evaluated in the frequency
//! domain: transform the pupil, multiply by the quadratic-phase transfer
//! function
//!
//! ```text
//! H(fx, fy) = exp(-iπλz(fx² + fy²))
//! ```
//!
//! and transform back. The intensity is the squared magnitude of the
//! propagated amplitude. `|H| = 1`, so the transform conserves energy: far
//! from the shadow the intensity stays at the unocculted baseline of `1`.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::constants::Meter;
use crate::plane::check_positive;
use crate::pupil::Pupil;
use crate::umbra_errors::UmbraError;

use super::fft2::{dft_frequency, fft_2d};
use super::{DiffractionField, DiffractionStage};

/// Propagate a pupil to distance `z` at a single wavelength.
///
/// Arguments
/// -----------------
/// * `pupil`: rasterized occulting silhouette.
/// * `plane_width`: physical width of the simulated plane [m].
/// * `z`: propagation distance [m].
/// * `wavelength`: wavelength [m].
///
/// Return
/// ----------
/// * The monochromatic intensity [`DiffractionField`], baseline-normalized,
///   or [`UmbraError::InvalidParameter`] for non-positive scalars.
pub fn propagate(
    pupil: &Pupil,
    plane_width: Meter,
    z: Meter,
    wavelength: Meter,
) -> Result<DiffractionField, UmbraError> {
    check_positive("plane_width", plane_width)?;
    check_positive("z", z)?;
    check_positive("wavelength", wavelength)?;

    let m = pupil.mesh_size();
    let intensity = propagate_amplitude(pupil.transmission.as_slice(), m, plane_width, z, wavelength);

    Ok(DiffractionField {
        stage: DiffractionStage::Monochromatic,
        intensity: DMatrix::from_column_slice(m, m, &intensity),
    })
}

/// Raw kernel shared with the spectral integrator: transmission in,
/// intensity out, both column-major `m×m` slices.
pub(crate) fn propagate_amplitude(
    transmission: &[f64],
    m: usize,
    plane_width: f64,
    z: f64,
    wavelength: f64,
) -> Vec<f64> {
    let mut buf: Vec<Complex64> = transmission
        .iter()
        .map(|&t| Complex64::new(t, 0.0))
        .collect();

    fft_2d(&mut buf, m, false);

    let phase_scale = -std::f64::consts::PI * wavelength * z;
    for (k, value) in buf.iter_mut().enumerate() {
        let fu = dft_frequency(k % m, m, plane_width);
        let fv = dft_frequency(k / m, m, plane_width);
        let transfer = Complex64::from_polar(1.0, phase_scale * (fu * fu + fv * fv));
        *value *= transfer;
    }

    fft_2d(&mut buf, m, true);

    let scale = 1.0 / (m * m) as f64;
    buf.iter().map(|u| (u * scale).norm_sqr()).collect()
}
