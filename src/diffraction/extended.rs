//! # Finite-source averaging
//!
//! A star is not a point: every surface element casts its own copy of the
//! diffraction pattern, shifted by its position on the stellar disk as
//! projected onto the shadow plane. The observed pattern is therefore the
//! point-source pattern convolved with the projected stellar disk, which
//! washes out fringe structure finer than the projected radius. When the
//! projected radius dwarfs the Fresnel scale, the result approaches the
//! purely geometric shadow.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::constants::Meter;
use crate::umbra_errors::UmbraError;

use super::fft2::fft_2d;
use super::{DiffractionField, DiffractionStage};

/// Convolve the chromatic pattern with the star's projected disk.
///
/// The kernel is a uniform-brightness disk of the projected stellar radius
/// converted to mesh pixels, antialiased with the same one-pixel edge ramp
/// as the pupil and normalized to unit sum, so the unocculted baseline is
/// preserved. Stars smaller than half a pixel are treated as point sources
/// and the field passes through unchanged.
///
/// Arguments
/// -----------------
/// * `field`: chromatic point-source [`DiffractionField`].
/// * `projected_radius`: stellar radius projected onto the shadow plane [m].
/// * `plane_width`: physical width of the simulated plane [m].
///
/// Return
/// ----------
/// * The extended-source [`DiffractionField`], or
///   [`UmbraError::GeometryOverflow`] when the projected disk does not fit
///   in the mesh.
pub fn convolve_source(
    field: &DiffractionField,
    projected_radius: Meter,
    plane_width: Meter,
) -> Result<DiffractionField, UmbraError> {
    crate::plane::check_positive("plane_width", plane_width)?;
    crate::plane::check_finite("projected_radius", projected_radius)?;
    if projected_radius < 0.0 {
        return Err(UmbraError::InvalidParameter {
            name: "projected_radius",
            value: projected_radius,
        });
    }

    let m = field.mesh_size();
    let radius_px = projected_radius / plane_width * m as f64;
    if radius_px >= m as f64 / 2.0 {
        return Err(UmbraError::GeometryOverflow(format!(
            "projected stellar disk radius {radius_px:.1} px exceeds a {m}x{m} mesh"
        )));
    }

    if radius_px < 0.5 {
        return Ok(DiffractionField {
            stage: DiffractionStage::ExtendedSource,
            intensity: field.intensity.clone(),
        });
    }

    let kernel = disk_kernel(m, radius_px);

    let mut f_buf: Vec<Complex64> = field
        .intensity
        .as_slice()
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    let mut k_buf: Vec<Complex64> = kernel.iter().map(|&v| Complex64::new(v, 0.0)).collect();

    fft_2d(&mut f_buf, m, false);
    fft_2d(&mut k_buf, m, false);
    for (f, k) in f_buf.iter_mut().zip(&k_buf) {
        *f *= k;
    }
    fft_2d(&mut f_buf, m, true);

    // Circular convolution: one 1/(m·m) rescale for the round trip. The
    // intensity is clamped at zero to absorb FFT ringing at the fp floor.
    let scale = 1.0 / (m * m) as f64;
    let intensity: Vec<f64> = f_buf.iter().map(|v| (v.re * scale).max(0.0)).collect();

    Ok(DiffractionField {
        stage: DiffractionStage::ExtendedSource,
        intensity: DMatrix::from_column_slice(m, m, &intensity),
    })
}

/// Unit-sum stellar-disk kernel, centered on the wrap-around origin so the
/// convolution introduces no shift.
fn disk_kernel(m: usize, radius_px: f64) -> Vec<f64> {
    let mut kernel = vec![0.0; m * m];
    let mut total = 0.0;
    for col in 0..m {
        let dv = col.min(m - col) as f64;
        for row in 0..m {
            let du = row.min(m - row) as f64;
            let r = du.hypot(dv);
            let value = (radius_px + 0.5 - r).clamp(0.0, 1.0);
            kernel[col * m + row] = value;
            total += value;
        }
    }
    for value in &mut kernel {
        *value /= total;
    }
    kernel
}
