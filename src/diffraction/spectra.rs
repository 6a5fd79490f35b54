//! # Spectral integration
//!
//! Computes the chromatic diffraction pattern by propagating the pupil once
//! per wavelength sample across the survey bandpass and averaging the
//! intensities, flux-weighted by a Planck spectrum at the spectral class's
//! effective temperature.
//!
//! Chromatic integration blurs the fringes: each wavelength lays its rings
//! at a slightly different radius, so averaging damps the oscillation
//! amplitude while leaving the geometric shadow untouched. More samples
//! smooth more, at a cost linear in the sample count.

use nalgebra::DMatrix;

use crate::constants::{
    Kelvin, Meter, BAND_MAX_WAVELENGTH, BAND_MIN_WAVELENGTH, BOLTZMANN_K, LIGHT_SPEED, PLANCK_H,
    REFERENCE_WAVELENGTH,
};
use crate::pupil::Pupil;
use crate::stellar::SpectralClass;
use crate::umbra_errors::UmbraError;

use super::fresnel::propagate_amplitude;
use super::{DiffractionField, DiffractionStage};

/// Integrate the diffraction pattern over the stellar spectrum.
///
/// Wavelengths are sampled at the midpoints of `n_wavelengths` equal slices
/// of the survey bandpass; the single-sample case degenerates to the
/// reference wavelength. Weights follow the Planck spectral radiance at the
/// class's effective temperature, normalized over the sampled set.
///
/// Arguments
/// -----------------
/// * `pupil`: rasterized occulting silhouette.
/// * `plane_width`: physical width of the simulated plane [m].
/// * `z`: propagation distance [m].
/// * `class`: spectral classification fixing the weighting temperature.
/// * `n_wavelengths`: number of spectral samples, at least 1.
///
/// Return
/// ----------
/// * The chromatic [`DiffractionField`], or
///   [`UmbraError::InvalidParameter`] when `n_wavelengths < 1` or a scalar
///   is out of range.
pub fn integrate(
    pupil: &Pupil,
    plane_width: Meter,
    z: Meter,
    class: SpectralClass,
    n_wavelengths: usize,
) -> Result<DiffractionField, UmbraError> {
    crate::plane::check_positive("plane_width", plane_width)?;
    crate::plane::check_positive("z", z)?;
    if n_wavelengths < 1 {
        return Err(UmbraError::InvalidParameter {
            name: "n_wavelengths",
            value: n_wavelengths as f64,
        });
    }

    let samples = band_samples(n_wavelengths);
    let temperature = class.effective_temperature();
    let weights = planck_weights(&samples, temperature);

    let m = pupil.mesh_size();
    let mut accumulated = vec![0.0; m * m];
    for (&wavelength, &weight) in samples.iter().zip(&weights) {
        let intensity = propagate_amplitude(pupil.transmission.as_slice(), m, plane_width, z, wavelength);
        for (acc, value) in accumulated.iter_mut().zip(&intensity) {
            *acc += weight * value;
        }
    }

    Ok(DiffractionField {
        stage: DiffractionStage::Chromatic,
        intensity: DMatrix::from_column_slice(m, m, &accumulated),
    })
}

/// Midpoint wavelength samples over the survey bandpass.
fn band_samples(n: usize) -> Vec<Meter> {
    if n == 1 {
        return vec![REFERENCE_WAVELENGTH];
    }
    let span = BAND_MAX_WAVELENGTH - BAND_MIN_WAVELENGTH;
    (0..n)
        .map(|i| BAND_MIN_WAVELENGTH + span * (i as f64 + 0.5) / n as f64)
        .collect()
}

/// Planck spectral radiance, up to a constant factor [W·m⁻³·sr⁻¹].
fn planck_radiance(wavelength: Meter, temperature: Kelvin) -> f64 {
    let hc = PLANCK_H * LIGHT_SPEED;
    let x = hc / (wavelength * BOLTZMANN_K * temperature);
    (2.0 * hc * LIGHT_SPEED) / (wavelength.powi(5) * x.exp_m1())
}

/// Normalized flux weights for the sampled wavelengths.
fn planck_weights(samples: &[Meter], temperature: Kelvin) -> Vec<f64> {
    let raw: Vec<f64> = samples
        .iter()
        .map(|&w| planck_radiance(w, temperature))
        .collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

#[cfg(test)]
mod spectra_test {
    use super::*;
    use crate::diffraction::fresnel::propagate;
    use crate::plane::compute_plane;

    #[test]
    fn test_single_sample_matches_reference_wavelength() {
        let geom = compute_plane(3000.0, REFERENCE_WAVELENGTH, 45.0).unwrap();
        let pupil = Pupil::occulting_disk(64, geom.plane_width, 3000.0).unwrap();
        let chromatic = integrate(
            &pupil,
            geom.plane_width,
            geom.propagation_distance,
            SpectralClass::M4,
            1,
        )
        .unwrap();
        let mono = propagate(
            &pupil,
            geom.plane_width,
            geom.propagation_distance,
            REFERENCE_WAVELENGTH,
        )
        .unwrap();
        assert_eq!(chromatic.intensity, mono.intensity);
        assert_eq!(chromatic.stage, DiffractionStage::Chromatic);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let geom = compute_plane(3000.0, REFERENCE_WAVELENGTH, 45.0).unwrap();
        let pupil = Pupil::occulting_disk(32, geom.plane_width, 3000.0).unwrap();
        let err = integrate(
            &pupil,
            geom.plane_width,
            geom.propagation_distance,
            SpectralClass::M4,
            0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            UmbraError::InvalidParameter {
                name: "n_wavelengths",
                ..
            }
        ));
    }

    #[test]
    fn test_weights_normalized_and_red_leaning_for_cool_star() {
        let samples = band_samples(5);
        let weights = planck_weights(&samples, 3400.0);
        let total: f64 = weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        // A 3400 K photosphere emits more at the red end of the band.
        assert!(weights.last().unwrap() > weights.first().unwrap());
    }

    #[test]
    fn test_hot_star_flattens_weights() {
        let samples = band_samples(5);
        let cool = planck_weights(&samples, 3400.0);
        let hot = planck_weights(&samples, 9700.0);
        let spread = |w: &[f64]| w.last().unwrap() - w.first().unwrap();
        assert!(spread(&hot) < spread(&cool));
    }

    #[test]
    fn test_band_samples_cover_band() {
        let samples = band_samples(10);
        assert_eq!(samples.len(), 10);
        assert!(samples.first().unwrap() > &BAND_MIN_WAVELENGTH);
        assert!(samples.last().unwrap() < &BAND_MAX_WAVELENGTH);
        assert!(samples.windows(2).all(|p| p[0] < p[1]));
    }
}
