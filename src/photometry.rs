//! # Survey photometric model
//!
//! Closed-form reference model of the survey's per-frame photometry:
//! magnitude → expected source counts, and the derived per-frame
//! signal-to-noise ratio. Both are deterministic functions of the target
//! magnitude under the survey's fixed aperture, cadence, and noise floor
//! (see [`crate::constants`]).

use crate::constants::{
    Magnitude, APERTURE_DIAMETER, APERTURE_PIXELS, READ_NOISE, REFERENCE_FRAME_RATE,
    SKY_BACKGROUND, ZERO_POINT_FLUX,
};

/// Expected source photons collected in one reference frame at magnitude `m`.
///
/// `N(m) = F₀ · 10^(-0.4·m) · A · t` with `F₀` the bandpass zero-point
/// flux, `A` the aperture area and `t` the reference frame time.
pub fn photons_per_frame(magnitude: Magnitude) -> f64 {
    let aperture_area = std::f64::consts::PI * (APERTURE_DIAMETER / 2.0).powi(2);
    let frame_time = 1.0 / REFERENCE_FRAME_RATE;
    ZERO_POINT_FLUX * 10f64.powf(-0.4 * magnitude) * aperture_area * frame_time
}

/// Expected per-frame signal-to-noise ratio at magnitude `m`.
///
/// Source counts against the photon, sky and read-noise floor of the
/// survey's reference photometric aperture:
///
/// ```text
/// SNR(m) = S / √(S + n_pix·(sky + ron²))
/// ```
///
/// Brighter targets (lower magnitudes) yield higher SNR; the function is
/// strictly monotone and has no failure modes for finite magnitudes.
pub fn snr(magnitude: Magnitude) -> f64 {
    let source = photons_per_frame(magnitude);
    let background = APERTURE_PIXELS * (SKY_BACKGROUND + READ_NOISE.powi(2));
    source / (source + background).sqrt()
}
