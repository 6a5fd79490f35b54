//! # Temporal sampling
//!
//! Converts the spatial diffraction profile into time-series light curves.
//! The shadow sweeps the observer at the **composite relative velocity** of
//! Earth's orbital motion and the object's own tangential motion; both
//! projections depend on the opposition angle and the object's distance,
//! not just the raw speeds. Two curves come out:
//!
//! - the **ideal** curve, sampled at the mesh's fine spatial cadence,
//! - the **observed** curve, resampled at the camera's frame interval with
//!   the configured time offset.

use serde::{Deserialize, Serialize};

use crate::constants::{Au, Degree, Meter, Second};
use crate::plane::{check_finite, check_positive};
use crate::profile::Profile;
use crate::umbra_errors::UmbraError;

/// A time-sampled light curve, ordered by increasing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCurve {
    /// Sample timestamps [s], non-negative.
    pub time: Vec<Second>,

    /// Normalized flux at each timestamp.
    pub flux: Vec<f64>,
}

/// The fine-cadence and camera-cadence curves of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurves {
    /// Underlying physical sampling (one point per profile sample).
    pub ideal: LightCurve,

    /// Resampled at the camera's actual frame interval.
    pub observed: LightCurve,
}

/// Apparent velocity of the occultation shadow across the observer [m/s].
///
/// Earth contributes its orbital velocity projected through the opposition
/// angle `φ`; a body on a circular orbit at `a` AU subtracts its own
/// transverse Keplerian velocity as seen in the same geometry; the object's
/// tangential speed parameter adds on top (signed, positive against Earth's
/// direction of motion):
///
/// ```text
/// v = vE·cosφ − vE·√((1 − (sinφ/a)²)/a) + v_obj
/// ```
pub fn shadow_velocity(
    earth_speed: f64,
    object_speed: f64,
    opposition_angle: Degree,
    distance_au: Au,
) -> f64 {
    let phi = opposition_angle.to_radians();
    let sin_ratio = phi.sin() / distance_au;
    let orbital = earth_speed * (((1.0 - sin_ratio * sin_ratio) / distance_au).max(0.0)).sqrt();
    earth_speed * phi.cos() - orbital + object_speed
}

/// Sample the noiseless profile into ideal and camera-cadence light curves.
///
/// Arguments
/// -----------------
/// * `profile`: noiseless diffraction profile along the track.
/// * `plane_width`: physical width of the simulated plane [m].
/// * `object_speed`: tangential speed of the occulting body [m/s].
/// * `fps`: camera frame rate [frames/s], non-zero.
/// * `time_offset`: shift applied to all timestamps [s], non-negative.
/// * `earth_speed`: Earth's translation speed [m/s].
/// * `opposition_angle`: angle from opposition [deg].
/// * `distance_au`: object distance [AU].
///
/// Return
/// ----------
/// * The [`SampledCurves`] of the event,
///   [`UmbraError::DegenerateMotion`] when the composite velocity vanishes
///   (an infinite-duration event), or [`UmbraError::InvalidParameter`] for
///   a zero frame rate or negative offset.
#[allow(clippy::too_many_arguments)]
pub fn sample(
    profile: &Profile,
    plane_width: Meter,
    object_speed: f64,
    fps: u32,
    time_offset: Second,
    earth_speed: f64,
    opposition_angle: Degree,
    distance_au: Au,
) -> Result<SampledCurves, UmbraError> {
    check_positive("plane_width", plane_width)?;
    check_positive("distance_au", distance_au)?;
    check_finite("earth_speed", earth_speed)?;
    check_finite("object_speed", object_speed)?;
    check_finite("opposition_angle", opposition_angle)?;
    check_finite("time_offset", time_offset)?;
    if fps == 0 {
        return Err(UmbraError::InvalidParameter {
            name: "fps",
            value: 0.0,
        });
    }
    if time_offset < 0.0 {
        return Err(UmbraError::InvalidParameter {
            name: "time_offset",
            value: time_offset,
        });
    }

    let velocity = shadow_velocity(earth_speed, object_speed, opposition_angle, distance_au);
    if velocity.abs() < 1e-9 {
        return Err(UmbraError::DegenerateMotion);
    }

    let n = profile.len();
    let fine_step = plane_width / n as f64 / velocity.abs();
    let ideal = LightCurve {
        time: (0..n).map(|i| time_offset + i as f64 * fine_step).collect(),
        flux: profile.intensity.clone(),
    };

    let duration = plane_width / velocity.abs();
    let frame_step = 1.0 / fps as f64;
    let n_frames = (duration / frame_step).floor() as usize + 1;
    let mut time = Vec::with_capacity(n_frames);
    let mut flux = Vec::with_capacity(n_frames);
    for frame in 0..n_frames {
        let t = frame as f64 * frame_step;
        time.push(time_offset + t);
        flux.push(interpolate(&profile.intensity, t / fine_step));
    }

    Ok(SampledCurves {
        ideal,
        observed: LightCurve { time, flux },
    })
}

/// Linear interpolation over sample indices, clamped at the ends.
fn interpolate(values: &[f64], position: f64) -> f64 {
    let last = values.len() - 1;
    let clamped = position.clamp(0.0, last as f64);
    let i = (clamped.floor() as usize).min(last.saturating_sub(1));
    let frac = clamped - i as f64;
    if i + 1 > last {
        return values[last];
    }
    values[i] * (1.0 - frac) + values[i + 1] * frac
}

#[cfg(test)]
mod lightcurve_test {
    use super::*;

    fn ramp_profile(n: usize, plane_width: f64) -> Profile {
        let pixel = plane_width / n as f64;
        Profile {
            offset: (0..n).map(|i| (i as f64 - n as f64 / 2.0) * pixel).collect(),
            intensity: (0..n).map(|i| i as f64).collect(),
        }
    }

    #[test]
    fn test_zero_velocity_is_degenerate() {
        let profile = ramp_profile(64, 10_000.0);
        let err = sample(&profile, 10_000.0, 0.0, 20, 0.0, 0.0, 30.0, 45.0).unwrap_err();
        assert_eq!(err, UmbraError::DegenerateMotion);
    }

    #[test]
    fn test_zero_fps_rejected() {
        let profile = ramp_profile(64, 10_000.0);
        let err = sample(&profile, 10_000.0, 5_000.0, 0, 0.0, 29_800.0, 30.0, 45.0).unwrap_err();
        assert!(matches!(
            err,
            UmbraError::InvalidParameter { name: "fps", .. }
        ));
    }

    #[test]
    fn test_shadow_velocity_composition() {
        // At opposition angle 0 the Earth term is maximal and the Keplerian
        // term subtracts √(1/a)·vE.
        let v = shadow_velocity(29_800.0, 0.0, 0.0, 45.0);
        let expected = 29_800.0 * (1.0 - (1.0f64 / 45.0).sqrt());
        assert!((v - expected).abs() < 1e-9);

        // The object's own speed adds linearly.
        let v2 = shadow_velocity(29_800.0, 5_000.0, 0.0, 45.0);
        assert!((v2 - v - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_curve_timing() {
        let profile = ramp_profile(100, 10_000.0);
        let curves = sample(&profile, 10_000.0, 5_000.0, 20, 0.5, 29_800.0, 30.0, 45.0).unwrap();
        assert_eq!(curves.ideal.time.len(), 100);
        assert_eq!(curves.ideal.flux, profile.intensity);
        // Timestamps start at the offset, increase uniformly, stay non-negative.
        assert!((curves.ideal.time[0] - 0.5).abs() < 1e-12);
        let step = curves.ideal.time[1] - curves.ideal.time[0];
        for pair in curves.ideal.time.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-12);
            assert!(pair[0] >= 0.0);
        }
    }

    #[test]
    fn test_observed_curve_matches_camera_cadence() {
        let profile = ramp_profile(100, 10_000.0);
        let fps = 20;
        let curves =
            sample(&profile, 10_000.0, 5_000.0, fps, 0.0, 29_800.0, 30.0, 45.0).unwrap();
        let frame_step = 1.0 / fps as f64;
        for pair in curves.observed.time.windows(2) {
            assert!((pair[1] - pair[0] - frame_step).abs() < 1e-12);
        }
        // The observed curve spans the event duration.
        let v = shadow_velocity(29_800.0, 5_000.0, 30.0, 45.0).abs();
        let duration = 10_000.0 / v;
        let last = *curves.observed.time.last().unwrap();
        assert!(last <= duration + 1e-9 && last > duration - frame_step - 1e-9);
    }

    #[test]
    fn test_observed_flux_interpolates_profile() {
        let profile = ramp_profile(100, 10_000.0);
        let curves = sample(&profile, 10_000.0, 5_000.0, 7, 0.0, 29_800.0, 30.0, 45.0).unwrap();
        let v = shadow_velocity(29_800.0, 5_000.0, 30.0, 45.0).abs();
        let fine_step = 10_000.0 / 100.0 / v;
        for (&t, &y) in curves.observed.time.iter().zip(&curves.observed.flux) {
            let index = t / fine_step;
            assert!((y - index.min(99.0)).abs() < 1e-9, "flux {y} at index {index}");
        }
    }

    #[test]
    fn test_negative_offset_rejected() {
        let profile = ramp_profile(64, 10_000.0);
        let err = sample(&profile, 10_000.0, 5_000.0, 20, -1.0, 29_800.0, 30.0, 45.0).unwrap_err();
        assert!(matches!(
            err,
            UmbraError::InvalidParameter {
                name: "time_offset",
                ..
            }
        ));
    }
}
