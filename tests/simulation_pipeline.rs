use umbra::simulation::{run_seeded, SimulationParameters};
use umbra::stellar::SpectralClass;

fn reference_params() -> SimulationParameters {
    SimulationParameters {
        mesh_size: 512,
        object_diameter: 3_000.0,
        object_distance: 45.0,
        apparent_magnitude: 12.0,
        spectral_class: SpectralClass::M4,
        n_wavelengths: 5,
        fps: 20,
        impact_parameter: 0.0,
        ..Default::default()
    }
}

#[test]
fn test_central_occultation_has_deep_minimum_and_unit_baseline() {
    let result = run_seeded(&reference_params(), 0xfeed).unwrap();

    let flux = &result.curves.ideal.flux;
    let min = flux.iter().copied().fold(f64::INFINITY, f64::min);
    assert!(min < 0.4, "central occultation minimum {min} not deep");

    // Far from the event the curve sits at the unocculted baseline.
    let first = flux.first().unwrap();
    let last = flux.last().unwrap();
    assert!((first - 1.0).abs() < 0.05, "leading baseline {first}");
    assert!((last - 1.0).abs() < 0.05, "trailing baseline {last}");
}

#[test]
fn test_grazing_track_shows_ripple_only() {
    let params = SimulationParameters {
        impact_parameter: 1.0,
        ..reference_params()
    };
    let result = run_seeded(&params, 0xfeed).unwrap();

    let flux = &result.curves.ideal.flux;
    let min = flux.iter().copied().fold(f64::INFINITY, f64::min);
    let max = flux.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(min > 0.85, "grazing track dipped to {min}");
    assert!(max < 1.35, "grazing track peaked at {max}");
}

#[test]
fn test_observed_curve_resamples_event_at_camera_cadence() {
    let params = reference_params();
    let result = run_seeded(&params, 0xfeed).unwrap();

    let observed = &result.curves.observed;
    assert!(observed.time.len() > 1);
    let step = observed.time[1] - observed.time[0];
    assert!((step - 1.0 / params.fps as f64).abs() < 1e-12);
    assert!(observed.time.iter().all(|&t| t >= 0.0));

    // The camera also sees the deep event, even at its coarser cadence.
    let min = observed.flux.iter().copied().fold(f64::INFINITY, f64::min);
    assert!(min < 0.6, "observed-cadence minimum {min}");
}

#[test]
fn test_spectral_smoothing_is_monotone_in_sample_count() {
    let fringe_variance = |n_wavelengths: usize| {
        let params = SimulationParameters {
            mesh_size: 256,
            n_wavelengths,
            ..reference_params()
        };
        let result = run_seeded(&params, 1).unwrap();
        // Fringe contrast away from the shadow: the leading quarter of the
        // noiseless profile.
        let outer = &result.clean_profile.intensity[..64];
        let mean: f64 = outer.iter().sum::<f64>() / outer.len() as f64;
        outer.iter().map(|y| (y - mean).powi(2)).sum::<f64>() / outer.len() as f64
    };

    let v1 = fringe_variance(1);
    let v5 = fringe_variance(5);
    let v20 = fringe_variance(20);
    assert!(
        v1 > v5 && v5 > v20,
        "fringe variance not monotone: {v1} {v5} {v20}"
    );
}

#[test]
fn test_noiseless_and_noisy_profiles_share_track() {
    let result = run_seeded(&reference_params(), 3).unwrap();
    assert_eq!(result.clean_profile.offset, result.noisy_profile.offset);
    assert_eq!(result.clean_profile.len(), result.noisy_profile.len());
    // Noise perturbs the intensities without relocating the event.
    assert_ne!(result.clean_profile.intensity, result.noisy_profile.intensity);
}

#[test]
fn test_summary_and_snr_reported_alongside() {
    let result = run_seeded(&reference_params(), 4).unwrap();
    assert!(result.snr > 10.0 && result.snr < 100.0);

    let summary = result.summary();
    assert_eq!(summary[3], ("spectral_type", "M4".to_string()));
    let plane_width: f64 = summary[0].1.parse().unwrap();
    assert!((plane_width - 75_000.0).abs() < 1.0);
}
