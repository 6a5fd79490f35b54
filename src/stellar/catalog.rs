//! Reference star-property table of the survey.
//!
//! One row per spectral class, ordered by the catalog's stable indices
//! (`A0 = 0` … `M8 = 34`). Radii are main-sequence calibrations; absolute
//! magnitudes for the K/M classes adopt giant-branch values, matching the
//! luminosity class that dominates a deep survey catalog at these apparent
//! magnitudes.

use crate::constants::{Kelvin, Magnitude};

/// Reference properties of one spectral class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProperties {
    /// Class label, e.g. `"G2"`.
    pub label: &'static str,

    /// Effective temperature [K].
    pub effective_temperature: Kelvin,

    /// Absolute magnitude in the survey band.
    pub absolute_magnitude: Magnitude,

    /// Stellar radius [R☉].
    pub radius_solar: f64,
}

const fn row(
    label: &'static str,
    effective_temperature: Kelvin,
    absolute_magnitude: Magnitude,
    radius_solar: f64,
) -> ClassProperties {
    ClassProperties {
        label,
        effective_temperature,
        absolute_magnitude,
        radius_solar,
    }
}

/// The survey's 35-entry reference table, indexed by catalog index.
#[rustfmt::skip]
pub(crate) static CATALOG: [ClassProperties; 35] = [
    row("A0", 9700.0,  0.7, 2.29),
    row("A1", 9300.0,  0.9, 2.21),
    row("A2", 8800.0,  1.1, 2.12),
    row("A3", 8600.0,  1.3, 1.97),
    row("A4", 8250.0,  1.5, 1.88),
    row("A5", 8100.0,  1.7, 1.79),
    row("A7", 7800.0,  2.0, 1.66),
    row("F0", 7200.0,  2.5, 1.51),
    row("F2", 6950.0,  2.8, 1.44),
    row("F3", 6750.0,  3.0, 1.39),
    row("F5", 6550.0,  3.3, 1.32),
    row("F6", 6350.0,  3.6, 1.28),
    row("F7", 6280.0,  3.8, 1.24),
    row("F8", 6180.0,  4.0, 1.18),
    row("G0", 5940.0,  4.4, 1.06),
    row("G1", 5860.0,  4.5, 1.03),
    row("G2", 5790.0,  4.7, 1.00),
    row("G5", 5660.0,  5.0, 0.93),
    row("G8", 5440.0,  5.3, 0.87),
    row("K0", 5240.0,  0.7, 0.83),
    row("K1", 5110.0,  0.6, 0.80),
    row("K2", 4960.0,  0.5, 0.76),
    row("K3", 4800.0,  0.3, 0.73),
    row("K4", 4600.0,  0.1, 0.70),
    row("K5", 4400.0, -0.2, 0.67),
    row("K7", 4000.0, -0.3, 0.61),
    row("M0", 3750.0, -0.4, 0.56),
    row("M1", 3700.0, -0.5, 0.49),
    row("M2", 3600.0, -0.6, 0.44),
    row("M3", 3500.0, -0.6, 0.39),
    row("M4", 3400.0, -0.5, 0.26),
    row("M5", 3200.0, -0.3, 0.20),
    row("M6", 3100.0, -0.2, 0.15),
    row("M7", 2900.0, -0.2, 0.12),
    row("M8", 2700.0, -0.2, 0.11),
];
