use crate::modules::functions::LatitudeBand;

/// Hard domain ceiling for rain [mm]
pub const MAX_RAIN: f64 = 600.0;
/// Rain below this causes no wetting [mm]
pub const MIN_RAIN: f64 = 1.5;
/// No drying below this temperature [°C]
pub const MIN_TEMP: f64 = -1.1;

// Drying phase
pub const DRY_T1: f64 = 1.894;

// Rain phase
pub const RAIN_R1: f64 = 0.92;
pub const RAIN_R2: f64 = 1.27;
pub const RAIN_R3: f64 = 5.6348;
pub const RAIN_R4: f64 = 43.43;
pub const RAIN_R5: f64 = 20.0;
pub const RAIN_R6: f64 = 48.77;
// piecewise log-linear approximation of the effective-rain curve
pub const CODE_LOW: f64 = 33.0;
pub const CODE_HIGH: f64 = 65.0;

// Seasonal day-length factors per latitude band, January..December.
const EL_NORTH_HIGH: [f64; 12] = [
    6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0,
];
const EL_NORTH_LOW: [f64; 12] = [
    7.9, 8.4, 8.9, 9.5, 9.9, 10.2, 10.1, 9.7, 9.1, 8.6, 8.1, 7.8,
];
const EL_EQUATORIAL: [f64; 12] = [9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0];
const EL_SOUTH_LOW: [f64; 12] = [
    10.1, 9.6, 9.1, 8.5, 8.1, 7.8, 7.9, 8.3, 8.9, 9.4, 9.9, 10.2,
];
const EL_SOUTH_HIGH: [f64; 12] = [
    11.5, 10.5, 9.2, 7.9, 6.8, 6.2, 6.5, 7.4, 8.7, 10.0, 11.2, 11.8,
];

/// Day-length factor for a latitude band and zero-based month.
pub fn day_length_factor(band: LatitudeBand, month: usize) -> f64 {
    match band {
        LatitudeBand::NorthHigh => EL_NORTH_HIGH[month],
        LatitudeBand::NorthLow => EL_NORTH_LOW[month],
        LatitudeBand::Equatorial => EL_EQUATORIAL[month],
        LatitudeBand::SouthLow => EL_SOUTH_LOW[month],
        LatitudeBand::SouthHigh => EL_SOUTH_HIGH[month],
    }
}
