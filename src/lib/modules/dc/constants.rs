use crate::modules::functions::LatitudeBand;

/// Hard domain ceiling for rain [mm]
pub const MAX_RAIN: f64 = 600.0;
/// Rain at or below this causes no wetting [mm]
pub const MIN_RAIN: f64 = 2.8;
/// Temperature floor for the evapotranspiration term [°C]
pub const MIN_TEMP: f64 = -2.8;

// Evapotranspiration phase
pub const DRY_T1: f64 = 0.36;

// Rain phase
pub const RAIN_R1: f64 = 0.83;
pub const RAIN_R2: f64 = 1.27;
pub const RAIN_R3: f64 = 800.0;
pub const RAIN_R4: f64 = 400.0;
pub const RAIN_R5: f64 = 3.937;

// Seasonal day-length factors, January..December. The drought code uses
// three bands only; the southern table is the northern one shifted by six
// months.
const FL_NORTH: [f64; 12] = [
    -1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6,
];
const FL_EQUATORIAL: [f64; 12] = [1.4, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4];
const FL_SOUTH: [f64; 12] = [
    6.4, 5.0, 2.4, 0.4, -1.6, -1.6, -1.6, -1.6, -1.6, 0.9, 3.8, 5.8,
];

/// Day-length factor for a latitude band and zero-based month.
pub fn day_length_factor(band: LatitudeBand, month: usize) -> f64 {
    match band {
        LatitudeBand::NorthHigh | LatitudeBand::NorthLow => FL_NORTH[month],
        LatitudeBand::Equatorial => FL_EQUATORIAL[month],
        LatitudeBand::SouthLow | LatitudeBand::SouthHigh => FL_SOUTH[month],
    }
}
