use chrono::Duration;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Latitude band used to select the seasonal day-length correction tables
/// for the DMC and DC accumulators. Bands follow the published regional
/// adaptations of the FWI System outside Canada.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum LatitudeBand {
    /// North of 30°N
    NorthHigh,
    /// 10°N to 30°N
    NorthLow,
    /// 10°S to 10°N
    Equatorial,
    /// 30°S to 10°S
    SouthLow,
    /// South of 30°S
    SouthHigh,
}

impl LatitudeBand {
    /// Band for a latitude in radians.
    pub fn from_radians(latitude: f64) -> Self {
        if latitude >= 30.0_f64.to_radians() {
            LatitudeBand::NorthHigh
        } else if latitude <= (-30.0_f64).to_radians() {
            LatitudeBand::SouthHigh
        } else if latitude >= 10.0_f64.to_radians() {
            LatitudeBand::NorthLow
        } else if latitude <= (-10.0_f64).to_radians() {
            LatitudeBand::SouthLow
        } else {
            LatitudeBand::Equatorial
        }
    }
}

// Soft clamps: the moisture physics is only defined over these ranges, so
// extreme but physically-plausible inputs are clamped, never rejected.

pub fn clamp_temperature(temperature: f64) -> f64 {
    temperature.clamp(-50.0, 60.0)
}

pub fn clamp_rh_fraction(rh: f64) -> f64 {
    rh.clamp(0.0, 1.0)
}

pub fn clamp_wind_speed(ws: f64) -> f64 {
    ws.clamp(0.0, 200.0)
}

/// FFMC/moisture conversion factor for an elapsed time span.
///
/// Exact multiples of an hour use the historical 147.2; fractional spans
/// use 147.27723, which makes the moisture conversion self-inverse. The
/// published equations carry both constants and consumers expect the
/// pairing to hold.
pub fn hour_fraction_factor(ts: Duration) -> f64 {
    let hour_frac = ts.num_seconds() as f64 / 60.0 / 60.0;
    let hour_frac2 = hour_frac - hour_frac.floor();
    if hour_frac2 > 1e-4 {
        147.27723
    } else {
        147.2
    }
}

/// Fine fuel moisture content (%) from an FFMC value.
pub fn moisture_from_ffmc(ffmc: f64, factor: f64) -> f64 {
    factor * (101.0 - ffmc) / (59.5 + ffmc)
}

/// FFMC value from a fine fuel moisture content (%), clamped to [0, 101].
pub fn ffmc_from_moisture(moisture: f64, factor: f64) -> f64 {
    let ffmc = 59.5 * (250.0 - moisture) / (factor + moisture);
    ffmc.clamp(0.0, 101.0)
}
