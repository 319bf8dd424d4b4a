use super::constants::*;
use crate::error::{CalcError, CalcResult};
use crate::modules::functions::{clamp_temperature, LatitudeBand};

/// Next-day drought code from the previous day's value and the noon
/// weather observations.
///
/// Rain above 2.8 mm recharges the deep moisture equivalent through a
/// single smooth response curve; evapotranspiration then raises the code
/// by a day-length-adjusted temperature term. Longitude is accepted for
/// interface symmetry and reserved for future regional tables.
pub fn update_dc(
    in_dc: f64,
    rain: f64,
    temperature: f64,
    latitude: f64,
    _longitude: f64,
    month: usize,
) -> CalcResult {
    if in_dc < 0.0 || !(0.0..=MAX_RAIN).contains(&rain) {
        return Err(CalcError::OutOfRange);
    }

    let temperature = clamp_temperature(temperature);

    let band = LatitudeBand::from_radians(latitude);
    let fl = day_length_factor(band, month);

    // the evapotranspiration term alone is defined down to -2.8 °C
    let temperature = temperature.max(MIN_TEMP);
    let pe = (DRY_T1 * (temperature - MIN_TEMP) + fl) / 2.0;

    let dr = if rain <= MIN_RAIN {
        in_dc
    } else {
        let rw = RAIN_R1 * rain - RAIN_R2;
        let smi = RAIN_R3 * (-in_dc / RAIN_R4).exp();
        let dr = in_dc - RAIN_R4 * (1.0 + (RAIN_R5 * rw) / smi).ln();
        dr.max(0.0)
    };

    Ok((dr + pe).max(0.0))
}
