use super::constants::*;
use crate::error::{CalcError, CalcResult};
use crate::modules::functions::{clamp_rh_fraction, clamp_temperature, LatitudeBand};

/// Next-day duff moisture code from the previous day's value and the noon
/// weather observations.
///
/// Rain above 1.5 mm rewets the duff layer through the inverted
/// effective-rain moisture curve; warm, dry air then dries it at a rate
/// weighted by the seasonal day length for the latitude band. Longitude
/// is accepted for interface symmetry and reserved for future regional
/// tables.
pub fn update_dmc(
    in_dmc: f64,
    rain: f64,
    temperature: f64,
    latitude: f64,
    _longitude: f64,
    month: usize,
    rh: f64,
) -> CalcResult {
    if in_dmc < 0.0 || !(0.0..=MAX_RAIN).contains(&rain) {
        return Err(CalcError::OutOfRange);
    }

    let temperature = clamp_temperature(temperature);
    let rh = clamp_rh_fraction(rh);

    let band = LatitudeBand::from_radians(latitude);
    let el = day_length_factor(band, month);

    let rk = if temperature < MIN_TEMP {
        0.0
    } else {
        DRY_T1 * (temperature - MIN_TEMP) * (1.0 - rh) * el * 0.01
    };

    let po = in_dmc;
    let pr = if rain > MIN_RAIN {
        let rw = RAIN_R1 * rain - RAIN_R2;
        let wmi = RAIN_R5 + (RAIN_R3 - po / RAIN_R4).exp();
        let b = if po <= CODE_LOW {
            100.0 / (0.5 + 0.3 * po)
        } else if po > CODE_HIGH {
            6.2 * po.ln() - 17.2
        } else {
            14.0 - 1.3 * po.ln()
        };
        let wmr = wmi + (1000.0 * rw) / (RAIN_R6 + b * rw);
        RAIN_R4 * (RAIN_R3 - (wmr - RAIN_R5).ln())
    } else {
        po
    };

    let pr = pr.max(0.0);
    Ok((pr + rk).max(0.0))
}
