//! Validation boundary over the index models: one fallible operation per
//! model, with interface-level range checks the models themselves do not
//! perform. Relative humidity crosses this boundary as a fraction in
//! [0, 1]; time offsets cross it as whole seconds.

use chrono::Duration;

use crate::error::{CalcError, CalcResult};
use crate::modules::ffmc::constants::SUBDAILY_MAX_SECONDS;
use crate::modules::ffmc::{functions as ffmc, lawson};
use crate::modules::indices::functions as indices;
use crate::modules::{dc, dmc};

/// Seconds in a full day, the ceiling for diurnal lookups.
const SECONDS_PER_DAY: u32 = 86_400;

// The index algebra cannot reject its inputs, but a non-finite result
// still must not escape as a plain number.
fn finite(value: f64) -> CalcResult {
    if value.is_finite() {
        Ok(value)
    } else {
        log::warn!("index calculation produced a non-finite value");
        Err(CalcError::Internal)
    }
}

/// Sub-daily FFMC after `seconds_since_ffmc` of exposure to the given
/// weather. The elapsed time may not exceed two hours.
pub fn hourly_ffmc_van_wagner(
    in_ffmc: f64,
    rain: f64,
    temperature: f64,
    rh: f64,
    ws: f64,
    seconds_since_ffmc: u32,
) -> CalcResult {
    if seconds_since_ffmc > SUBDAILY_MAX_SECONDS {
        return Err(CalcError::OutOfRange);
    }
    let ts = Duration::seconds(i64::from(seconds_since_ffmc));
    ffmc::subdaily_ffmc_van_wagner(ts, in_ffmc, rain, temperature, rh, ws)
}

/// FFMC one hour before `current_ffmc`, given the weather over that hour.
pub fn previous_hourly_ffmc_van_wagner(
    current_ffmc: f64,
    rain: f64,
    temperature: f64,
    rh: f64,
    ws: f64,
) -> CalcResult {
    ffmc::previous_hourly_ffmc_van_wagner(current_ffmc, rain, temperature, rh, ws)
}

/// Standard daily FFMC from yesterday's value and 24 h of weather.
pub fn daily_ffmc_van_wagner(
    in_ffmc: f64,
    rain: f64,
    temperature: f64,
    rh: f64,
    ws: f64,
) -> CalcResult {
    ffmc::daily_ffmc_van_wagner(in_ffmc, rain, temperature, rh, ws)
}

/// Diurnally adjusted FFMC at a time of day, without overnight blending.
/// Before noon the previous day's standard value drives the lookup, from
/// noon the current day's.
pub fn hourly_ffmc_lawson(
    prev_ffmc: f64,
    curr_ffmc: f64,
    rh: f64,
    seconds_into_day: u32,
) -> CalcResult {
    if seconds_into_day > SECONDS_PER_DAY {
        return Err(CalcError::OutOfRange);
    }
    let ts = Duration::seconds(i64::from(seconds_into_day));
    let rh_percent = rh * 100.0;
    lawson::hourly_ffmc_lawson_contiguous(
        prev_ffmc, curr_ffmc, ts, rh_percent, rh_percent, rh_percent, false,
    )
}

/// Diurnally adjusted FFMC with the overnight transition blended between
/// the floor-hour and next-hour lookups. `rh_0`, `rh_t` and `rh_1` are
/// the humidities at the floor hour, the query time and the next hour.
pub fn hourly_ffmc_lawson_contiguous(
    prev_ffmc: f64,
    curr_ffmc: f64,
    rh_0: f64,
    rh_t: f64,
    rh_1: f64,
    seconds_into_day: u32,
) -> CalcResult {
    if seconds_into_day > SECONDS_PER_DAY {
        return Err(CalcError::OutOfRange);
    }
    let ts = Duration::seconds(i64::from(seconds_into_day));
    lawson::hourly_ffmc_lawson_contiguous(
        prev_ffmc,
        curr_ffmc,
        ts,
        rh_0 * 100.0,
        rh_t * 100.0,
        rh_1 * 100.0,
        true,
    )
}

/// Next-day duff moisture code. `latitude` and `longitude` are in
/// radians, `month` is zero-based.
pub fn dmc(
    in_dmc: f64,
    rain: f64,
    temperature: f64,
    latitude: f64,
    longitude: f64,
    month: usize,
    rh: f64,
) -> CalcResult {
    if month > 11 {
        return Err(CalcError::OutOfRange);
    }
    dmc::functions::update_dmc(in_dmc, rain, temperature, latitude, longitude, month, rh)
}

/// Next-day drought code. `latitude` and `longitude` are in radians,
/// `month` is zero-based.
pub fn dc(
    in_dc: f64,
    rain: f64,
    temperature: f64,
    latitude: f64,
    longitude: f64,
    month: usize,
) -> CalcResult {
    if month > 11 {
        return Err(CalcError::OutOfRange);
    }
    dc::functions::update_dc(in_dc, rain, temperature, latitude, longitude, month)
}

/// Fine fuel moisture function for an FFMC observed `seconds_since_ffmc`
/// ago.
pub fn ff(ffmc: f64, seconds_since_ffmc: u32) -> CalcResult {
    let ts = Duration::seconds(i64::from(seconds_since_ffmc));
    finite(indices::compute_ff(ts, ffmc))
}

/// Initial spread index, standard FWI System form.
pub fn isi_fwi(ffmc: f64, ws: f64, seconds_since_ffmc: u32) -> CalcResult {
    let ts = Duration::seconds(i64::from(seconds_since_ffmc));
    finite(indices::compute_isi(indices::compute_ff(ts, ffmc), ws))
}

/// Initial spread index, FBP System form with the saturating wind term.
pub fn isi_fbp(ffmc: f64, ws: f64, seconds_since_ffmc: u32) -> CalcResult {
    let ts = Duration::seconds(i64::from(seconds_since_ffmc));
    finite(indices::compute_isi_fbp(indices::compute_ff(ts, ffmc), ws))
}

/// Buildup index from the drought and duff moisture codes.
pub fn bui(dc: f64, dmc: f64) -> CalcResult {
    finite(indices::compute_bui(dc, dmc))
}

/// Fire weather index from ISI and BUI.
pub fn fwi(isi: f64, bui: f64) -> CalcResult {
    finite(indices::compute_fwi(isi, bui))
}

/// Daily severity rating from the FWI.
pub fn dsr(fwi: f64) -> CalcResult {
    finite(indices::compute_dsr(fwi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn dry_afternoon_hour_raises_ffmc_moderately() {
        let out = hourly_ffmc_van_wagner(85.0, 0.0, 20.0, 0.45, 10.0, 3600)
            .expect("should compute");
        assert!(out > 80.0 && out < 90.0);
        // 45% humidity at 20 °C dries fuel that starts at FFMC 85
        assert!(out > 85.0);
    }

    #[test]
    fn previous_hour_inverts_the_forward_model() {
        let current = hourly_ffmc_van_wagner(85.0, 0.0, 20.0, 0.45, 10.0, 3600)
            .expect("should compute");
        let recovered = previous_hourly_ffmc_van_wagner(current, 0.0, 20.0, 0.45, 10.0)
            .expect("should compute");
        assert_abs_diff_eq!(recovered, 85.0, epsilon = 1e-6);
    }

    #[test]
    fn elapsed_time_over_two_hours_is_rejected() {
        assert!(hourly_ffmc_van_wagner(85.0, 0.0, 20.0, 0.45, 10.0, 7200).is_ok());
        assert_eq!(
            hourly_ffmc_van_wagner(85.0, 0.0, 20.0, 0.45, 10.0, 7201),
            Err(CalcError::OutOfRange)
        );
    }

    #[test]
    fn lawson_time_of_day_over_a_day_is_rejected() {
        assert!(hourly_ffmc_lawson(85.0, 88.0, 0.5, 86_400).is_ok());
        assert_eq!(
            hourly_ffmc_lawson(85.0, 88.0, 0.5, 86_401),
            Err(CalcError::OutOfRange)
        );
        assert_eq!(
            hourly_ffmc_lawson_contiguous(85.0, 88.0, 0.5, 0.5, 0.5, 86_401),
            Err(CalcError::OutOfRange)
        );
    }

    #[test]
    fn lawson_humidity_fraction_is_rescaled() {
        let via_adapter = hourly_ffmc_lawson(85.0, 88.0, 0.5, 8 * 3600).expect("should compute");
        let direct = crate::modules::ffmc::lawson::hourly_ffmc_lawson(
            85.0,
            Duration::hours(8),
            50.0,
        )
        .expect("should compute");
        assert_abs_diff_eq!(via_adapter, direct, epsilon = 1e-12);
    }

    #[test]
    fn contiguous_adapter_blends_overnight() {
        let blended = hourly_ffmc_lawson_contiguous(85.0, 88.0, 0.5, 0.5, 0.5, 8 * 3600 + 1800)
            .expect("should compute");
        let at_8 = hourly_ffmc_lawson(85.0, 88.0, 0.5, 8 * 3600).expect("should compute");
        let at_9 = hourly_ffmc_lawson(85.0, 88.0, 0.5, 9 * 3600).expect("should compute");
        assert_abs_diff_eq!(blended, (at_8 + at_9) / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn month_past_december_is_rejected() {
        let lat = std::f64::consts::FRAC_PI_4;
        assert!(dmc(25.0, 0.0, 20.0, lat, 0.0, 11, 0.4).is_ok());
        assert_eq!(
            dmc(25.0, 0.0, 20.0, lat, 0.0, 12, 0.4),
            Err(CalcError::OutOfRange)
        );
        assert!(dc(150.0, 0.0, 20.0, lat, 0.0, 11).is_ok());
        assert_eq!(
            dc(150.0, 0.0, 20.0, lat, 0.0, 12),
            Err(CalcError::OutOfRange)
        );
    }

    #[test]
    fn isi_composes_ff_and_wind() {
        let ff_value = ff(85.0, 3600).expect("should compute");
        let isi = isi_fwi(85.0, 10.0, 3600).expect("should compute");
        assert_relative_eq!(isi, 0.208 * ff_value * (0.05039 * 10.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn zero_inputs_yield_zero_fwi() {
        assert_eq!(bui(0.0, 25.0), Ok(0.0));
        assert_eq!(fwi(0.0, 0.0), Ok(0.0));
        assert_eq!(dsr(0.0), Ok(0.0));
    }

    #[test]
    fn full_daily_chain_produces_ordered_indices() {
        let lat = std::f64::consts::FRAC_PI_4;
        let ffmc = daily_ffmc_van_wagner(85.0, 0.0, 25.0, 0.35, 15.0).expect("should compute");
        let dmc_value = dmc(25.0, 0.0, 25.0, lat, 0.0, 6, 0.35).expect("should compute");
        let dc_value = dc(150.0, 0.0, 25.0, lat, 0.0, 6).expect("should compute");
        let isi = isi_fwi(ffmc, 15.0, 0).expect("should compute");
        let bui_value = bui(dc_value, dmc_value).expect("should compute");
        let fwi_value = fwi(isi, bui_value).expect("should compute");
        let dsr_value = dsr(fwi_value).expect("should compute");
        assert!(isi > 0.0);
        assert!(bui_value > 0.0);
        assert!(fwi_value > 0.0);
        assert!(dsr_value > 0.0);
    }
}
