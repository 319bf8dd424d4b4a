use chrono::Duration;

use super::tables::{
    hour_minute, main_lookup, morning_lookup, HIGH_RH, LOW_RH, MED_RH, RH_CLASS,
};
use crate::error::{CalcError, CalcResult};

/// Diurnally adjusted FFMC for a time of day, interpolated from the
/// Lawson grids around a standard daily FFMC.
///
/// `rh` is on the 0..100 scale here; the fraction-scale public interface
/// rescales before calling. During the morning window (06:00-11:59) the
/// humidity selects one of three grids, with the threshold row shifting
/// at the half hour; all other hours use the main grid, clamped to
/// [0, 101].
pub fn hourly_ffmc_lawson(ff_ffmc: f64, ts: Duration, rh: f64) -> CalcResult {
    if !(0.0..=101.0).contains(&ff_ffmc) {
        return Err(CalcError::OutOfRange);
    }

    let (hour, minutes) = hour_minute(ts);

    // 17.5 is the bottom of the published diurnal adjustment graphs
    let ff_ffmc = ff_ffmc.max(17.5);

    let rh = rh.clamp(0.0, 100.0);
    // the published thresholds are quoted to two decimals
    let rh = (rh * 100.0 + 0.5).floor() * 0.01;
    let rh = if rh < 1.0 { 95.0 } else { rh };

    if (6..=11).contains(&hour) {
        let mut tindex = 0;
        for (slot, bounds) in RH_CLASS[0].iter().enumerate() {
            if ((100 * hour) as f64) < bounds[0] {
                tindex = slot;
                break;
            }
        }
        // the class thresholds shift at the half hour
        let threshold_slot = if minutes <= 30 { tindex - 1 } else { tindex };
        let class = if rh > RH_CLASS[1][threshold_slot][0] {
            3
        } else if rh < RH_CLASS[3][threshold_slot][0] {
            1
        } else {
            2
        };

        let table = match class {
            1 => &LOW_RH,
            2 => &MED_RH,
            _ => &HIGH_RH,
        };
        Ok(morning_lookup(table, ts, ff_ffmc, tindex))
    } else {
        Ok(main_lookup(ts, ff_ffmc).clamp(0.0, 101.0))
    }
}

/// Lawson FFMC across the overnight transition between two daily
/// reference values.
///
/// Before 05:00 (or whenever `contiguous` is off) the previous day's
/// reference drives the lookup; from 12:00 the current day's does. In
/// between, the floor-hour and next-hour lookups are blended linearly by
/// the fractional seconds into the hour, the later lookup switching to
/// the current day exactly at 12:00. `rh_0`, `rh_t` and `rh_1` are the
/// humidities at the floor hour, the query time and the next hour, on
/// the 0..100 scale.
pub fn hourly_ffmc_lawson_contiguous(
    ff_ffmc_prev: f64,
    ff_ffmc_curr: f64,
    ts: Duration,
    rh_0: f64,
    rh_t: f64,
    rh_1: f64,
    contiguous: bool,
) -> CalcResult {
    if !(0.0..=101.0).contains(&ff_ffmc_prev)
        || !(0.0..=101.0).contains(&ff_ffmc_curr)
        || ts < Duration::hours(-12)
        || ts >= Duration::hours(35)
    {
        return Err(CalcError::OutOfRange);
    }

    if ts >= Duration::hours(12) {
        return hourly_ffmc_lawson(ff_ffmc_curr, ts, rh_t);
    }

    if ts <= Duration::hours(5) || !contiguous {
        return hourly_ffmc_lawson(ff_ffmc_prev, ts, rh_t);
    }

    let h0 = Duration::seconds(ts.num_seconds() - ts.num_seconds().rem_euclid(3600));
    if h0 == ts {
        return hourly_ffmc_lawson(ff_ffmc_prev, h0, rh_0);
    }

    let h1 = h0 + Duration::hours(1);
    let ffmc1 = hourly_ffmc_lawson(ff_ffmc_prev, h0, rh_0)?;
    let ffmc2 = if h1 == Duration::hours(12) {
        hourly_ffmc_lawson(ff_ffmc_curr, h1, rh_1)?
    } else {
        hourly_ffmc_lawson(ff_ffmc_prev, h1, rh_1)?
    };

    let sec = ts.num_seconds().rem_euclid(3600) as f64;
    Ok((ffmc2 * sec + ffmc1 * (3600.0 - sec)) / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn main_grid_is_identity_at_1600() {
        // the 1600 row of the main grid restates the FFMC axis
        for ffmc in [17.5, 30.0, 65.0, 85.0, 91.0] {
            let out = hourly_ffmc_lawson(ffmc, Duration::hours(16), 40.0)
                .expect("should compute");
            assert_abs_diff_eq!(out, ffmc, epsilon = 1e-9);
        }
    }

    #[test]
    fn morning_lookup_hits_grid_values() {
        // 08:00, rh 50%: medium class, 0800 row, FFMC 85 axis point
        let out = hourly_ffmc_lawson(85.0, Duration::hours(8), 50.0).expect("should compute");
        assert_abs_diff_eq!(out, 74.0, epsilon = 1e-9);
        // rh 80% crosses the high threshold (67) for the same slot
        let out = hourly_ffmc_lawson(85.0, Duration::hours(8), 80.0).expect("should compute");
        assert_abs_diff_eq!(out, 69.8, epsilon = 1e-9);
        // rh 30% falls below the low threshold (48)
        let out = hourly_ffmc_lawson(85.0, Duration::hours(8), 30.0).expect("should compute");
        assert_abs_diff_eq!(out, 76.9, epsilon = 1e-9);
    }

    #[test]
    fn half_hour_shifts_the_threshold_slot() {
        // at 08:31 the thresholds move to the 0900 slot (high at 62), so
        // rh 65% classifies high instead of medium
        let early = hourly_ffmc_lawson(85.0, Duration::hours(8) + Duration::minutes(20), 65.0)
            .expect("should compute");
        let late = hourly_ffmc_lawson(85.0, Duration::hours(8) + Duration::minutes(40), 65.0)
            .expect("should compute");
        let med_20 = morning_lookup(&MED_RH, Duration::hours(8) + Duration::minutes(20), 85.0, 3);
        let high_40 = morning_lookup(&HIGH_RH, Duration::hours(8) + Duration::minutes(40), 85.0, 3);
        assert_abs_diff_eq!(early, med_20, epsilon = 1e-9);
        assert_abs_diff_eq!(late, high_40, epsilon = 1e-9);
    }

    #[test]
    fn low_ffmc_is_floored_at_scale_bottom() {
        let floored = hourly_ffmc_lawson(5.0, Duration::hours(16), 40.0).expect("should compute");
        let bottom = hourly_ffmc_lawson(17.5, Duration::hours(16), 40.0).expect("should compute");
        assert_abs_diff_eq!(floored, bottom, epsilon = 1e-12);
    }

    #[test]
    fn near_zero_rh_defaults_to_95_percent() {
        let defaulted = hourly_ffmc_lawson(85.0, Duration::hours(8), 0.2).expect("should compute");
        let explicit = hourly_ffmc_lawson(85.0, Duration::hours(8), 95.0).expect("should compute");
        assert_abs_diff_eq!(defaulted, explicit, epsilon = 1e-12);
    }

    #[test]
    fn rejects_ffmc_outside_scale() {
        assert_eq!(
            hourly_ffmc_lawson(101.5, Duration::hours(10), 50.0),
            Err(CalcError::OutOfRange)
        );
        assert_eq!(
            hourly_ffmc_lawson(-0.5, Duration::hours(10), 50.0),
            Err(CalcError::OutOfRange)
        );
    }

    #[test]
    fn contiguous_rejects_out_of_window_times() {
        let err = hourly_ffmc_lawson_contiguous(
            85.0,
            87.0,
            Duration::hours(35),
            50.0,
            50.0,
            50.0,
            true,
        );
        assert_eq!(err, Err(CalcError::OutOfRange));
        let err = hourly_ffmc_lawson_contiguous(
            85.0,
            87.0,
            Duration::hours(-13),
            50.0,
            50.0,
            50.0,
            true,
        );
        assert_eq!(err, Err(CalcError::OutOfRange));
    }

    #[test]
    fn contiguous_matches_single_lookup_on_the_hour() {
        for hour in [6, 8, 10, 11] {
            let ts = Duration::hours(hour);
            let blended = hourly_ffmc_lawson_contiguous(85.0, 88.0, ts, 50.0, 50.0, 50.0, true)
                .expect("should compute");
            let single = hourly_ffmc_lawson(85.0, ts, 50.0).expect("should compute");
            assert_abs_diff_eq!(blended, single, epsilon = 1e-9);
        }
    }

    #[test]
    fn contiguous_switches_to_current_day_at_noon() {
        let ts = Duration::hours(12);
        let blended = hourly_ffmc_lawson_contiguous(85.0, 88.0, ts, 50.0, 50.0, 50.0, true)
            .expect("should compute");
        let current = hourly_ffmc_lawson(88.0, ts, 50.0).expect("should compute");
        assert_abs_diff_eq!(blended, current, epsilon = 1e-12);
    }

    #[test]
    fn contiguous_uses_previous_day_before_dawn() {
        let ts = Duration::hours(3);
        let blended = hourly_ffmc_lawson_contiguous(85.0, 88.0, ts, 50.0, 50.0, 50.0, true)
            .expect("should compute");
        let previous = hourly_ffmc_lawson(85.0, ts, 50.0).expect("should compute");
        assert_abs_diff_eq!(blended, previous, epsilon = 1e-12);
    }

    #[test]
    fn contiguous_blends_mid_hour() {
        let ts = Duration::hours(8) + Duration::minutes(30);
        let blended = hourly_ffmc_lawson_contiguous(85.0, 88.0, ts, 50.0, 50.0, 50.0, true)
            .expect("should compute");
        let at_8 = hourly_ffmc_lawson(85.0, Duration::hours(8), 50.0).expect("should compute");
        let at_9 = hourly_ffmc_lawson(85.0, Duration::hours(9), 50.0).expect("should compute");
        assert_abs_diff_eq!(blended, (at_8 + at_9) / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn non_contiguous_uses_previous_reference_before_noon() {
        let ts = Duration::hours(9) + Duration::minutes(15);
        let plain = hourly_ffmc_lawson_contiguous(85.0, 88.0, ts, 50.0, 50.0, 50.0, false)
            .expect("should compute");
        let direct = hourly_ffmc_lawson(85.0, ts, 50.0).expect("should compute");
        assert_abs_diff_eq!(plain, direct, epsilon = 1e-12);
    }
}
