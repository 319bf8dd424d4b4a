use chrono::Duration;

use super::constants::*;
use crate::modules::functions::{hour_fraction_factor, moisture_from_ffmc};

/// Fine fuel moisture function, the FFMC sub-term shared by the ISI
/// variants. The elapsed time selects the moisture conversion factor the
/// same way the sub-daily FFMC model does.
pub fn compute_ff(ts: Duration, ffmc: f64) -> f64 {
    let factor = hour_fraction_factor(ts);
    let fm = moisture_from_ffmc(ffmc, factor);
    FF_A1 * (fm * FF_A2).exp() * (1.0 + fm.powf(FF_A3) / FF_A4)
}

/// Initial spread index from the fine fuel moisture function and wind.
pub fn compute_isi(ff: f64, ws: f64) -> f64 {
    ISI_SCALE * ff * (ISI_WIND * ws).exp()
}

/// FBP-system ISI variant: the wind multiplier saturates above 40 kph
/// instead of growing exponentially.
pub fn compute_isi_fbp(ff: f64, ws: f64) -> f64 {
    let fw = if ws <= ISI_FBP_WIND_CAP {
        (ISI_WIND * ws).exp()
    } else {
        ISI_FBP_F1 * (1.0 - (-ISI_FBP_F2 * (ws - ISI_FBP_F3)).exp())
    };
    ISI_SCALE * fw * ff
}

/// Buildup index from the drought and duff moisture codes. Zero whenever
/// either code is exactly zero; otherwise a weighted harmonic combination
/// with a taper whenever the naive result would fall below the DMC.
pub fn compute_bui(dc: f64, dmc: f64) -> f64 {
    if dmc == 0.0 || dc == 0.0 {
        return 0.0;
    }
    let mut bui = (BUI_A1 * dc * dmc) / (dmc + BUI_A2 * dc);
    if bui < dmc {
        let p = (dmc - bui) / dmc;
        let cc = BUI_A3 + (BUI_A4 * dmc).powf(BUI_A5);
        bui = (dmc - cc * p).max(0.0);
    }
    bui
}

/// Fire weather index from ISI and BUI. The intermediate intensity stays
/// untransformed when it is at most 1, which keeps the final log-log
/// transform inside its domain.
pub fn compute_fwi(isi: f64, bui: f64) -> f64 {
    let fd = if bui > FWI_BUI_SPLIT {
        1000.0 / (FWI_A4 + FWI_A5 / (FWI_A6 * bui).exp())
    } else {
        FWI_A1 * bui.powf(FWI_A2) + FWI_A3
    };
    let bb = 0.1 * isi * fd;
    if bb <= 1.0 {
        bb
    } else {
        (FWI_A7 * (FWI_A8 * bb.ln()).powf(FWI_A9)).exp()
    }
}

/// Daily severity rating, a power transform of the FWI.
pub fn compute_dsr(fwi: f64) -> f64 {
    DSR_A1 * fwi.powf(DSR_A2)
}
