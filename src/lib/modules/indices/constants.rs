// FF (fine fuel moisture function)
pub const FF_A1: f64 = 91.9;
pub const FF_A2: f64 = -0.1386;
pub const FF_A3: f64 = 5.31;
pub const FF_A4: f64 = 49_300_000.0;

// ISI
pub const ISI_WIND: f64 = 0.05039;
pub const ISI_SCALE: f64 = 0.208;
/// Wind speed where the FBP variant switches to the saturating curve [kph]
pub const ISI_FBP_WIND_CAP: f64 = 40.0;
pub const ISI_FBP_F1: f64 = 12.0;
pub const ISI_FBP_F2: f64 = 0.0818;
pub const ISI_FBP_F3: f64 = 28.0;

// BUI
pub const BUI_A1: f64 = 0.8;
pub const BUI_A2: f64 = 0.4;
pub const BUI_A3: f64 = 0.92;
pub const BUI_A4: f64 = 0.0114;
pub const BUI_A5: f64 = 1.7;

// FWI
/// BUI above which the buildup function switches branch
pub const FWI_BUI_SPLIT: f64 = 80.0;
pub const FWI_A1: f64 = 0.626;
pub const FWI_A2: f64 = 0.809;
pub const FWI_A3: f64 = 2.0;
pub const FWI_A4: f64 = 25.0;
pub const FWI_A5: f64 = 108.64;
pub const FWI_A6: f64 = 0.023;
pub const FWI_A7: f64 = 2.72;
pub const FWI_A8: f64 = 0.434;
pub const FWI_A9: f64 = 0.647;

// DSR
pub const DSR_A1: f64 = 0.0272;
pub const DSR_A2: f64 = 1.77;
