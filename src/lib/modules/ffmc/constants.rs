// Van Wagner fine fuel moisture model constants.

/// Moisture content cap [%]
pub const MOISTURE_MAX: f64 = 250.0;
/// Hard domain ceiling for rain in the sub-daily model [mm]
pub const SUBDAILY_MAX_RAIN: f64 = 300.0;
/// Hard domain ceiling for rain in the daily model [mm]
pub const DAILY_MAX_RAIN: f64 = 600.0;
/// Longest elapsed time the sub-daily model accepts [s]
pub const SUBDAILY_MAX_SECONDS: u32 = 7200;

// Rain phase
/// Effective-rain threshold of the daily model [mm]
pub const DAILY_MIN_RAIN: f64 = 0.5;
/// Moisture above which the daily rain response gains a quadratic term [%]
pub const SATURATION_MOISTURE: f64 = 150.0;
pub const RAIN_R1: f64 = 42.5;
pub const RAIN_R2: f64 = 6.93;
pub const RAIN_R3: f64 = 0.0015;

// Equilibrium moisture content
pub const EMC_A1D: f64 = 0.942;
pub const EMC_A2D: f64 = 0.679;
pub const EMC_A3D: f64 = 11.0;
pub const EMC_A1W: f64 = 0.618;
pub const EMC_A2W: f64 = 0.753;
pub const EMC_A3W: f64 = 10.0;
pub const EMC_A4: f64 = 0.18;
pub const EMC_A5: f64 = 0.115;

// Drying/wetting rate
pub const RATE_B1: f64 = 0.424;
pub const RATE_B2: f64 = 1.7;
pub const RATE_B3: f64 = 0.0694;
pub const RATE_B5: f64 = 8.0;
pub const RATE_B7: f64 = 0.0365;
/// Rate scale of the single-step daily model
pub const RATE_DAILY: f64 = 0.581;
/// Rate scale of the per-hour-fraction sub-daily model
pub const RATE_SUBDAILY: f64 = 0.0579;

/// Moisture conversion factor of the daily model
pub const DAILY_FACTOR: f64 = 147.2;

// Previous-hour inversion
/// Convergence tolerance on the forward-model output
pub const BISECTION_TOLERANCE: f64 = 1e-7;
/// Step ceiling; exceeding it is treated as divergence
pub const MAX_BISECTION_STEPS: u32 = 200;
