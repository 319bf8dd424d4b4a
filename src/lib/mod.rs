//! Numeric engine for the Canadian Forest Fire Weather Index System.
//!
//! The moisture codes (FFMC in sub-daily, daily and diurnally adjusted
//! forms, DMC, DC) and the derived indices (ISI in both FWI and FBP
//! forms, BUI, FWI, DSR) are implemented as pure functions over plain
//! numeric inputs. [`calculator`] is the validated entry point; the
//! model internals live under [`modules`].
//!
//! Conventions at the public boundary: relative humidity is a fraction
//! in [0, 1], temperatures are in °C, wind speeds in km/h, rain in mm,
//! latitude and longitude in radians, months zero-based, time offsets in
//! whole seconds.

pub mod calculator;
pub mod error;
pub mod modules;

pub use error::{CalcError, CalcResult};
pub use modules::functions::LatitudeBand;
