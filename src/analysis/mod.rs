//! Analysis module - risk tiers, percentile bands, thermal field and forecasts

mod classification;
mod forecast;
mod statistics;
mod thermal;

pub use classification::*;
pub use forecast::*;
pub use statistics::*;
pub use thermal::*;
