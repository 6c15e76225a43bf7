//! Convenience re-exports for field evaluations.

pub use crate::constants::*;
pub use crate::errors::ElectrostaticsError;
pub use crate::fields::{e_mag, ex, ez, k, voltage, FieldSample, LineChargePair, PairField};
pub use crate::materials::Medium;
pub use crate::math::{point, R2, Scalar};
pub use crate::sweep::{linspace, sample_field_map, sweep_map, GridError, GridSpec};
pub use crate::units::{
    CoulombPerMeter, FieldStrength, Length, LineChargeDensity, Meter, Quantity, Unit, Volt,
    VoltPerMeter, Voltage,
};
