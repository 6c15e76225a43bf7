//! Electrostatic potential and field of line-charge electrode pairs.

mod line_pair;
mod pair;

pub use line_pair::{e_mag, ex, ez, k, voltage};
pub use pair::{FieldSample, LineChargePair, PairField};
