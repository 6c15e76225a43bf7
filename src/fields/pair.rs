use crate::materials::Medium;
use crate::math::{R2, Scalar};
use crate::units::{FieldStrength, Voltage};

use super::line_pair::{e_mag, ex, ez, k, voltage};

/// Geometry of an anode/cathode pair of parallel line charges sharing one x coordinate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChargePair {
    /// Common x coordinate of both lines in meters.
    pub x: Scalar,
    /// z coordinate of the anode in meters.
    pub z_anode: Scalar,
    /// z coordinate of the cathode in meters.
    pub z_cathode: Scalar,
}

impl LineChargePair {
    /// Creates a pair at `x` with the anode at `z_anode` and the cathode at `z_cathode`.
    #[must_use]
    pub const fn new(x: Scalar, z_anode: Scalar, z_cathode: Scalar) -> Self {
        Self {
            x,
            z_anode,
            z_cathode,
        }
    }

    /// Anode location in the cross-section.
    #[must_use]
    pub fn anode(&self) -> R2 {
        R2::new(self.x, self.z_anode)
    }

    /// Cathode location in the cross-section.
    #[must_use]
    pub fn cathode(&self) -> R2 {
        R2::new(self.x, self.z_cathode)
    }

    /// Same line positions with anode and cathode exchanged.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.x, self.z_cathode, self.z_anode)
    }
}

/// A line-charge pair together with its precomputed multiplier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairField {
    /// Electrode geometry.
    pub pair: LineChargePair,
    /// Multiplier `ρ / (4π ε₀ εr)` in volts.
    pub k: Scalar,
}

/// Potential and field evaluated at a single cross-section point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Probe location (x, z) in meters.
    pub point: R2,
    /// Potential in volts.
    pub voltage: Scalar,
    /// Field vector (Ex, Ez) in V/m.
    pub field: R2,
    /// Field magnitude in V/m.
    pub magnitude: Scalar,
}

impl FieldSample {
    /// True when every evaluated quantity is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.voltage.is_finite() && self.field.iter().all(|c| c.is_finite()) && self.magnitude.is_finite()
    }
}

impl PairField {
    /// Wraps `pair` with an already computed multiplier.
    #[must_use]
    pub const fn new(pair: LineChargePair, k: Scalar) -> Self {
        Self { pair, k }
    }

    /// Computes the multiplier from the linear charge density (C/m) and the medium.
    #[must_use]
    pub fn from_charge(pair: LineChargePair, charge_density: Scalar, medium: &Medium) -> Self {
        Self::new(pair, k(charge_density, medium.relative_permittivity))
    }

    /// Potential at `point`.
    #[must_use]
    pub fn potential(&self, point: R2) -> Voltage<Scalar> {
        let p = &self.pair;
        Voltage::new(voltage(point.x, point.y, p.x, p.z_anode, p.z_cathode, self.k))
    }

    /// x component of the field at `point` in V/m.
    #[must_use]
    pub fn ex(&self, point: R2) -> Scalar {
        let p = &self.pair;
        ex(point.x, point.y, p.x, p.z_anode, p.z_cathode, self.k)
    }

    /// z component of the field at `point` in V/m.
    #[must_use]
    pub fn ez(&self, point: R2) -> Scalar {
        let p = &self.pair;
        ez(point.x, point.y, p.x, p.z_anode, p.z_cathode, self.k)
    }

    /// Field vector (Ex, Ez) at `point`.
    #[must_use]
    pub fn field(&self, point: R2) -> R2 {
        R2::new(self.ex(point), self.ez(point))
    }

    /// Field magnitude at `point`.
    #[must_use]
    pub fn field_magnitude(&self, point: R2) -> FieldStrength<Scalar> {
        let p = &self.pair;
        FieldStrength::new(e_mag(point.x, point.y, p.x, p.z_anode, p.z_cathode, self.k))
    }

    /// Evaluates potential, field and magnitude at `point`.
    #[must_use]
    pub fn sample(&self, point: R2) -> FieldSample {
        let field = self.field(point);
        FieldSample {
            point,
            voltage: self.potential(point).value(),
            field,
            magnitude: field.norm(),
        }
    }
}
