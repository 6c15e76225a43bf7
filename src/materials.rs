//! Medium property models.

use crate::constants::VACUUM_PERMITTIVITY;
use crate::errors::ElectrostaticsError;
use crate::fields;
use crate::math::Scalar;
use crate::units::Voltage;

/// Linear isotropic medium surrounding the electrodes, described by its average relative
/// permittivity (for a soil sample, the bulk value of the pore fluid and solids together).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    /// Relative permittivity εr (dimensionless).
    pub relative_permittivity: Scalar,
}

impl Medium {
    /// Free space, εr = 1.
    #[must_use]
    pub const fn vacuum() -> Self {
        Self {
            relative_permittivity: 1.0,
        }
    }

    /// Builds a medium, rejecting εr values that are not finite and strictly positive.
    pub fn new(relative_permittivity: Scalar) -> Result<Self, ElectrostaticsError> {
        if !relative_permittivity.is_finite() || relative_permittivity <= 0.0 {
            return Err(ElectrostaticsError::InvalidPermittivity(relative_permittivity));
        }
        Ok(Self {
            relative_permittivity,
        })
    }

    /// Absolute permittivity ε = εr ε₀ in F/m.
    #[must_use]
    pub fn permittivity(&self) -> Scalar {
        self.relative_permittivity * VACUUM_PERMITTIVITY
    }

    /// Line-charge multiplier for `charge_density` (C/m) in this medium.
    #[must_use]
    pub fn k(&self, charge_density: Scalar) -> Voltage<Scalar> {
        Voltage::new(fields::k(charge_density, self.relative_permittivity))
    }
}

impl Default for Medium {
    fn default() -> Self {
        Self::vacuum()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn vacuum_permittivity_matches_constant() {
        assert_relative_eq!(Medium::vacuum().permittivity(), VACUUM_PERMITTIVITY);
    }

    #[test]
    fn new_rejects_non_physical_permittivity() {
        for bad in [0.0, -4.0, Scalar::NAN, Scalar::INFINITY] {
            let err = Medium::new(bad).unwrap_err();
            assert!(matches!(err, ElectrostaticsError::InvalidPermittivity(_)));
        }
        assert!(Medium::new(80.0).is_ok());
    }

    #[test]
    fn k_matches_raw_formula() {
        let soil = Medium::new(10.0).unwrap();
        assert_relative_eq!(soil.k(1.0e-9).value(), fields::k(1.0e-9, 10.0));
    }
}
