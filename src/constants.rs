//! Baseline physical constants.
//!
//! ## Accuracy
//!
//! ε₀ is a measured constant since the 2019 SI revision; the value below carries 11
//! significant figures, which is well beyond the precision of soil permittivity data.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019.

use std::f64::consts::PI;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
/// Note: CODATA 2022 value is 8.8541878188 × 10⁻¹² F/m with relative uncertainty ~10⁻¹⁰.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Returns `4π ε₀ εr`, the denominator of the line-charge multiplier, in F/m.
#[inline]
#[must_use]
pub fn four_pi_permittivity(relative_permittivity: f64) -> f64 {
    4.0 * PI * VACUUM_PERMITTIVITY * relative_permittivity
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn four_pi_epsilon_zero_matches_coulomb_constant() {
        // 1 / (4π ε₀) is Coulomb's constant, 8.9875517923e9 N·m²/C².
        let coulomb = 1.0 / four_pi_permittivity(1.0);
        assert_relative_eq!(coulomb, 8.987_551_792_3e9, max_relative = 1.0e-9);
    }
}
