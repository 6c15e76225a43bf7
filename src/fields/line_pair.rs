//! Closed-form potential and field of an anode/cathode pair of infinite line charges.
//!
//! Both lines run perpendicular to the (x, z) cross-section and share the same x
//! coordinate `x_pair`; the anode sits at `z_anode` and the cathode at `z_cathode`.
//! Every function takes the multiplier `k_` from [`k`] rather than recomputing it.
//!
//! Nothing here is guarded. A probe on a source, or on a pole of the field
//! denominators, yields NaN or ±∞ and the value is returned to the caller unchanged.

use crate::constants::four_pi_permittivity;
use crate::math::Scalar;

/// Line-charge multiplier `ρ / (4π ε₀ εr)` in volts.
///
/// `charge_density` is in C/m and carries the anode/cathode sign convention.
/// `relative_permittivity` is the average εr of the medium; a zero value divides by zero.
#[inline]
#[must_use]
pub fn k(charge_density: Scalar, relative_permittivity: Scalar) -> Scalar {
    charge_density / four_pi_permittivity(relative_permittivity)
}

/// Potential in volts at `(x, z)`: `k_ · ln(r_cathode² / r_anode²)`.
#[must_use]
pub fn voltage(x: Scalar, z: Scalar, x_pair: Scalar, z_anode: Scalar, z_cathode: Scalar, k_: Scalar) -> Scalar {
    let dx2 = (x - x_pair).powi(2);
    let to_cathode = dx2 + (z - z_cathode).powi(2);
    let to_anode = dx2 + (z - z_anode).powi(2);
    k_ * (to_cathode / to_anode).ln()
}

/// Squared-difference denominators `(anode, cathode)` shared by [`ex`] and [`ez`].
///
/// These are differences of squares, not squared distances. The form is kept as the
/// electrokinetic cell model states it; any change belongs with a domain review.
#[inline]
fn pole_terms(x: Scalar, z: Scalar, x_pair: Scalar, z_anode: Scalar, z_cathode: Scalar) -> (Scalar, Scalar) {
    let dx2 = (x - x_pair).powi(2);
    (dx2 - (z_anode - z).powi(2), dx2 - (z - z_cathode).powi(2))
}

/// x component of the electric field in V/m.
///
/// `2 k_ [1/((x−xp)² − (za−z)²) − 1/((x−xp)² − (z−zc)²)]`
#[must_use]
pub fn ex(x: Scalar, z: Scalar, x_pair: Scalar, z_anode: Scalar, z_cathode: Scalar, k_: Scalar) -> Scalar {
    let (anode, cathode) = pole_terms(x, z, x_pair, z_anode, z_cathode);
    2.0 * k_ * (1.0 / anode - 1.0 / cathode)
}

/// z component of the electric field in V/m.
///
/// `2 k_ [(z−za)/((x−xp)² − (za−z)²) − (zc−z)/((x−xp)² − (z−zc)²)]`
#[must_use]
pub fn ez(x: Scalar, z: Scalar, x_pair: Scalar, z_anode: Scalar, z_cathode: Scalar, k_: Scalar) -> Scalar {
    let (anode, cathode) = pole_terms(x, z, x_pair, z_anode, z_cathode);
    2.0 * k_ * ((z - z_anode) / anode - (z_cathode - z) / cathode)
}

/// Field magnitude in V/m, `sqrt(ex² + ez²)`.
#[must_use]
pub fn e_mag(x: Scalar, z: Scalar, x_pair: Scalar, z_anode: Scalar, z_cathode: Scalar, k_: Scalar) -> Scalar {
    let ex = ex(x, z, x_pair, z_anode, z_cathode, k_);
    let ez = ez(x, z, x_pair, z_anode, z_cathode, k_);
    (ex * ex + ez * ez).sqrt()
}
