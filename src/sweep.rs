//! Grid sampling helpers for building field maps over a cross-section.

use thiserror::Error;

use crate::fields::{FieldSample, PairField};
use crate::math::{point, R2, Scalar};

/// Errors raised by an invalid [`GridSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Raised when an axis has zero samples.
    #[error("grid axis {axis} needs at least one sample")]
    EmptyAxis {
        /// Axis name, `"x"` or `"z"`.
        axis: &'static str,
    },
    /// Raised when an axis bound is NaN or infinite.
    #[error("grid axis {axis} has a non-finite bound")]
    NonFiniteBound {
        /// Axis name, `"x"` or `"z"`.
        axis: &'static str,
    },
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Rectangular sampling grid over the (x, z) cross-section, bounds inclusive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Lower x bound in meters.
    pub x_min: Scalar,
    /// Upper x bound in meters.
    pub x_max: Scalar,
    /// Sample count along x.
    pub nx: usize,
    /// Lower z bound in meters.
    pub z_min: Scalar,
    /// Upper z bound in meters.
    pub z_max: Scalar,
    /// Sample count along z.
    pub nz: usize,
}

impl GridSpec {
    /// Checks sample counts and bounds.
    pub fn validate(&self) -> Result<(), GridError> {
        for (axis, min, max, n) in [
            ("x", self.x_min, self.x_max, self.nx),
            ("z", self.z_min, self.z_max, self.nz),
        ] {
            if n == 0 {
                return Err(GridError::EmptyAxis { axis });
            }
            if !min.is_finite() || !max.is_finite() {
                return Err(GridError::NonFiniteBound { axis });
            }
        }
        Ok(())
    }

    /// Total number of grid points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nx * self.nz
    }

    /// True if the grid holds no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid points in row-major order: z outer, x inner.
    pub fn points(&self) -> Result<Vec<R2>, GridError> {
        self.validate()?;
        let xs = linspace(self.x_min, self.x_max, self.nx);
        let zs = linspace(self.z_min, self.z_max, self.nz);
        Ok(zs
            .iter()
            .flat_map(|&z| xs.iter().map(move |&x| point(x, z)))
            .collect())
    }
}

/// Applies `f` to each point and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(points: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = R2>,
    F: FnMut(R2) -> T,
{
    points.into_iter().map(f).collect()
}

/// Samples potential and field of `source` on every point of `grid`.
///
/// Points that land on an electrode or a field pole are kept with their NaN or
/// infinite values; only their count is logged.
pub fn sample_field_map(source: &PairField, grid: &GridSpec) -> Result<Vec<FieldSample>, GridError> {
    let samples = sweep_map(grid.points()?, |p| source.sample(p));
    let singular = samples.iter().filter(|s| !s.is_finite()).count();
    if singular > 0 {
        log::debug!(
            "field map {}x{}: {} of {} samples non-finite",
            grid.nx,
            grid.nz,
            singular,
            samples.len()
        );
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::LineChargePair;
    use approx::assert_relative_eq;

    fn grid(nx: usize, nz: usize) -> GridSpec {
        GridSpec {
            x_min: 0.2,
            x_max: 0.9,
            nx,
            z_min: -0.5,
            z_max: 0.5,
            nz,
        }
    }

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn validate_rejects_bad_grids() {
        assert_eq!(grid(0, 3).validate(), Err(GridError::EmptyAxis { axis: "x" }));
        assert_eq!(grid(3, 0).validate(), Err(GridError::EmptyAxis { axis: "z" }));
        let mut g = grid(2, 2);
        g.z_max = Scalar::NAN;
        assert_eq!(g.validate(), Err(GridError::NonFiniteBound { axis: "z" }));
        assert!(grid(1, 1).validate().is_ok());
    }

    #[test]
    fn points_are_row_major() {
        let pts = grid(3, 2).points().unwrap();
        assert_eq!(pts.len(), 6);
        assert_relative_eq!(pts[0], point(0.2, -0.5));
        assert_relative_eq!(pts[1], point(0.55, -0.5), epsilon = 1.0e-12);
        assert_relative_eq!(pts[3], point(0.2, 0.5));
    }

    #[test]
    fn field_map_matches_pointwise_samples() {
        let source = PairField::new(LineChargePair::new(0.0, 1.0, -1.0), 0.8988);
        let g = grid(4, 3);
        let map = sample_field_map(&source, &g).unwrap();
        assert_eq!(map.len(), g.len());
        for s in &map {
            assert_eq!(*s, source.sample(s.point));
        }
    }

    #[test]
    fn field_map_keeps_singular_samples() {
        // x = 0.5, z = 0.5 sits on the anode pole locus.
        let source = PairField::new(LineChargePair::new(0.0, 1.0, -1.0), 0.8988);
        let g = GridSpec {
            x_min: 0.5,
            x_max: 0.5,
            nx: 1,
            z_min: 0.5,
            z_max: 0.5,
            nz: 1,
        };
        let map = sample_field_map(&source, &g).unwrap();
        assert_eq!(map.len(), 1);
        assert!(!map[0].is_finite());
    }

    #[test]
    fn sample_field_map_surfaces_grid_errors() {
        let source = PairField::new(LineChargePair::new(0.0, 1.0, -1.0), 1.0);
        let err = sample_field_map(&source, &grid(0, 1)).unwrap_err();
        assert_eq!(err, GridError::EmptyAxis { axis: "x" });
    }
}
