//! Grid geometry description

use crate::error::CfdError;
use serde::{Deserialize, Serialize};

/// Description of a uniform 2D computational grid
///
/// This is only the geometry the caller hands to the engine; the grid data
/// structures themselves live on the native side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Grid points in the x direction
    pub nx: usize,
    /// Grid points in the y direction
    pub ny: usize,
    /// Minimum x coordinate
    pub xmin: f64,
    /// Maximum x coordinate
    pub xmax: f64,
    /// Minimum y coordinate
    pub ymin: f64,
    /// Maximum y coordinate
    pub ymax: f64,
}

impl GridSpec {
    /// A unit-square grid with the given resolution.
    pub fn unit_square(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        }
    }

    /// Reject geometries the engine would refuse (zero-sized axes,
    /// inverted or degenerate bounds, non-finite coordinates).
    pub fn validate(&self) -> Result<(), CfdError> {
        if self.nx == 0 || self.ny == 0 {
            return Err(CfdError::invalid_argument(format!(
                "grid dimensions must be positive, got {}x{}",
                self.nx, self.ny
            )));
        }
        let bounds = [self.xmin, self.xmax, self.ymin, self.ymax];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(CfdError::invalid_argument("grid bounds must be finite"));
        }
        if self.xmax <= self.xmin || self.ymax <= self.ymin {
            return Err(CfdError::invalid_argument(format!(
                "grid bounds must satisfy xmin < xmax and ymin < ymax, got x=[{}, {}] y=[{}, {}]",
                self.xmin, self.xmax, self.ymin, self.ymax
            )));
        }
        Ok(())
    }

    /// Number of cells in the flattened field arrays.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// True when either axis has zero points.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }

    /// Grid spacing along x.
    pub fn dx(&self) -> f64 {
        if self.nx > 1 {
            (self.xmax - self.xmin) / (self.nx - 1) as f64
        } else {
            0.0
        }
    }

    /// Grid spacing along y.
    pub fn dy(&self) -> f64 {
        if self.ny > 1 {
            (self.ymax - self.ymin) / (self.ny - 1) as f64
        } else {
            0.0
        }
    }

    /// Uniform node coordinates along x.
    pub fn x_coords(&self) -> Vec<f64> {
        let dx = self.dx();
        (0..self.nx).map(|i| self.xmin + i as f64 * dx).collect()
    }

    /// Uniform node coordinates along y.
    pub fn y_coords(&self) -> Vec<f64> {
        let dy = self.dy();
        (0..self.ny).map(|j| self.ymin + j as f64 * dy).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ErrorKind;

    #[test]
    fn test_unit_square_is_valid() {
        let grid = GridSpec::unit_square(10, 10);
        assert!(grid.validate().is_ok());
        assert_eq!(grid.len(), 100);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let grid = GridSpec::unit_square(0, 10);
        let err = grid.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.status_code(), -3);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let grid = GridSpec {
            xmin: 1.0,
            xmax: 0.0,
            ..GridSpec::unit_square(5, 5)
        };
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let grid = GridSpec {
            ymax: f64::NAN,
            ..GridSpec::unit_square(5, 5)
        };
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_coordinates_span_bounds() {
        let grid = GridSpec::unit_square(5, 3);
        let x = grid.x_coords();
        let y = grid.y_coords();
        assert_eq!(x.len(), 5);
        assert_eq!(y.len(), 3);
        assert_eq!(x[0], 0.0);
        assert_eq!(*x.last().unwrap(), 1.0);
        assert!((x[1] - 0.25).abs() < 1e-12);
        assert_eq!(*y.last().unwrap(), 1.0);
    }

    #[test]
    fn test_single_point_axis_has_zero_spacing() {
        let grid = GridSpec::unit_square(1, 4);
        assert_eq!(grid.dx(), 0.0);
        assert_eq!(grid.x_coords(), vec![0.0]);
    }
}
