use crate::error::{FinderError, Result};
use std::rc::Rc;

/// Read-only access to the two planar point sets being matched.
///
/// U and V are separate index spaces. A finder stores only indices and asks
/// the source for coordinates and distances every time it needs them, so the
/// data behind a source must not change while a finder uses it.
pub trait PointSource {
    /// Coordinates of the U point with the given index.
    fn u_point(&self, index: usize) -> [f64; 2];

    /// Coordinates of the V point with the given index.
    fn v_point(&self, index: usize) -> [f64; 2];

    /// Distance between a U point and a V point. Must be non-negative, symmetric
    /// and deterministic, and must not exceed `r` unless both coordinate
    /// differences are at most `r`.
    fn distance(&self, u_index: usize, v_index: usize) -> f64;
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn u_point(&self, index: usize) -> [f64; 2] {
        (**self).u_point(index)
    }

    fn v_point(&self, index: usize) -> [f64; 2] {
        (**self).v_point(index)
    }

    fn distance(&self, u_index: usize, v_index: usize) -> f64 {
        (**self).distance(u_index, v_index)
    }
}

impl<T: PointSource + ?Sized> PointSource for Rc<T> {
    fn u_point(&self, index: usize) -> [f64; 2] {
        (**self).u_point(index)
    }

    fn v_point(&self, index: usize) -> [f64; 2] {
        (**self).v_point(index)
    }

    fn distance(&self, u_index: usize, v_index: usize) -> f64 {
        (**self).distance(u_index, v_index)
    }
}

/// Planar distance used by [`PlanarPoints`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Largest coordinate difference (L-infinity), the usual choice for the
    /// bottleneck distance between persistence diagrams.
    Chebyshev,
}

impl Metric {
    pub fn eval(&self, a: [f64; 2], b: [f64; 2]) -> f64 {
        let dx = a[0] - b[0];
        let dy = a[1] - b[1];
        match self {
            Metric::Euclidean => dx.hypot(dy),
            Metric::Chebyshev => dx.abs().max(dy.abs()),
        }
    }
}

/// An owned pair of U and V point sets.
#[derive(Clone, Debug, Default)]
pub struct PlanarPoints {
    u: Vec<[f64; 2]>,
    v: Vec<[f64; 2]>,
    metric: Metric,
}

impl PlanarPoints {
    pub fn new(u: Vec<[f64; 2]>, v: Vec<[f64; 2]>) -> Self {
        Self::with_metric(u, v, Metric::Euclidean)
    }

    pub fn with_metric(u: Vec<[f64; 2]>, v: Vec<[f64; 2]>, metric: Metric) -> Self {
        Self { u, v, metric }
    }

    /// Builds the point sets from interleaved `[x0, y0, x1, y1, ...]` buffers.
    ///
    /// Every coordinate must be finite.
    pub fn from_flat(u_coords: &[f64], v_coords: &[f64]) -> Result<Self> {
        Ok(Self::new(pairs_from_flat(u_coords)?, pairs_from_flat(v_coords)?))
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn u_len(&self) -> usize {
        self.u.len()
    }

    pub fn v_len(&self) -> usize {
        self.v.len()
    }
}

impl PointSource for PlanarPoints {
    fn u_point(&self, index: usize) -> [f64; 2] {
        self.u[index]
    }

    fn v_point(&self, index: usize) -> [f64; 2] {
        self.v[index]
    }

    fn distance(&self, u_index: usize, v_index: usize) -> f64 {
        self.metric.eval(self.u[u_index], self.v[v_index])
    }
}

fn pairs_from_flat(coords: &[f64]) -> Result<Vec<[f64; 2]>> {
    if coords.len() % 2 != 0 {
        return Err(FinderError::OddCoordinateCount(coords.len()));
    }
    coords
        .chunks_exact(2)
        .enumerate()
        .map(|(index, c)| {
            if c[0].is_finite() && c[1].is_finite() {
                Ok([c[0], c[1]])
            } else {
                Err(FinderError::NonFiniteCoordinate { index })
            }
        })
        .collect()
}
