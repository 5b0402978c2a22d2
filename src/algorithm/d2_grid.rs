use crate::algorithm::{NeighborFinder, NULL_POINT_INDEX};
use crate::error::{FinderError, Result};
use crate::points::PointSource;
use rustc_hash::FxHashMap;

/// A planar neighbor finder based on a sparse uniform grid.
///
/// The plane is cut into square bins of side `r`, the near distance. Each bin
/// keeps the indices of the registered V points that fall into it, in
/// registration order. A point within distance `r` of a query always sits in
/// the query's own bin or one of its 8 neighbors, so a pull only scans 3x3 bins.
///
/// Coordinates are never cached: bins are recomputed from the point source on
/// every call.
#[derive(Clone, Debug)]
pub struct GridNeighborsFinder<P> {
    /// The external U/V point collection.
    points: P,
    /// Near distance, also the side length of a bin.
    r: f64,
    /// Non-empty bins, keyed by truncated coordinates.
    grid_bins: FxHashMap<(i64, i64), Vec<usize>>,
    /// Number of registered V points across all bins.
    count: usize,
}

impl<P: PointSource> GridNeighborsFinder<P> {
    /// Creates an empty finder for the near distance `r`.
    ///
    /// Fails if `r` is not a positive finite number.
    pub fn new(points: P, r: f64) -> Result<Self> {
        if !(r.is_finite() && r > 0.0) {
            return Err(FinderError::InvalidRadius(r));
        }
        log::debug!("creating grid neighbors finder with r = {}", r);
        Ok(GridNeighborsFinder {
            points,
            r,
            grid_bins: FxHashMap::default(),
            count: 0,
        })
    }

    pub fn points(&self) -> &P {
        &self.points
    }

    pub fn into_points(self) -> P {
        self.points
    }

    /// Number of non-empty bins.
    pub fn bin_count(&self) -> usize {
        self.grid_bins.len()
    }

    /// Registers every V point of the iterator, in order.
    pub fn add_all<I: IntoIterator<Item = usize>>(&mut self, v_point_indices: I) {
        for v_point_index in v_point_indices {
            self.add(v_point_index);
        }
    }

    /// Unregisters every point, keeping the radius and the point source.
    pub fn clear(&mut self) {
        log::debug!("clearing {} registered points", self.count);
        self.grid_bins.clear();
        self.count = 0;
    }

    fn get_v_key(&self, v_point_index: usize) -> (i64, i64) {
        get_bin_key(self.points.v_point(v_point_index), self.r)
    }

    /// Erases the entry at `pos` of the given bin and drops the bin once empty.
    fn remove_at(&mut self, key: (i64, i64), pos: usize) -> Option<usize> {
        let bin = self.grid_bins.get_mut(&key)?;
        let v_point_index = bin.remove(pos);
        if bin.is_empty() {
            self.grid_bins.remove(&key);
        }
        self.count -= 1;
        Some(v_point_index)
    }
}

impl<P: PointSource> NeighborFinder for GridNeighborsFinder<P> {
    fn radius(&self) -> f64 {
        self.r
    }

    fn add(&mut self, v_point_index: usize) {
        debug_assert!(v_point_index != NULL_POINT_INDEX, "cannot add the null point index");
        debug_assert!(!self.contains(v_point_index), "v{} is already registered", v_point_index);
        let key = self.get_v_key(v_point_index);
        self.grid_bins.entry(key).or_default().push(v_point_index);
        self.count += 1;
    }

    fn remove(&mut self, v_point_index: usize) {
        if v_point_index == NULL_POINT_INDEX {
            return;
        }
        let key = self.get_v_key(v_point_index);
        let pos = self
            .grid_bins
            .get(&key)
            .and_then(|bin| bin.iter().position(|&id| id == v_point_index));
        if let Some(pos) = pos {
            self.remove_at(key, pos);
        }
    }

    fn contains(&self, v_point_index: usize) -> bool {
        if v_point_index == NULL_POINT_INDEX {
            return false;
        }
        self.grid_bins
            .get(&self.get_v_key(v_point_index))
            .is_some_and(|bin| bin.contains(&v_point_index))
    }

    fn pull_near(&mut self, u_point_index: usize) -> Option<usize> {
        let (i0, j0) = get_bin_key(self.points.u_point(u_point_index), self.r);
        for i in i0.saturating_sub(1)..=i0.saturating_add(1) {
            for j in j0.saturating_sub(1)..=j0.saturating_add(1) {
                let Some(bin) = self.grid_bins.get(&(i, j)) else {
                    continue;
                };
                let pos = bin
                    .iter()
                    .position(|&v| self.points.distance(u_point_index, v) <= self.r);
                if let Some(pos) = pos {
                    let pulled = self.remove_at((i, j), pos);
                    log::trace!("u{} pulled v{:?} from bin ({}, {})", u_point_index, pulled, i, j);
                    return pulled;
                }
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Bin of a point for the near distance `r`.
///
/// Coordinates are truncated toward zero, not floored, so the bin around the
/// origin spans `(-r, r)` on each axis. Keys of points closer than `r` still
/// differ by at most one on each axis.
pub fn get_bin_key(point: [f64; 2], r: f64) -> (i64, i64) {
    debug_assert!(
        point[0].is_finite() && point[1].is_finite(),
        "non-finite coordinates {:?}",
        point
    );
    ((point[0] / r) as i64, (point[1] / r) as i64)
}
