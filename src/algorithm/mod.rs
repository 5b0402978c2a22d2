pub mod d2_grid;

use d2_grid::GridNeighborsFinder;

/// Sentinel index meaning "no point". Never a valid U or V index.
pub const NULL_POINT_INDEX: usize = usize::MAX;

/// The finder implementation used by the matching code.
pub type PlanarNeighborsFinder<P> = GridNeighborsFinder<P>;

/// Trait defining a planar neighbor finder.
///
/// V points are registered by index, then pulled out again by U point queries:
/// a pull finds some registered V point within the near distance `r` of the
/// query, unregisters it and returns it. It is a first-fit search, not a
/// nearest-neighbor one. Points can also be removed by hand.
pub trait NeighborFinder {
    /// The near distance this finder was built for.
    fn radius(&self) -> f64;

    /// Registers a V point so it can be pulled later.
    ///
    /// The point must not already be registered.
    fn add(&mut self, v_point_index: usize);

    /// Unregisters a V point. Does nothing if it is not registered.
    fn remove(&mut self, v_point_index: usize);

    /// Whether the V point is currently registered. Always `false` for
    /// [`NULL_POINT_INDEX`].
    fn contains(&self, v_point_index: usize) -> bool;

    /// Finds, unregisters and returns a V point within the near distance of
    /// the given U point, or `None` if there is no such point.
    fn pull_near(&mut self, u_point_index: usize) -> Option<usize>;

    /// Number of registered V points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pulls every V point near the given U point, in the order they were pulled.
    fn pull_all_near(&mut self, u_point_index: usize) -> Vec<usize> {
        let mut pulled = Vec::new();
        while let Some(v_point_index) = self.pull_near(u_point_index) {
            pulled.push(v_point_index);
        }
        log::trace!("pulled {} points near u{}", pulled.len(), u_point_index);
        pulled
    }
}
