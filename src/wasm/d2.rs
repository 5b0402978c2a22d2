use crate::algorithm::NeighborFinder;
use crate::algorithm::d2_grid::GridNeighborsFinder;
use crate::error::FinderError;
use crate::points::{Metric, PlanarPoints};
use crate::wasm::utils::{parse_js_points, to_js_error};
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// WASM wrapper owning both the point sets and the grid finder.
///
/// Indices out of range are rejected instead of panicking across the JS boundary.
#[wasm_bindgen]
pub struct NeighborFinder2D {
    inner: GridNeighborsFinder<PlanarPoints>,
}

#[wasm_bindgen]
impl NeighborFinder2D {
    /// Creates a finder from interleaved `[x0, y0, x1, y1, ...]` buffers,
    /// using the Euclidean distance.
    #[wasm_bindgen(constructor)]
    pub fn new(u_coords: &[f64], v_coords: &[f64], r: f64) -> Result<NeighborFinder2D, JsValue> {
        let points = PlanarPoints::from_flat(u_coords, v_coords).map_err(to_js_error)?;
        Self::build(points, r)
    }

    /// Same as the constructor, using the L-infinity distance.
    #[wasm_bindgen(js_name = newChebyshev)]
    pub fn new_chebyshev(u_coords: &[f64], v_coords: &[f64], r: f64) -> Result<NeighborFinder2D, JsValue> {
        let mut points = PlanarPoints::from_flat(u_coords, v_coords).map_err(to_js_error)?;
        points.set_metric(Metric::Chebyshev);
        Self::build(points, r)
    }

    /// Creates a finder from JS arrays of `[x, y]` pairs.
    #[wasm_bindgen(js_name = fromPairs)]
    pub fn from_pairs(u: &Array, v: &Array, r: f64) -> Result<NeighborFinder2D, JsValue> {
        let u = parse_js_points(u).map_err(to_js_error)?;
        let v = parse_js_points(v).map_err(to_js_error)?;
        Self::build(PlanarPoints::new(u, v), r)
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.inner.radius()
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn add(&mut self, v: u32) -> Result<(), JsValue> {
        let v = v as usize;
        let len = self.inner.points().v_len();
        if v >= len {
            return Err(to_js_error(FinderError::IndexOutOfRange { index: v, len }));
        }
        if !self.inner.contains(v) {
            self.inner.add(v);
        }
        Ok(())
    }

    /// Registers every V point that is not registered yet.
    #[wasm_bindgen(js_name = addAll)]
    pub fn add_all(&mut self) {
        for v in 0..self.inner.points().v_len() {
            if !self.inner.contains(v) {
                self.inner.add(v);
            }
        }
    }

    pub fn remove(&mut self, v: u32) {
        if (v as usize) < self.inner.points().v_len() {
            self.inner.remove(v as usize);
        }
    }

    pub fn contains(&self, v: u32) -> bool {
        (v as usize) < self.inner.points().v_len() && self.inner.contains(v as usize)
    }

    /// Returns a V index near `u`, or `undefined` once none is left.
    #[wasm_bindgen(js_name = pullNear)]
    pub fn pull_near(&mut self, u: u32) -> Result<Option<u32>, JsValue> {
        let u = self.check_u(u)?;
        Ok(self.inner.pull_near(u).map(|v| v as u32))
    }

    #[wasm_bindgen(js_name = pullAllNear)]
    pub fn pull_all_near(&mut self, u: u32) -> Result<Vec<u32>, JsValue> {
        let u = self.check_u(u)?;
        Ok(self.inner.pull_all_near(u).into_iter().map(|v| v as u32).collect())
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl NeighborFinder2D {
    fn build(points: PlanarPoints, r: f64) -> Result<NeighborFinder2D, JsValue> {
        let inner = GridNeighborsFinder::new(points, r).map_err(to_js_error)?;
        Ok(NeighborFinder2D { inner })
    }

    fn check_u(&self, u: u32) -> Result<usize, JsValue> {
        let u = u as usize;
        let len = self.inner.points().u_len();
        if u >= len {
            return Err(to_js_error(FinderError::IndexOutOfRange { index: u, len }));
        }
        Ok(u)
    }
}
