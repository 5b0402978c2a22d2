//! # planar_neighbors
//!
//! `planar_neighbors` is the spatial index behind bottleneck matching of two planar point
//! sets (U and V), such as the (birth, death) pairs of two persistence diagrams. It can be
//! used from Rust as well as compiled to WebAssembly (WASM).
//!
//! ## Features
//!
//! - **Pull queries**: find and remove, in one step, some V point within the near distance `r`
//!   of a U point, or all of them.
//! - **Dynamic Updates**: V points are registered and removed by index at any time.
//! - **Grid Bucketing**: bins of side `r` keep every query to a 3x3 block of bins.
//! - **WASM-first**: the finder is exported through `wasm-bindgen` as `NeighborFinder2D`.
//!
//! ## Example
//!
//! ```
//! use planar_neighbors::{NeighborFinder, PlanarNeighborsFinder, PlanarPoints};
//!
//! let points = PlanarPoints::new(vec![[0.3, 0.3]], vec![[0.2, 0.2], [5.0, 5.0]]);
//! let mut finder = PlanarNeighborsFinder::new(&points, 1.0).unwrap();
//! finder.add(0);
//! finder.add(1);
//!
//! assert_eq!(finder.pull_near(0), Some(0));
//! assert_eq!(finder.pull_near(0), None);
//! assert!(finder.contains(1));
//! ```
//!
//! ## Main Interface
//!
//! The [`NeighborFinder`] trait defines the operations; [`GridNeighborsFinder`] implements them
//! over any [`PointSource`].

mod algorithm;
mod error;
mod points;
mod wasm;

pub use algorithm::NeighborFinder;
pub use algorithm::PlanarNeighborsFinder;
pub use algorithm::NULL_POINT_INDEX;
pub use algorithm::d2_grid::GridNeighborsFinder;
pub use algorithm::d2_grid::get_bin_key;
pub use error::FinderError;
pub use error::Result;
pub use points::Metric;
pub use points::PlanarPoints;
pub use points::PointSource;
pub use wasm::d2::NeighborFinder2D;
