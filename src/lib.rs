// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Dynamic planar Delaunay triangulation and Voronoi diagram on a quad-edge
//! mesh, with non-destructive "what if I inserted here" queries.
//!
//! ```
//! use quadvor::{Triangulation, Vertex};
//!
//! let mut tri = Triangulation::with_bounds(
//!     Vertex::new(0.0, -5000.0),
//!     Vertex::new(-10000.0, 5000.0),
//!     Vertex::new(10000.0, 5000.0),
//! )
//! .unwrap();
//!
//! tri.insert(Vertex::new(0.0, 0.0)).unwrap();
//! tri.insert(Vertex::new(1.0, 0.0)).unwrap();
//!
//! let hood = tri.cursor(Vertex::new(0.5, 0.0)).unwrap();
//! assert!(hood.neighbor_vertices.contains(&Vertex::new(0.0, 0.0)));
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use error::{InsertError, TopologyError, TriangulationError};
pub use geometry::Vertex;
pub use mesh::{EdgeRef, QuadEdgeMesh};
pub use operations::triangulation::{
    CrustSkeleton, DEFAULT_MAX_LOCATE_STEPS, Location, Neighborhood, Segment, Triangulation,
    TriangulationConfig,
};
