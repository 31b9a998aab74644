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

//! Incremental Delaunay triangulation over a quad-edge mesh, with its dual
//! Voronoi diagram cached as per-face circumcenters.

use crate::error::{TopologyError, TriangulationError};
use crate::geometry::Vertex;
use crate::kernel::{in_circle_determinant, is_left_of, orientation_area};
use crate::mesh::{EdgeRef, QuadEdgeMesh};
use crate::numeric::Scalar;

pub mod cursor;
pub mod delaunay;

pub use cursor::Neighborhood;
pub use delaunay::Location;

/// Step budget of the location walk.
pub const DEFAULT_MAX_LOCATE_STEPS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangulationConfig {
    /// The location walk gives up after this many steps.
    pub max_locate_steps: usize,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            max_locate_steps: DEFAULT_MAX_LOCATE_STEPS,
        }
    }
}

/// A segment between two points, as handed to a drawing layer.
pub type Segment<T> = (Vertex<T>, Vertex<T>);

/// Finite edges split by [`QuadEdgeMesh::is_crust`].
#[derive(Clone, Debug, Default)]
pub struct CrustSkeleton<T: Scalar = f64> {
    /// Primal segments of edges that are not classified crust.
    pub crust: Vec<Segment<T>>,
    /// Dual (circumcenter to circumcenter) segments of crust-classified edges.
    pub skeleton: Vec<Segment<T>>,
}

/// Owns the quad-edge mesh of a Delaunay triangulation seeded with a cosmic
/// triangle.
#[derive(Clone, Debug)]
pub struct Triangulation<T: Scalar = f64> {
    pub(crate) mesh: QuadEdgeMesh<T>,
    /// Start of the next location walk.
    pub(crate) current_edge: Option<EdgeRef>,
    /// Counter-clockwise.
    pub(crate) cosmic: Option<[Vertex<T>; 3]>,
    pub(crate) vertices: Vec<Vertex<T>>,
    /// Append-only; superseded entries are never removed.
    pub(crate) circumcenters: Vec<Vertex<T>>,
    pub(crate) config: TriangulationConfig,
}

impl<T: Scalar> Default for Triangulation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Triangulation<T> {
    /// An unseeded triangulation; every insertion fails until
    /// [`init_delaunay`](Self::init_delaunay) is called.
    pub fn new() -> Self {
        Self::with_config(TriangulationConfig::default())
    }

    pub fn with_config(config: TriangulationConfig) -> Self {
        Self {
            mesh: QuadEdgeMesh::new(),
            current_edge: None,
            cosmic: None,
            vertices: Vec::new(),
            circumcenters: Vec::new(),
            config,
        }
    }

    pub fn with_bounds(
        v0: Vertex<T>,
        v1: Vertex<T>,
        v2: Vertex<T>,
    ) -> Result<Self, TriangulationError> {
        let mut triangulation = Self::new();
        triangulation.init_delaunay(v0, v1, v2)?;
        Ok(triangulation)
    }

    #[inline]
    pub fn config(&self) -> &TriangulationConfig {
        &self.config
    }

    /// Discards the current mesh and reseeds with the cosmic triangle
    /// `v0, v1, v2`, given in either winding.
    ///
    /// All three vertices are tagged as boundary vertices. Every inserted
    /// vertex, cached circumcenter and outstanding `EdgeRef` is dropped.
    pub fn init_delaunay(
        &mut self,
        v0: Vertex<T>,
        v1: Vertex<T>,
        v2: Vertex<T>,
    ) -> Result<(), TriangulationError> {
        if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
            return Err(TriangulationError::NonFiniteBounds);
        }

        let v0 = v0.as_boundary();
        let mut v1 = v1.as_boundary();
        let mut v2 = v2.as_boundary();

        let area = orientation_area(&v0, &v1, &v2);
        if area == T::zero() {
            return Err(TriangulationError::DegenerateBounds);
        }
        if area < T::zero() {
            std::mem::swap(&mut v1, &mut v2);
        }

        self.mesh.clear();
        let e0 = self.mesh.make_edge(v1, v2);
        let e2 = self.mesh.make_edge(v1, v0);
        self.mesh.splice(e0, e2);
        self.mesh.connect(e0, e2.sym());

        self.current_edge = Some(e0);
        self.cosmic = Some([v0, v1, v2]);
        self.vertices.clear();
        self.circumcenters.clear();

        tracing::debug!(v0 = %v0, v1 = %v1, v2 = %v2, "seeded cosmic triangle");
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cosmic.is_some()
    }

    /// Strictly left of all three counter-clockwise boundary edges.
    pub fn is_inside_cosmic_triangle(&self, v: &Vertex<T>) -> bool {
        match &self.cosmic {
            Some([c0, c1, c2]) => {
                is_left_of(v, c0, c1) && is_left_of(v, c1, c2) && is_left_of(v, c2, c0)
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Enumerable state
    // ---------------------------------------------------------------------

    #[inline]
    pub fn mesh(&self) -> &QuadEdgeMesh<T> {
        &self.mesh
    }

    /// One primal record per live quad-edge, infinite edges included.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.mesh.edges()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.mesh.len()
    }

    /// Inserted (real) vertices, in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// The cosmic triangle, counter-clockwise.
    #[inline]
    pub fn cosmic_vertices(&self) -> Option<&[Vertex<T>; 3]> {
        self.cosmic.as_ref()
    }

    #[inline]
    pub fn circumcenters(&self) -> &[Vertex<T>] {
        &self.circumcenters
    }

    #[inline]
    pub fn current_edge(&self) -> Option<EdgeRef> {
        self.current_edge
    }

    /// Bounded triangular faces, cosmic ones included.
    pub fn faces(&self) -> Vec<[Vertex<T>; 3]> {
        self.mesh.faces()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.mesh.faces().len()
    }

    // ---------------------------------------------------------------------
    // Segments for a drawing layer
    // ---------------------------------------------------------------------

    fn finite_edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.mesh.edges().filter(|&e| !self.mesh.is_infinite_edge(e))
    }

    /// Delaunay edges between real vertices.
    pub fn delaunay_segments(&self) -> Vec<Segment<T>> {
        self.finite_edges()
            .map(|e| (self.mesh.org(e), self.mesh.dest(e)))
            .collect()
    }

    /// Voronoi edges dual to the finite Delaunay edges, `right -> left`.
    pub fn voronoi_segments(&self) -> Vec<Segment<T>> {
        self.finite_edges()
            .filter_map(|e| Some((self.mesh.right(e)?, self.mesh.left(e)?)))
            .collect()
    }

    pub fn crust_skeleton(&self) -> CrustSkeleton<T> {
        let mut out = CrustSkeleton {
            crust: Vec::new(),
            skeleton: Vec::new(),
        };
        for e in self.finite_edges() {
            match (self.mesh.is_crust(e), self.mesh.right(e), self.mesh.left(e)) {
                (true, Some(right), Some(left)) => out.skeleton.push((right, left)),
                _ => out.crust.push((self.mesh.org(e), self.mesh.dest(e))),
            }
        }
        out
    }

    // ---------------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------------

    /// Faces between real vertices whose circumcircle strictly contains
    /// another inserted vertex.
    pub fn find_delaunay_violations(&self) -> Vec<[Vertex<T>; 3]> {
        let violations: Vec<_> = self
            .faces()
            .into_iter()
            .filter(|face| face.iter().all(|v| !v.is_boundary))
            .filter(|[a, b, c]| {
                self.vertices.iter().any(|p| {
                    p != a && p != b && p != c && in_circle_determinant(a, b, c, p) > T::zero()
                })
            })
            .collect();

        if !violations.is_empty() {
            tracing::warn!(count = violations.len(), "Delaunay violations found");
        }
        violations
    }

    pub fn is_delaunay(&self) -> bool {
        self.find_delaunay_violations().is_empty()
    }

    pub fn validate_topology(&self) -> Result<(), TopologyError> {
        self.mesh.validate()
    }
}
