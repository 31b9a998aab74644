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

use crate::error::TopologyError;
use crate::geometry::Vertex;
use crate::kernel::{in_circle, orientation_area};
use crate::mesh::quad_edge::{EdgeRef, QuadEdge, QuadEdgeMesh};
use crate::numeric::Scalar;

impl<T: Scalar> QuadEdgeMesh<T> {
    /// Creates an isolated edge `org -> dest` with no face data.
    ///
    /// The primal records are each alone in their `onext` ring; the two dual
    /// records point at each other.
    pub fn make_edge(&mut self, org: Vertex<T>, dest: Vertex<T>) -> EdgeRef {
        let key = self.quads.insert_with_key(|key| QuadEdge {
            next: [
                EdgeRef::new(key, 0),
                EdgeRef::new(key, 3),
                EdgeRef::new(key, 2),
                EdgeRef::new(key, 1),
            ],
            endpoints: [org, dest],
            faces: [None, None],
        });
        EdgeRef::new(key, 0)
    }

    /// Merges the origin rings of `a` and `b` if they are distinct, splits
    /// them if they are the same ring. The dual rings are updated alongside.
    pub fn splice(&mut self, a: EdgeRef, b: EdgeRef) {
        let alpha = self.onext(a).rot();
        let beta = self.onext(b).rot();

        let a_next = self.onext(a);
        let b_next = self.onext(b);
        let alpha_next = self.onext(alpha);
        let beta_next = self.onext(beta);

        self.set_onext(a, b_next);
        self.set_onext(b, a_next);
        self.set_onext(alpha, beta_next);
        self.set_onext(beta, alpha_next);
    }

    /// Adds an edge from `dest(a)` to `org(b)` such that `a`, the new edge
    /// and `b` share a left face.
    pub fn connect(&mut self, a: EdgeRef, b: EdgeRef) -> EdgeRef {
        let e = self.make_edge(self.dest(a), self.org(b));
        self.splice(e, self.lnext(a));
        self.splice(e.sym(), b);
        e
    }

    /// Flips `e` to the other diagonal of the quadrilateral formed by its two
    /// adjacent triangles.
    ///
    /// `e` must border two triangles.
    pub fn swap(&mut self, e: EdgeRef) {
        let a = self.oprev(e);
        let b = self.oprev(e.sym());

        self.splice(e, a);
        self.splice(e.sym(), b);
        self.splice(e, self.lnext(a));
        self.splice(e.sym(), self.lnext(b));
        self.set_endpoints(e, self.dest(a), self.dest(b));
    }

    /// Detaches `e` from both endpoint rings without freeing it.
    pub fn disconnect(&mut self, e: EdgeRef) {
        self.splice(e, self.oprev(e));
        self.splice(e.sym(), self.oprev(e.sym()));
    }

    /// Detaches `e` and frees its slot; `e` and its rotations go stale.
    pub fn delete_edge(&mut self, e: EdgeRef) {
        self.disconnect(e);
        self.quads.remove(e.quad());
    }

    /// Either endpoint is a boundary (cosmic) vertex.
    pub fn is_infinite_edge(&self, e: EdgeRef) -> bool {
        self.org(e).is_boundary || self.dest(e).is_boundary
    }

    /// Crust/skeleton classification of a primal edge.
    ///
    /// True when the lifted determinant of (org, left circumcenter, right
    /// circumcenter, dest) is non-negative, i.e. the dual Voronoi edge belongs
    /// to the skeleton. Edges lacking either circumcenter are never crust.
    pub fn is_crust(&self, e: EdgeRef) -> bool {
        match (self.left(e), self.right(e)) {
            (Some(left), Some(right)) => in_circle(&self.org(e), &left, &right, &self.dest(e)),
            _ => false,
        }
    }

    /// Every bounded triangular face, counter-clockwise, reported once.
    ///
    /// Faces with non-positive orientation (the unbounded face around the
    /// cosmic triangle) are skipped.
    pub fn faces(&self) -> Vec<[Vertex<T>; 3]> {
        let mut faces = Vec::new();
        for e0 in self.edges() {
            for e in [e0, e0.sym()] {
                let a = self.lnext(e);
                let b = self.lnext(a);
                if self.lnext(b) != e {
                    continue;
                }
                // report from the smallest bounding record only
                if a < e || b < e {
                    continue;
                }
                let tri = [self.org(e), self.org(a), self.org(b)];
                if orientation_area(&tri[0], &tri[1], &tri[2]) > T::zero() {
                    faces.push(tri);
                }
            }
        }
        faces
    }

    /// Checks the quad-edge algebra on every live record.
    pub fn validate(&self) -> Result<(), TopologyError> {
        for e0 in self.edges() {
            for r in 0..4u8 {
                let e = EdgeRef::new(e0.quad(), r);

                if e.rot().rot().rot().rot() != e || e.sym().sym() != e {
                    return Err(TopologyError::BrokenRotation { edge: e });
                }

                let next = self.onext(e);
                if !self.contains(next) {
                    return Err(TopologyError::DanglingNext { edge: e });
                }
                if next.is_primal() != e.is_primal() {
                    return Err(TopologyError::MixedRing { edge: e });
                }
                if self.oprev(next) != e || self.onext(self.oprev(e)) != e {
                    return Err(TopologyError::BrokenRing { edge: e });
                }

                if e.is_primal() {
                    if self.org(next) != self.org(e) {
                        return Err(TopologyError::BrokenRing { edge: e });
                    }
                    if self.org(e) == self.dest(e) {
                        return Err(TopologyError::DegenerateEdge { edge: e });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(x, y)
    }

    /// Counter-clockwise triangle a(0,0) b(4,0) c(0,4) built edge by edge.
    fn triangle() -> (QuadEdgeMesh<f64>, EdgeRef) {
        let mut mesh = QuadEdgeMesh::new();
        let ab = mesh.make_edge(v(0.0, 0.0), v(4.0, 0.0));
        let bc = mesh.make_edge(v(4.0, 0.0), v(0.0, 4.0));
        mesh.splice(ab.sym(), bc);
        mesh.connect(bc, ab);
        (mesh, ab)
    }

    #[test]
    fn splice_twice_restores_rings() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let a = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));
        let b = mesh.make_edge(v(0.0, 0.0), v(0.0, 1.0));

        mesh.splice(a, b);
        assert_eq!(mesh.onext(a), b);
        assert_eq!(mesh.onext(b), a);

        mesh.splice(a, b);
        assert_eq!(mesh.onext(a), a);
        assert_eq!(mesh.onext(b), b);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn connect_closes_a_triangle() {
        let (mesh, ab) = triangle();

        assert_eq!(mesh.len(), 3);
        let bc = mesh.lnext(ab);
        let ca = mesh.lnext(bc);
        assert_eq!(mesh.lnext(ca), ab);
        assert_eq!(mesh.org(ca), v(0.0, 4.0));
        assert_eq!(mesh.dest(ca), v(0.0, 0.0));
        assert_eq!(mesh.faces().len(), 1);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn swap_flips_the_shared_diagonal() {
        // square a(0,0) b(2,0) c(2,2) d(0,2) with diagonal a-c
        let (a, b, c, d) = (v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0));
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let ab = mesh.make_edge(a, b);
        let bc = mesh.make_edge(b, c);
        mesh.splice(ab.sym(), bc);
        let ca = mesh.connect(bc, ab);
        let cd = mesh.make_edge(c, d);
        // counter-clockwise around c: ca, cb, cd
        mesh.splice(bc.sym(), cd);
        mesh.connect(cd, ca.sym());

        assert_eq!(mesh.faces().len(), 2);
        let diagonal = ca;
        mesh.swap(diagonal);

        let ends = (mesh.org(diagonal), mesh.dest(diagonal));
        assert!(ends == (b, d) || ends == (d, b));
        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.len(), 5);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn delete_edge_invalidates_the_handle() {
        let (mut mesh, ab) = triangle();
        let bc = mesh.lnext(ab);
        mesh.delete_edge(bc);

        assert!(!mesh.contains(bc));
        assert!(mesh.contains(ab));
        assert_eq!(mesh.len(), 2);
        assert!(mesh.faces().is_empty());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn infinite_edges_touch_boundary_vertices() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let finite = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));
        let infinite = mesh.make_edge(v(0.0, 0.0), Vertex::boundary(0.0, -5000.0));
        assert!(!mesh.is_infinite_edge(finite));
        assert!(mesh.is_infinite_edge(infinite));
        assert!(mesh.is_infinite_edge(infinite.sym()));
    }

    #[test]
    fn edges_without_circumcenters_are_not_crust() {
        let (mesh, ab) = triangle();
        assert!(!mesh.is_crust(ab));
    }
}
