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

use slotmap::{SlotMap, new_key_type};

use crate::geometry::Vertex;
use crate::numeric::Scalar;

new_key_type! {
    /// Key of one quad-edge (an undirected edge and its dual) in the mesh arena.
    ///
    /// Keys are versioned: once the quad-edge is deleted every key and
    /// `EdgeRef` still pointing at it stops resolving.
    pub struct QuadEdgeKey;
}

/// Directed edge record: a quad-edge plus one of its four rotations.
///
/// Rotation 0 and 2 are the primal edge and its reverse, 1 and 3 the dual
/// edge crossing it (right face to left face, and back).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeRef {
    quad: QuadEdgeKey,
    rot: u8,
}

impl EdgeRef {
    #[inline]
    pub(crate) fn new(quad: QuadEdgeKey, rot: u8) -> Self {
        Self { quad, rot: rot & 3 }
    }

    #[inline]
    pub fn quad(self) -> QuadEdgeKey {
        self.quad
    }

    #[inline]
    pub fn rotation(self) -> u8 {
        self.rot
    }

    #[inline]
    pub fn is_primal(self) -> bool {
        self.rot & 1 == 0
    }

    /// The rotation-0 record of the same quad-edge.
    #[inline]
    pub fn canonical(self) -> Self {
        Self::new(self.quad, 0)
    }

    #[inline]
    pub fn rot(self) -> Self {
        Self::new(self.quad, self.rot + 1)
    }

    #[inline]
    pub fn sym(self) -> Self {
        Self::new(self.quad, self.rot + 2)
    }

    #[inline]
    pub fn inv_rot(self) -> Self {
        Self::new(self.quad, self.rot + 3)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct QuadEdge<T: Scalar> {
    /// `onext` of each of the four records, indexed by rotation.
    pub(crate) next: [EdgeRef; 4],
    /// Origin of rotation 0 and origin of rotation 2.
    pub(crate) endpoints: [Vertex<T>; 2],
    /// Origin of rotation 1 (right face) and of rotation 3 (left face).
    pub(crate) faces: [Option<Vertex<T>>; 2],
}

/// Arena owning every quad-edge of a subdivision.
#[derive(Clone, Debug)]
pub struct QuadEdgeMesh<T: Scalar = f64> {
    pub(crate) quads: SlotMap<QuadEdgeKey, QuadEdge<T>>,
}

impl<T: Scalar> Default for QuadEdgeMesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> QuadEdgeMesh<T> {
    pub fn new() -> Self {
        Self {
            quads: SlotMap::with_key(),
        }
    }

    /// Number of live quad-edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Whether `e` still refers to a live quad-edge.
    #[inline]
    pub fn contains(&self, e: EdgeRef) -> bool {
        self.quads.contains_key(e.quad)
    }

    /// One primal record per live quad-edge.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.quads.keys().map(|key| EdgeRef::new(key, 0))
    }

    /// Drops every quad-edge, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        self.quads.clear();
    }

    // ---------------------------------------------------------------------
    // Navigation
    //
    // All navigation panics when handed a stale `EdgeRef`, like slice
    // indexing does for an out-of-range index.
    // ---------------------------------------------------------------------

    /// Next edge counter-clockwise around the origin of `e`.
    #[inline]
    pub fn onext(&self, e: EdgeRef) -> EdgeRef {
        self.quads[e.quad].next[e.rot as usize]
    }

    #[inline]
    pub(crate) fn set_onext(&mut self, e: EdgeRef, next: EdgeRef) {
        self.quads[e.quad].next[e.rot as usize] = next;
    }

    /// Next edge clockwise around the origin of `e`.
    #[inline]
    pub fn oprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.rot()).rot()
    }

    /// Next edge counter-clockwise around the left face of `e`.
    #[inline]
    pub fn lnext(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.inv_rot()).rot()
    }

    #[inline]
    pub fn lprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e).sym()
    }

    /// Next edge counter-clockwise around the destination of `e`.
    #[inline]
    pub fn dnext(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.sym()).sym()
    }

    #[inline]
    pub fn dprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.inv_rot()).inv_rot()
    }

    #[inline]
    pub fn rnext(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.rot()).inv_rot()
    }

    #[inline]
    pub fn rprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.sym())
    }

    // ---------------------------------------------------------------------
    // Data
    // ---------------------------------------------------------------------

    /// Origin vertex of the primal edge `e`.
    #[inline]
    pub fn org(&self, e: EdgeRef) -> Vertex<T> {
        debug_assert!(e.is_primal(), "org() on a dual record");
        self.quads[e.quad].endpoints[(e.rot >> 1) as usize]
    }

    #[inline]
    pub fn dest(&self, e: EdgeRef) -> Vertex<T> {
        self.org(e.sym())
    }

    /// Dual vertex (circumcenter) of the face left of the primal edge `e`.
    #[inline]
    pub fn left(&self, e: EdgeRef) -> Option<Vertex<T>> {
        debug_assert!(e.is_primal(), "left() on a dual record");
        self.quads[e.quad].faces[(e.inv_rot().rot >> 1) as usize]
    }

    /// Dual vertex (circumcenter) of the face right of the primal edge `e`.
    #[inline]
    pub fn right(&self, e: EdgeRef) -> Option<Vertex<T>> {
        debug_assert!(e.is_primal(), "right() on a dual record");
        self.quads[e.quad].faces[(e.rot().rot >> 1) as usize]
    }

    pub fn set_endpoints(&mut self, e: EdgeRef, org: Vertex<T>, dest: Vertex<T>) {
        debug_assert!(e.is_primal(), "set_endpoints() on a dual record");
        let slot = (e.rot >> 1) as usize;
        let quad = &mut self.quads[e.quad];
        quad.endpoints[slot] = org;
        quad.endpoints[1 - slot] = dest;
    }

    pub fn set_left(&mut self, e: EdgeRef, face: Option<Vertex<T>>) {
        debug_assert!(e.is_primal(), "set_left() on a dual record");
        self.quads[e.quad].faces[(e.inv_rot().rot >> 1) as usize] = face;
    }

    /// `org=[x, y] dest=[x, y]`
    pub fn describe(&self, e: EdgeRef) -> String {
        format!("org={} dest={}", self.org(e), self.dest(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(x, y)
    }

    #[test]
    fn rotation_is_index_arithmetic() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let e = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));

        assert_eq!(e.rot().rot().rot().rot(), e);
        assert_eq!(e.sym().sym(), e);
        assert_eq!(e.rot().inv_rot(), e);
        assert!(e.is_primal() && e.sym().is_primal());
        assert!(!e.rot().is_primal());
        assert_eq!(e.sym().canonical(), e);
    }

    #[test]
    fn endpoints_follow_direction() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let e = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));

        assert_eq!(mesh.org(e), v(0.0, 0.0));
        assert_eq!(mesh.dest(e), v(1.0, 0.0));
        assert_eq!(mesh.org(e.sym()), v(1.0, 0.0));

        mesh.set_endpoints(e.sym(), v(5.0, 5.0), v(6.0, 6.0));
        assert_eq!(mesh.org(e), v(6.0, 6.0));
        assert_eq!(mesh.dest(e), v(5.0, 5.0));
    }

    #[test]
    fn left_and_right_swap_under_sym() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let e = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));
        assert_eq!(mesh.left(e), None);

        mesh.set_left(e, Some(v(0.5, 1.0)));
        mesh.set_left(e.sym(), Some(v(0.5, -1.0)));

        assert_eq!(mesh.left(e), Some(v(0.5, 1.0)));
        assert_eq!(mesh.right(e), Some(v(0.5, -1.0)));
        assert_eq!(mesh.right(e.sym()), Some(v(0.5, 1.0)));
    }

    #[test]
    fn fresh_edge_rings() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let e = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));

        assert_eq!(mesh.onext(e), e);
        assert_eq!(mesh.onext(e.sym()), e.sym());
        assert_eq!(mesh.onext(e.rot()), e.inv_rot());
        assert_eq!(mesh.onext(e.inv_rot()), e.rot());
        assert_eq!(mesh.lnext(e), e.sym());
        assert_eq!(mesh.oprev(e), e);
    }

    #[test]
    fn describe_formats_both_endpoints() {
        let mut mesh = QuadEdgeMesh::<f64>::new();
        let e = mesh.make_edge(v(0.0, 0.0), v(1.5, 2.0));
        assert_eq!(mesh.describe(e), "org=[0, 0] dest=[1.5, 2]");
    }
}
