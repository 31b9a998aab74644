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

use crate::error::InsertError;
use crate::geometry::Vertex;
use crate::kernel::{circumcenter, in_circle, is_colinear, is_right_of};
use crate::mesh::EdgeRef;
use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

/// Outcome of the location walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// The point lies in the triangle left of this edge, or on its boundary.
    Located(EdgeRef),
    /// The point coincides with an existing vertex.
    Coincident,
    /// The step budget ran out.
    NotConverged,
    /// There is no mesh to walk.
    Unseeded,
}

impl<T: Scalar> Triangulation<T> {
    /// Walks from the current edge towards the triangle containing `v`.
    ///
    /// Never mutates the mesh; the walk start is only advanced by a
    /// successful [`insert`](Self::insert).
    pub fn locate(&self, v: &Vertex<T>) -> Location {
        let Some(mut edge) = self.current_edge else {
            return Location::Unseeded;
        };
        let mesh = &self.mesh;

        if is_right_of(v, &mesh.org(edge), &mesh.dest(edge)) {
            edge = edge.sym();
        }

        let mut steps = 0;
        loop {
            if steps > self.config.max_locate_steps {
                tracing::warn!(vertex = %v, steps, "location walk did not converge");
                return Location::NotConverged;
            }
            steps += 1;

            if *v == mesh.org(edge) || *v == mesh.dest(edge) {
                return Location::Coincident;
            }

            let onext = mesh.onext(edge);
            if !is_right_of(v, &mesh.org(onext), &mesh.dest(onext)) {
                edge = onext;
                continue;
            }

            let dprev = mesh.dprev(edge);
            if !is_right_of(v, &mesh.org(dprev), &mesh.dest(dprev)) {
                edge = dprev;
                continue;
            }

            tracing::trace!(vertex = %v, steps, "located");
            return Location::Located(edge);
        }
    }

    /// Inserts a real vertex and restores the Delaunay property.
    ///
    /// On error nothing changed: the point was outside the cosmic triangle,
    /// already present, or could not be located.
    pub fn insert(&mut self, vertex: Vertex<T>) -> Result<(), InsertError> {
        if !self.is_initialized() {
            return Err(InsertError::Uninitialized);
        }
        let vertex = Vertex::new(vertex.x, vertex.y);
        if !self.is_inside_cosmic_triangle(&vertex) {
            tracing::trace!(vertex = %vertex, "rejected: outside cosmic triangle");
            return Err(InsertError::OutsideBounds);
        }

        let mut edge = match self.locate(&vertex) {
            Location::Located(edge) => edge,
            Location::Coincident => {
                tracing::trace!(vertex = %vertex, "rejected: duplicate");
                return Err(InsertError::Duplicate);
            }
            Location::NotConverged => return Err(InsertError::NotConverged),
            Location::Unseeded => return Err(InsertError::Uninitialized),
        };

        self.vertices.push(vertex);

        // on an edge: merge its two triangles into a quadrilateral first
        if is_colinear(&vertex, &self.mesh.org(edge), &self.mesh.dest(edge)) {
            let prev = self.mesh.oprev(edge);
            self.mesh.delete_edge(edge);
            edge = prev;
        }

        let first = self.mesh.org(edge);
        let mut spoke = self.mesh.make_edge(first, vertex);
        self.mesh.splice(spoke, edge);
        loop {
            spoke = self.mesh.connect(edge, spoke.sym());
            edge = self.mesh.oprev(spoke);
            if self.mesh.dest(edge) == first {
                break;
            }
        }

        let (edge, flips) = self.legalize(edge, &vertex, &first);
        self.current_edge = Some(edge);

        tracing::debug!(vertex = %vertex, flips, edges = self.mesh.len(), "inserted vertex");
        Ok(())
    }

    /// Lawson flips around a freshly star-inserted `vertex`.
    ///
    /// `edge` starts on the polygon around `vertex` and walks it clockwise
    /// until it reaches the edge leaving `first`. Returns that final edge and
    /// the number of flips performed.
    fn legalize(
        &mut self,
        mut edge: EdgeRef,
        vertex: &Vertex<T>,
        first: &Vertex<T>,
    ) -> (EdgeRef, usize) {
        let mut flips = 0;
        loop {
            let org = self.mesh.org(edge);
            let dest = self.mesh.dest(edge);
            let opposite = self.mesh.dest(self.mesh.oprev(edge));

            if is_right_of(&opposite, &org, &dest) && in_circle(&org, &opposite, &dest, vertex) {
                self.mesh.swap(edge);
                flips += 1;
                tracing::trace!(edge = %self.mesh.describe(edge), "flipped");
                self.set_circumcenter(edge);
                edge = self.mesh.oprev(edge);
            } else {
                self.set_circumcenter(edge);
                if org == *first {
                    return (edge, flips);
                }
                edge = self.mesh.lprev(self.mesh.onext(edge));
            }
        }
    }

    /// Caches the circumcenter of the face left of `e` on its three edges.
    pub(crate) fn set_circumcenter(&mut self, e: EdgeRef) {
        let third = self.mesh.dest(self.mesh.onext(e));
        let center = circumcenter(&self.mesh.dest(e), &self.mesh.org(e), &third);
        if let Some(c) = center {
            self.circumcenters.push(c);
        }

        let lnext = self.mesh.lnext(e);
        let lprev = self.mesh.lprev(e);
        self.mesh.set_left(e, center);
        self.mesh.set_left(lnext, center);
        self.mesh.set_left(lprev, center);
    }
}
