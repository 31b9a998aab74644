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

use crate::geometry::Vertex;
use crate::kernel::{circumcenter, in_circle, is_left_of, squared_distance};
use crate::numeric::Scalar;
use crate::operations::triangulation::{Location, Triangulation};

/// What inserting a point would do, computed without inserting it.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhood<T: Scalar = f64> {
    pub query_point: Vertex<T>,
    /// One polygon per neighbor: the part of that neighbor's Voronoi cell the
    /// query point would take over.
    pub cell_polygons: Vec<Vec<Vertex<T>>>,
    /// Would-be Delaunay neighbors, in walk order.
    pub neighbor_vertices: Vec<Vertex<T>>,
    /// Closest neighbor. On a distance tie the first neighbor walked is kept,
    /// not the last.
    pub nearest_neighbor: Vertex<T>,
}

impl<T: Scalar> Triangulation<T> {
    /// Neighborhood of `vertex` as if it were inserted.
    ///
    /// `None` when the point is outside the cosmic triangle, coincides with an
    /// existing vertex, or cannot be located. Never touches the mesh.
    pub fn cursor(&self, vertex: Vertex<T>) -> Option<Neighborhood<T>> {
        let vertex = Vertex::new(vertex.x, vertex.y);
        if !self.is_inside_cosmic_triangle(&vertex) {
            tracing::trace!(vertex = %vertex, "cursor outside cosmic triangle");
            return None;
        }

        let mut e = match self.locate(&vertex) {
            Location::Located(e) => e,
            other => {
                tracing::trace!(vertex = %vertex, location = ?other, "cursor not located");
                return None;
            }
        };

        let mesh = &self.mesh;
        let budget = 4 * mesh.len() + 4;
        let mut steps = 0;
        let mut exhausted = || {
            steps += 1;
            if steps > budget {
                tracing::warn!(vertex = %vertex, "cursor walk exceeded its step budget");
                true
            } else {
                false
            }
        };

        // Rotate around the origin past every face whose circumcircle holds
        // the query point; the destination is then a neighbor.
        loop {
            let org = mesh.org(e);
            let dest = mesh.dest(e);
            let third = mesh.dest(mesh.onext(e));
            if !(is_left_of(&third, &org, &dest) && in_circle(&org, &dest, &third, &vertex)) {
                break;
            }
            e = mesh.onext(e);
            if exhausted() {
                return None;
            }
        }

        e = e.sym();
        let start = mesh.org(e);
        let mut nearest = start;
        let mut min_dist = squared_distance(&vertex, &start);
        let mut cell_polygons = Vec::new();
        let mut neighbor_vertices = Vec::new();

        loop {
            let mut polygon = Vec::new();
            polygon.extend(circumcenter(&mesh.dest(e), &mesh.org(e), &vertex));
            loop {
                polygon.extend(mesh.left(e));
                e = mesh.onext(e);
                if exhausted() {
                    return None;
                }
                let third = mesh.dest(mesh.onext(e));
                if !in_circle(&mesh.org(e), &mesh.dest(e), &third, &vertex) {
                    break;
                }
            }
            polygon.extend(circumcenter(&mesh.org(e), &mesh.dest(e), &vertex));

            let neighbor = mesh.org(e);
            let dist = squared_distance(&vertex, &neighbor);
            if dist == T::zero() {
                return None;
            }
            if dist < min_dist {
                min_dist = dist;
                nearest = neighbor;
            }

            cell_polygons.push(polygon);
            neighbor_vertices.push(neighbor);

            e = e.sym();
            if mesh.org(e) == start {
                break;
            }
        }

        Some(Neighborhood {
            query_point: vertex,
            cell_polygons,
            neighbor_vertices,
            nearest_neighbor: nearest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Triangulation {
        Triangulation::with_bounds(
            Vertex::new(0.0, -5000.0),
            Vertex::new(-10000.0, 5000.0),
            Vertex::new(10000.0, 5000.0),
        )
        .expect("valid cosmic triangle")
    }

    #[test]
    fn cursor_in_empty_diagram_sees_the_cosmic_vertices() {
        let tri = seeded();
        let hood = tri.cursor(Vertex::new(0.0, 0.0)).expect("inside");

        assert_eq!(hood.neighbor_vertices.len(), 3);
        assert!(hood.neighbor_vertices.iter().all(|v| v.is_boundary));
        assert_eq!(hood.cell_polygons.len(), 3);
    }

    #[test]
    fn cursor_outside_is_none() {
        let tri = seeded();
        assert!(tri.cursor(Vertex::new(0.0, 6000.0)).is_none());
        assert!(Triangulation::<f64>::new().cursor(Vertex::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn cursor_on_existing_vertex_is_none() {
        let mut tri = seeded();
        tri.insert(Vertex::new(12.0, 7.0)).expect("inserted");
        assert!(tri.cursor(Vertex::new(12.0, 7.0)).is_none());
    }
}
