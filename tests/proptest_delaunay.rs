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

//! Property-based tests for incremental insertion and the cursor query.
//!
//! Points are drawn on a small integer lattice so duplicates, colinear runs
//! and cocircular quadruples show up often.

use proptest::prelude::*;
use quadvor::{InsertError, Triangulation, Vertex};

fn seeded() -> Triangulation {
    Triangulation::with_bounds(
        Vertex::new(0.0, -5000.0),
        Vertex::new(-10000.0, 5000.0),
        Vertex::new(10000.0, 5000.0),
    )
    .expect("valid cosmic triangle")
}

fn lattice_point(range: i32) -> impl Strategy<Value = Vertex> {
    (-range..range, -range..range).prop_map(|(x, y)| Vertex::new(x as f64, y as f64))
}

fn insert_all(points: &[Vertex]) -> (Triangulation, usize) {
    let mut tri = seeded();
    let mut inserted = 0;
    for &p in points {
        match tri.insert(p) {
            Ok(()) => inserted += 1,
            Err(InsertError::Duplicate) => {}
            Err(e) => panic!("unexpected insertion failure for {p}: {e}"),
        }
    }
    (tri, inserted)
}

proptest! {
    /// Property: every successful insertion is recorded and nothing else is
    #[test]
    fn prop_vertices_match_successful_inserts(
        points in prop::collection::vec(lattice_point(100), 1..60)
    ) {
        let (tri, inserted) = insert_all(&points);
        prop_assert_eq!(tri.vertices().len(), inserted);
    }

    /// Property: the mesh stays a valid Delaunay triangulation
    #[test]
    fn prop_insertion_preserves_delaunay(
        points in prop::collection::vec(lattice_point(100), 1..60)
    ) {
        let (tri, _) = insert_all(&points);
        prop_assert!(tri.is_delaunay(), "violations: {:?}", tri.find_delaunay_violations());
        prop_assert!(tri.validate_topology().is_ok(), "{:?}", tri.validate_topology().err());
    }

    /// Property: a triangulated sphere-like subdivision has 3n-6 edges and
    /// 2n-5 bounded faces, counting the cosmic vertices
    #[test]
    fn prop_euler_counts(
        points in prop::collection::vec(lattice_point(10), 1..60)
    ) {
        let (tri, _) = insert_all(&points);
        let n = tri.vertices().len() + 3;
        prop_assert_eq!(tri.edge_count(), 3 * n - 6);
        prop_assert_eq!(tri.face_count(), 2 * n - 5);
    }

    /// Property: cursor never mutates the triangulation
    #[test]
    fn prop_cursor_is_non_destructive(
        points in prop::collection::vec(lattice_point(100), 1..40),
        query in lattice_point(100)
    ) {
        let (tri, _) = insert_all(&points);
        let mesh = tri.mesh();
        let snapshot: Vec<_> = tri
            .edges()
            .map(|e| (mesh.org(e), mesh.dest(e), mesh.left(e), mesh.right(e)))
            .collect();

        let query = Vertex::new(query.x + 0.5, query.y);
        if let Some(hood) = tri.cursor(query) {
            prop_assert_eq!(hood.cell_polygons.len(), hood.neighbor_vertices.len());
        }

        let after: Vec<_> = tri
            .edges()
            .map(|e| (mesh.org(e), mesh.dest(e), mesh.left(e), mesh.right(e)))
            .collect();
        prop_assert_eq!(snapshot, after);
    }
}
