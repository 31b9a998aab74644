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

use quadvor::{QuadEdgeMesh, Vertex};

type Mesh = QuadEdgeMesh<f64>;

fn v(x: f64, y: f64) -> Vertex {
    Vertex::new(x, y)
}

/// Counter-clockwise triangle (0,0) (4,0) (0,4); returns the edge (0,0)->(4,0).
fn make_triangle(mesh: &mut Mesh) -> quadvor::EdgeRef {
    let ab = mesh.make_edge(v(0.0, 0.0), v(4.0, 0.0));
    let bc = mesh.make_edge(v(4.0, 0.0), v(0.0, 4.0));
    mesh.splice(ab.sym(), bc);
    mesh.connect(bc, ab);
    ab
}

#[test]
fn test_make_edge_registers_with_the_mesh() {
    let mut mesh = Mesh::new();
    assert!(mesh.is_empty());

    let e = mesh.make_edge(v(0.0, 0.0), v(1.0, 1.0));
    assert_eq!(mesh.len(), 1);
    assert!(mesh.contains(e));
    assert_eq!(mesh.edges().collect::<Vec<_>>(), vec![e]);
}

#[test]
fn test_derived_operators_around_a_triangle() {
    let mut mesh = Mesh::new();
    let ab = make_triangle(&mut mesh);
    let bc = mesh.lnext(ab);
    let ca = mesh.lnext(bc);

    assert_eq!(mesh.lprev(ab), ca);
    assert_eq!(mesh.lprev(bc), ab);

    // around the origin of ab: ab and (ca reversed)
    assert_eq!(mesh.onext(ab), ca.sym());
    assert_eq!(mesh.oprev(ca.sym()), ab);

    // around the destination of ab
    assert_eq!(mesh.dprev(ab), bc.sym());
    assert_eq!(mesh.dnext(ab), bc.sym());
    assert_eq!(mesh.rprev(ab), bc);
    assert_eq!(mesh.rnext(ab), ca);
}

#[test]
fn test_faces_are_counter_clockwise() {
    let mut mesh = Mesh::new();
    make_triangle(&mut mesh);

    let faces = mesh.faces();
    assert_eq!(faces.len(), 1);
    let [a, b, c] = faces[0];
    assert!(quadvor::kernel::orientation_area(&a, &b, &c) > 0.0);
}

#[test]
fn test_clear_invalidates_handles() {
    let mut mesh = Mesh::new();
    let ab = make_triangle(&mut mesh);
    mesh.clear();

    assert!(mesh.is_empty());
    assert!(!mesh.contains(ab));

    // reused slots hand out fresh handles
    let fresh = mesh.make_edge(v(0.0, 0.0), v(1.0, 0.0));
    assert_ne!(fresh, ab);
    assert!(!mesh.contains(ab));
}

#[test]
fn test_delete_edge_keeps_topology_valid() {
    let mut mesh = Mesh::new();
    let ab = make_triangle(&mut mesh);
    let ca = mesh.lprev(ab);

    mesh.delete_edge(ca);
    assert_eq!(mesh.len(), 2);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.onext(ab), ab);
}

#[test]
fn test_disconnect_then_splice_reattaches() {
    let mut mesh = Mesh::new();
    let ab = make_triangle(&mut mesh);
    let ca = mesh.lprev(ab);
    let bc = mesh.lnext(ab);

    mesh.disconnect(ca);
    assert_eq!(mesh.len(), 3);
    assert_eq!(mesh.onext(ca), ca);
    assert!(mesh.faces().is_empty());

    mesh.splice(ca, mesh.lnext(bc));
    mesh.splice(ca.sym(), ab);
    assert_eq!(mesh.faces().len(), 1);
    assert!(mesh.validate().is_ok());
}
