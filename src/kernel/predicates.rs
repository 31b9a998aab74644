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
use crate::numeric::Scalar;

#[inline]
pub fn squared_distance<T: Scalar>(a: &Vertex<T>, b: &Vertex<T>) -> T {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Center of the circle through `a`, `b` and `c`.
///
/// `None` when the three points are colinear (or the result overflows).
pub fn circumcenter<T: Scalar>(a: &Vertex<T>, b: &Vertex<T>, c: &Vertex<T>) -> Option<Vertex<T>> {
    // solve relative to `a` to keep the magnitudes small
    let bx = b.x - a.x;
    let by = b.y - a.y;
    let cx = c.x - a.x;
    let cy = c.y - a.y;

    let divisor = T::two() * (bx * cy - by * cx);
    if divisor == T::zero() {
        return None;
    }

    let b_sqr = bx * bx + by * by;
    let c_sqr = cx * cx + cy * cy;
    let center = Vertex::new(
        a.x + (cy * b_sqr - by * c_sqr) / divisor,
        a.y + (bx * c_sqr - cx * b_sqr) / divisor,
    );

    center.is_finite().then_some(center)
}

/// Lifted 3x3 determinant, relative to `d`.
///
/// Positive when `d` lies inside the circle through the counter-clockwise
/// triangle `abc`, zero when the four points are cocircular.
pub fn in_circle_determinant<T: Scalar>(
    a: &Vertex<T>,
    b: &Vertex<T>,
    c: &Vertex<T>,
    d: &Vertex<T>,
) -> T {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let a_lift = adx * adx + ady * ady;
    let b_lift = bdx * bdx + bdy * bdy;
    let c_lift = cdx * cdx + cdy * cdy;

    a_lift * (bdx * cdy - cdx * bdy)
        + b_lift * (cdx * ady - adx * cdy)
        + c_lift * (adx * bdy - bdx * ady)
}

/// `d` lies inside or on the circle through the counter-clockwise triangle
/// `abc`.
///
/// Cocircular configurations answer `true`, so the flip loop resolves ties by
/// flipping.
#[inline]
pub fn in_circle<T: Scalar>(a: &Vertex<T>, b: &Vertex<T>, c: &Vertex<T>, d: &Vertex<T>) -> bool {
    in_circle_determinant(a, b, c, d) >= T::zero()
}
