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

/// Twice the signed area of triangle `abc`.
///
/// Returns:
/// - >0 if counter-clockwise (`c` left of `a -> b`)
/// - <0 if clockwise
/// - =0 if colinear
#[inline]
pub fn orientation_area<T: Scalar>(a: &Vertex<T>, b: &Vertex<T>, c: &Vertex<T>) -> T {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// `p` lies strictly left of the directed line `a -> b`.
#[inline]
pub fn is_left_of<T: Scalar>(p: &Vertex<T>, a: &Vertex<T>, b: &Vertex<T>) -> bool {
    orientation_area(a, b, p) > T::zero()
}

/// `p` lies strictly right of the directed line `a -> b`.
#[inline]
pub fn is_right_of<T: Scalar>(p: &Vertex<T>, a: &Vertex<T>, b: &Vertex<T>) -> bool {
    orientation_area(a, b, p) < T::zero()
}

#[inline]
pub fn is_colinear<T: Scalar>(a: &Vertex<T>, b: &Vertex<T>, c: &Vertex<T>) -> bool {
    orientation_area(a, b, c) == T::zero()
}
