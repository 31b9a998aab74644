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

use std::fmt;

use crate::numeric::Scalar;

/// A point of the plane.
///
/// Boundary ("cosmic") vertices are the three sentinels enclosing every real
/// site; edges touching them are infinite edges.
#[derive(Debug, Clone, Copy)]
pub struct Vertex<T: Scalar = f64> {
    pub x: T,
    pub y: T,
    pub is_boundary: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(x: T, y: T) -> Self {
        Self {
            x,
            y,
            is_boundary: false,
        }
    }

    pub fn boundary(x: T, y: T) -> Self {
        Self {
            x,
            y,
            is_boundary: true,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn as_boundary(self) -> Self {
        Self {
            is_boundary: true,
            ..self
        }
    }
}

// Exact coordinate equality; the boundary tag does not take part.
impl<T: Scalar> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Scalar> From<(T, T)> for Vertex<T> {
    fn from((x, y): (T, T)) -> Self {
        Vertex::new(x, y)
    }
}

impl<T: Scalar> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
