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

use thiserror::Error;

use crate::mesh::EdgeRef;

/// Seeding the triangulation failed; the previous state is kept.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TriangulationError {
    #[error("cosmic triangle is degenerate: its three vertices are colinear")]
    DegenerateBounds,
    #[error("cosmic triangle has a non-finite coordinate")]
    NonFiniteBounds,
}

/// Why an insertion left the triangulation untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    #[error("triangulation has not been seeded with a cosmic triangle")]
    Uninitialized,
    #[error("vertex is not strictly inside the cosmic triangle")]
    OutsideBounds,
    #[error("vertex coincides with an existing vertex")]
    Duplicate,
    #[error("point location did not converge within the step budget")]
    NotConverged,
}

/// A quad-edge invariant that does not hold.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("edge {edge:?}: rotation is not a 4-cycle")]
    BrokenRotation { edge: EdgeRef },
    #[error("edge {edge:?}: onext points to a deleted quad-edge")]
    DanglingNext { edge: EdgeRef },
    #[error("edge {edge:?}: onext ring mixes primal and dual records")]
    MixedRing { edge: EdgeRef },
    #[error("edge {edge:?}: onext ring is inconsistent")]
    BrokenRing { edge: EdgeRef },
    #[error("edge {edge:?}: origin equals destination")]
    DegenerateEdge { edge: EdgeRef },
}
