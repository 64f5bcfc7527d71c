// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;

/// Errors returned by the angle calculation and the viewer annotation.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// An argument is missing or has a value that cannot be represented,
    /// e.g. a feature without geometry.
    InvalidArgument(&'static str),
    /// The geometry is neither a line nor a polygon.
    UnsupportedGeometry(&'static str),
    /// A filter relation that is not known for the filter kind.
    UnknownRelation {
        kind: &'static str,
        relation: String,
    },
    /// The viewer configuration could not be read from or written to JSON.
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(arg) => write!(f, "invalid argument: {arg}"),
            Self::UnsupportedGeometry(kind) => {
                write!(f, "{kind} is not supported, expected a line or polygon")
            }
            Self::UnknownRelation { kind, relation } => {
                write!(f, "\"{relation}\" is not a valid {kind} filter relation")
            }
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
