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

//! Utilities to compute over and annotate GeoJSON feature collections that
//! are shown in a 3D map viewer.
//!
//! The [`calc`] module computes the internal angles of line and polygon
//! features:
//!
//! ```
//! use geo::line_string;
//! use geoviz::geom::Path;
//!
//! let ring = Path::Closed(line_string![
//!     (x: 0.0, y: 0.0),
//!     (x: 0.0, y: 1.0),
//!     (x: 1.0, y: 1.0),
//!     (x: 1.0, y: 0.0),
//!     (x: 0.0, y: 0.0),
//! ]);
//!
//! for angle in ring.internal_angles() {
//!     assert_eq!(angle.round(), 90.0);
//! }
//! ```
//!
//! The [`viewer`] module attaches the display configuration that the viewer
//! reads from a feature collection.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod calc;
mod error;
pub mod geom;
pub mod viewer;

pub use error::Error;

pub mod prelude {
    pub use crate::calc::{internal_angles, internal_angles_with, AngleOptions};
    pub use crate::geom::{BearingMethod, Path};
    pub use crate::viewer::{ColourAttrib, ExtrudeAttrib, Filter, ViewerConfig};
    pub use crate::Error;
}
