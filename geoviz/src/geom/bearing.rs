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

use geo::{Bearing, Geodesic, Haversine, Point, Rhumb};

/// The method used to compute the bearing between two points.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BearingMethod {
    /// Initial bearing of the great circle on a sphere.
    #[default]
    Haversine,
    /// Initial bearing of the geodesic on the WGS84 ellipsoid.
    Geodesic,
    /// Constant bearing of the rhumb line.
    Rhumb,
}

impl BearingMethod {
    /// Returns the bearing in degrees from `origin` to `destination`.
    pub fn bearing(&self, origin: Point<f64>, destination: Point<f64>) -> f64 {
        match self {
            Self::Haversine => Haversine.bearing(origin, destination),
            Self::Geodesic => Geodesic.bearing(origin, destination),
            Self::Rhumb => Rhumb.bearing(origin, destination),
        }
    }

    /// Returns the bearing from `origin` to `destination` as azimuth in the
    /// range `[0, 360)`.
    pub fn azimuth(&self, origin: Point<f64>, destination: Point<f64>) -> f64 {
        bearing_to_azimuth(self.bearing(origin, destination))
    }
}

/// Normalizes a bearing in degrees into an azimuth in the range `[0, 360)`.
///
/// ```
/// use geoviz::geom::bearing_to_azimuth;
///
/// assert_eq!(bearing_to_azimuth(-90.0), 270.0);
/// assert_eq!(bearing_to_azimuth(450.0), 90.0);
/// ```
pub fn bearing_to_azimuth(bearing: f64) -> f64 {
    let mut azimuth = bearing % 360.0;

    if azimuth < 0.0 {
        azimuth += 360.0;
    }

    // tiny negative remainders round up to a full turn
    if azimuth >= 360.0 {
        0.0
    } else {
        azimuth
    }
}
