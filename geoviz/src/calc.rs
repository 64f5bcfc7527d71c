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

//! Calculations done on GeoJSON features.

use geojson::Feature;
use log::{debug, trace, warn};

use crate::error::Error;
use crate::geom::{BearingMethod, Path};

/// The angle at the open endpoint of a line, where no turn is measured.
pub const OPEN_ENDPOINT_ANGLE: f64 = 360.0;

/// Options of the internal angle calculation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AngleOptions {
    /// The bearing between two consecutive vertices.
    pub bearing: BearingMethod,
}

impl AngleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bearing(mut self, bearing: BearingMethod) -> Self {
        self.bearing = bearing;
        self
    }
}

impl Path {
    /// Returns the internal angles in degrees, one per vertex.
    ///
    /// The angle at a vertex is the turn from the incoming into the outgoing
    /// segment. On a closed path the turn at the last segment wraps around
    /// into the first segment. On an open path there is no turn at the end,
    /// so the last angle is [`OPEN_ENDPOINT_ANGLE`]. The first vertex gets the
    /// same angle as the last one.
    ///
    /// Paths with less than two vertices have no angles.
    ///
    /// ```
    /// use geo::line_string;
    /// use geoviz::geom::Path;
    ///
    /// let path = Path::Open(line_string![
    ///     (x: 0.0, y: 0.0),
    ///     (x: 1.0, y: 0.0),
    ///     (x: 2.0, y: 0.0),
    /// ]);
    ///
    /// assert_eq!(path.internal_angles(), vec![360.0, 0.0, 360.0]);
    /// ```
    pub fn internal_angles(&self) -> Vec<f64> {
        self.internal_angles_with(&AngleOptions::default())
    }

    /// Returns the internal angles using the `options`.
    pub fn internal_angles_with(&self, options: &AngleOptions) -> Vec<f64> {
        let azimuths = self.azimuths(options.bearing);
        let n = azimuths.len();

        if n == 0 {
            warn!("path with {} vertices has no internal angles", self.len());
            return Vec::new();
        }

        let mut angles = Vec::with_capacity(n + 1);

        for i in 0..n {
            let angle = match self {
                Self::Open(_) if i == n - 1 => OPEN_ENDPOINT_ANGLE,
                Self::Open(_) => turn(azimuths[i], azimuths[i + 1]),
                Self::Closed(_) => turn(azimuths[i], azimuths[(i + 1) % n]),
            };

            trace!("turn at segment {i}: {angle}°");
            angles.push(angle);
        }

        angles.insert(0, angles[n - 1]);

        debug!(
            "computed {} internal angles of {} path ({:?} bearing)",
            angles.len(),
            if self.is_closed() { "closed" } else { "open" },
            options.bearing
        );

        angles
    }
}

/// Returns the clockwise turn from azimuth `from` to azimuth `to`.
fn turn(from: f64, to: f64) -> f64 {
    let angle = to - from;

    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Calculates all internal angles of a line or polygon feature.
///
/// Returns an [`Error::InvalidArgument`] if the feature has no geometry and an
/// [`Error::UnsupportedGeometry`] if the geometry is neither a line nor a
/// polygon.
///
/// ```
/// use geojson::Feature;
///
/// let feature: Feature = r#"{
///     "type": "Feature",
///     "properties": {},
///     "geometry": {
///         "type": "LineString",
///         "coordinates": [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]
///     }
/// }"#
/// .parse()
/// .unwrap();
///
/// let angles = geoviz::calc::internal_angles(&feature).unwrap();
/// assert_eq!(angles, vec![360.0, 0.0, 360.0]);
/// ```
pub fn internal_angles(feature: &Feature) -> Result<Vec<f64>, Error> {
    internal_angles_with(feature, &AngleOptions::default())
}

/// Calculates all internal angles of a line or polygon feature using the
/// `options`.
pub fn internal_angles_with(feature: &Feature, options: &AngleOptions) -> Result<Vec<f64>, Error> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(Error::InvalidArgument("feature geometry must be defined"))?;

    let path = Path::try_from(geometry)?;
    Ok(path.internal_angles_with(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geo::line_string;

    fn square() -> Path {
        Path::Closed(line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
            (x: 0.0, y: 0.0),
        ])
    }

    #[test]
    fn square_has_right_angles() {
        let angles = square().internal_angles_with(&AngleOptions::new().bearing(BearingMethod::Rhumb));

        assert_eq!(angles.len(), 5);
        for angle in angles {
            assert_abs_diff_eq!(angle, 90.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn square_on_great_circles() {
        // Great circles between the corners bend slightly, so the turns are
        // only approximately right angles.
        let angles = square().internal_angles();

        assert_eq!(angles.len(), 5);
        for angle in angles {
            assert_abs_diff_eq!(angle, 90.0, epsilon = 0.05);
        }
    }

    #[test]
    fn straight_line() {
        let path = Path::Open(line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 2.0, y: 0.0),
        ]);

        assert_eq!(path.internal_angles(), vec![360.0, 0.0, 360.0]);
    }

    #[test]
    fn left_and_right_turns() {
        // north, then east (right turn), then north again (left turn)
        let path = Path::Open(line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 2.0),
        ]);

        let angles = path.internal_angles_with(&AngleOptions::new().bearing(BearingMethod::Rhumb));

        assert_eq!(angles.len(), 4);
        assert_abs_diff_eq!(angles[1], 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angles[2], 270.0, epsilon = 1e-9);
        assert_eq!(angles[3], OPEN_ENDPOINT_ANGLE);
        assert_eq!(angles[0], angles[3]);
    }

    #[test]
    fn two_vertices() {
        let path = Path::Open(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert_eq!(path.internal_angles(), vec![360.0, 360.0]);
    }

    #[test]
    fn degenerate_paths_have_no_angles() {
        let single = Path::Open(line_string![(x: 0.0, y: 0.0)]);
        let empty = Path::Closed(line_string![]);

        assert!(single.internal_angles().is_empty());
        assert!(empty.internal_angles().is_empty());
    }

    #[test]
    fn feature_without_geometry() {
        let feature = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };

        assert_eq!(
            internal_angles(&feature),
            Err(Error::InvalidArgument("feature geometry must be defined"))
        );
    }

    #[test]
    fn turn_wraps_negative_angles() {
        assert_eq!(turn(90.0, 180.0), 90.0);
        assert_eq!(turn(180.0, 90.0), 270.0);
        assert_eq!(turn(350.0, 10.0), 20.0);
    }
}
