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

//! Typed paths over which angles are computed.

use geo::{Coord, LineString, Point, Polygon};
use log::{trace, warn};

use crate::error::Error;

mod bearing;

pub use bearing::{bearing_to_azimuth, BearingMethod};

/// A vertex sequence that is either open or closed.
///
/// A line string is an open path. The outer ring of a polygon is a closed path
/// where the last vertex repeats the first. Interior rings of a polygon are
/// not part of the path.
#[derive(Clone, PartialEq, Debug)]
pub enum Path {
    Open(LineString<f64>),
    Closed(LineString<f64>),
}

impl Path {
    /// The vertices of the path.
    pub fn line_string(&self) -> &LineString<f64> {
        match self {
            Self::Open(line) | Self::Closed(line) => line,
        }
    }

    /// Returns `true` if the path is the ring of a polygon.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.line_string().0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_string().0.is_empty()
    }

    /// Returns the azimuth of each segment, one less than there are vertices.
    pub fn azimuths(&self, method: BearingMethod) -> Vec<f64> {
        self.line_string()
            .0
            .windows(2)
            .map(|segment| method.azimuth(Point::from(segment[0]), Point::from(segment[1])))
            .collect()
    }
}

impl From<LineString<f64>> for Path {
    fn from(line: LineString<f64>) -> Self {
        Self::Open(line)
    }
}

impl From<Polygon<f64>> for Path {
    fn from(polygon: Polygon<f64>) -> Self {
        let (exterior, _) = polygon.into_inner();
        Self::Closed(exterior)
    }
}

impl TryFrom<&geo::Geometry<f64>> for Path {
    type Error = Error;

    fn try_from(geometry: &geo::Geometry<f64>) -> Result<Self, Self::Error> {
        use geo::Geometry;

        match geometry {
            Geometry::Line(line) => Ok(Self::Open(LineString::from(vec![line.start, line.end]))),
            Geometry::LineString(line) => Ok(Self::Open(line.clone())),
            Geometry::Polygon(polygon) => Ok(Self::from(polygon.clone())),
            Geometry::Rect(rect) => Ok(Self::from(rect.to_polygon())),
            Geometry::Triangle(triangle) => Ok(Self::from(triangle.to_polygon())),
            Geometry::MultiLineString(lines) if lines.0.len() == 1 => {
                trace!("unwrapping multi line string with a single member");
                Ok(Self::Open(lines.0[0].clone()))
            }
            Geometry::MultiPolygon(polygons) if polygons.0.len() == 1 => {
                trace!("unwrapping multi polygon with a single member");
                Ok(Self::from(polygons.0[0].clone()))
            }
            Geometry::GeometryCollection(collection) if collection.0.len() == 1 => {
                trace!("unwrapping geometry collection with a single member");
                Self::try_from(&collection.0[0])
            }
            Geometry::Point(_) => Err(Error::UnsupportedGeometry("Point")),
            Geometry::MultiPoint(_) => Err(Error::UnsupportedGeometry("MultiPoint")),
            Geometry::MultiLineString(_) => Err(Error::UnsupportedGeometry("MultiLineString")),
            Geometry::MultiPolygon(_) => Err(Error::UnsupportedGeometry("MultiPolygon")),
            Geometry::GeometryCollection(_) => {
                Err(Error::UnsupportedGeometry("GeometryCollection"))
            }
        }
    }
}

impl TryFrom<&geojson::Value> for Path {
    type Error = Error;

    fn try_from(value: &geojson::Value) -> Result<Self, Self::Error> {
        use geojson::Value;

        match value {
            Value::LineString(positions) => Ok(Self::Open(line_string(positions))),
            Value::Polygon(rings) => Ok(Self::Closed(outer_ring(rings))),
            Value::MultiLineString(lines) if lines.len() == 1 => {
                trace!("unwrapping multi line string with a single member");
                Ok(Self::Open(line_string(&lines[0])))
            }
            Value::MultiPolygon(polygons) if polygons.len() == 1 => {
                trace!("unwrapping multi polygon with a single member");
                Ok(Self::Closed(outer_ring(&polygons[0])))
            }
            Value::GeometryCollection(geometries) if geometries.len() == 1 => {
                trace!("unwrapping geometry collection with a single member");
                Self::try_from(&geometries[0].value)
            }
            Value::Point(_) => Err(Error::UnsupportedGeometry("Point")),
            Value::MultiPoint(_) => Err(Error::UnsupportedGeometry("MultiPoint")),
            Value::MultiLineString(_) => Err(Error::UnsupportedGeometry("MultiLineString")),
            Value::MultiPolygon(_) => Err(Error::UnsupportedGeometry("MultiPolygon")),
            Value::GeometryCollection(_) => Err(Error::UnsupportedGeometry("GeometryCollection")),
        }
    }
}

impl TryFrom<&geojson::Geometry> for Path {
    type Error = Error;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&geometry.value)
    }
}

/// Converts GeoJSON positions into a line string, ignoring any altitude.
fn line_string(positions: &[geojson::Position]) -> LineString<f64> {
    let coords: Vec<Coord<f64>> = positions
        .iter()
        .filter_map(|position| match position.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            _ => {
                warn!("skipping position with less than two values: {position:?}");
                None
            }
        })
        .collect();

    LineString::from(coords)
}

fn outer_ring(rings: &[Vec<geojson::Position>]) -> LineString<f64> {
    let ring = rings
        .first()
        .map(|ring| line_string(ring))
        .unwrap_or_else(|| LineString::new(Vec::new()));

    if !ring.is_closed() {
        warn!("outer ring is not closed, its first and last vertex differ");
    }

    ring
}
