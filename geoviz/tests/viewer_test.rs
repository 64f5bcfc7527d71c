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

use geojson::{FeatureCollection, GeoJson};
use geoviz::viewer::{self, ColourAttrib, ExtrudeAttrib, ViewerConfig, VIEWER_MEMBER};
use geoviz::Error;
use serde_json::json;

const BUILDINGS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "use": "office", "height": 32.5, "floors": 9 },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[9.99, 53.55], [9.99, 53.551], [9.991, 53.551], [9.99, 53.55]]]
      }
    }
  ],
  "crs": { "type": "name", "properties": { "name": "EPSG:4326" } }
}"#;

fn buildings() -> FeatureCollection {
    let geojson: GeoJson = BUILDINGS.parse().expect("fixture should be valid GeoJSON");
    FeatureCollection::try_from(geojson).expect("fixture should be a feature collection")
}

fn viewer_member(fc: &FeatureCollection) -> serde_json::Value {
    fc.foreign_members
        .as_ref()
        .and_then(|members| members.get(VIEWER_MEMBER))
        .cloned()
        .expect("collection should be annotated")
}

#[test]
fn annotate_collection() -> Result<(), Error> {
    let fc = buildings();
    let fc = viewer::add_attrib_display(fc, "use")?;
    let fc = viewer::add_attrib_display(fc, "height")?;
    let fc = viewer::add_extrude(fc, "Extrude by")?;
    let fc = viewer::add_extrude_entry(
        fc,
        ExtrudeAttrib::new("height", 0.0, 100.0, false, 1.0, false),
    )?;
    let fc = viewer::add_colour(fc, "Colour by")?;
    let fc = viewer::add_colour_entry(fc, ColourAttrib::new("floors", 1.0, 20.0, true))?;
    let fc = viewer::add_filter_cat(fc, "Usage", "use", "==", "office")?;
    let fc = viewer::add_filter_num(fc, "Height", "height", ">", 10.0)?;

    assert_eq!(
        viewer_member(&fc),
        json!({
            "select": ["use", "height"],
            "extrude": {
                "descr": "Extrude by",
                "attribs": [
                    { "name": "height", "min": 0.0, "max": 100.0, "invert": false, "scale": 1.0, "line": false }
                ]
            },
            "colour": {
                "descr": "Colour by",
                "attribs": [
                    { "name": "floors", "min": 1.0, "max": 20.0, "invert": true }
                ]
            },
            "filters": [
                { "descr": "Usage", "name": "use", "relation": 1, "value": "office" },
                { "descr": "Height", "name": "height", "relation": 0, "value": 10.0 }
            ]
        })
    );

    Ok(())
}

#[test]
fn other_members_are_kept() -> Result<(), Error> {
    let fc = viewer::add_attrib_display(buildings(), "use")?;
    let members = fc.foreign_members.expect("collection has foreign members");

    assert!(members.contains_key("crs"));
    assert!(members.contains_key(VIEWER_MEMBER));
    assert_eq!(fc.features.len(), 1);

    Ok(())
}

#[test]
fn colour_entry_creates_missing_dropdown() -> Result<(), Error> {
    let fc = viewer::add_extrude(buildings(), "Extrude by")?;
    let fc = viewer::add_colour_entry(fc, ColourAttrib::new("floors", 1.0, 20.0, false))?;

    let config = ViewerConfig::from_collection(&fc)?.expect("collection is annotated");

    assert_eq!(config.colour.map(|c| (c.descr, c.attribs.len())), Some((String::new(), 1)));
    assert_eq!(config.extrude.map(|e| e.descr), Some("Extrude by".to_string()));

    Ok(())
}

#[test]
fn configuration_survives_serialization() -> Result<(), Error> {
    let fc = viewer::add_filter_num(buildings(), "Floors", "floors", "<", 3.0)?;
    let fc = viewer::add_filter_cat(fc, "Usage", "use", "none", "")?;

    let text = GeoJson::from(fc).to_string();
    let parsed: GeoJson = text.parse().expect("serialized collection should parse");
    let fc = FeatureCollection::try_from(parsed).expect("should be a feature collection");

    let config = ViewerConfig::from_collection(&fc)?.expect("collection is annotated");
    let expected = ViewerConfig::new()
        .add_filter_num("Floors", "floors", "<", 3.0)?
        .add_filter_cat("Usage", "use", "none", "")?;

    assert_eq!(config, expected);

    Ok(())
}

#[test]
fn non_finite_entries_leave_collection_usable() -> Result<(), Error> {
    let fc = viewer::add_extrude(buildings(), "Extrude by")?;

    let rejected = viewer::add_extrude_entry(
        fc.clone(),
        ExtrudeAttrib::new("height", f64::NAN, 100.0, false, 1.0, false),
    );
    assert_eq!(
        rejected.map(|_| ()),
        Err(Error::InvalidArgument("extrude min must be finite"))
    );

    let rejected = viewer::add_filter_num(fc.clone(), "Height", "height", ">", f64::INFINITY);
    assert_eq!(
        rejected.map(|_| ()),
        Err(Error::InvalidArgument("filter value must be finite"))
    );

    let fc = viewer::add_attrib_display(fc, "height")?;
    let fc = viewer::add_extrude_entry(
        fc,
        ExtrudeAttrib::new("height", 0.0, 100.0, false, 1.0, false),
    )?;

    let config = ViewerConfig::from_collection(&fc)?.expect("collection is annotated");
    assert_eq!(config.select, Some(vec!["height".to_string()]));
    assert_eq!(config.extrude.map(|e| e.attribs.len()), Some(1));

    Ok(())
}

#[test]
fn unknown_relation() {
    let result = viewer::add_filter_cat(buildings(), "Usage", "use", "<", "office");

    assert_eq!(
        result.map(|_| ()),
        Err(Error::UnknownRelation {
            kind: "categorical",
            relation: "<".to_string()
        })
    );
}

#[test]
fn malformed_configuration() {
    let mut fc = buildings();
    fc.foreign_members
        .get_or_insert_with(Default::default)
        .insert(VIEWER_MEMBER.to_string(), json!({ "select": "use" }));

    assert!(matches!(
        viewer::add_attrib_display(fc, "height"),
        Err(Error::Json(_))
    ));
}

#[test]
fn collection_without_configuration() -> Result<(), Error> {
    assert_eq!(ViewerConfig::from_collection(&buildings())?, None);
    Ok(())
}
