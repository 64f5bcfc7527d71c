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

//! Annotations of a feature collection for a 3D viewer.
//!
//! The viewer reads its configuration from the `"cesium"` member of the
//! GeoJSON feature collection. The configuration selects the properties to
//! display, maps properties to extrusion and colour, and offers filters:
//!
//! ```
//! use geojson::FeatureCollection;
//! use geoviz::viewer::{self, ColourAttrib};
//!
//! let fc = FeatureCollection {
//!     bbox: None,
//!     features: vec![],
//!     foreign_members: None,
//! };
//!
//! let fc = viewer::add_attrib_display(fc, "height").unwrap();
//! let fc = viewer::add_colour(fc, "Colour by").unwrap();
//! let fc = viewer::add_colour_entry(fc, ColourAttrib::new("height", 0.0, 100.0, false))
//!     .unwrap();
//!
//! let config = viewer::ViewerConfig::from_collection(&fc).unwrap().unwrap();
//! assert_eq!(config.select, Some(vec!["height".to_string()]));
//! ```

use geojson::{FeatureCollection, JsonObject};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod filter;

pub use filter::{CategoryRelation, Filter, NumericRelation};

/// The foreign member of the feature collection holding the configuration.
pub const VIEWER_MEMBER: &str = "cesium";

/// A property offered in the extrude dropdown.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExtrudeAttrib {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub invert: bool,
    pub scale: f64,
    pub line: bool,
}

impl ExtrudeAttrib {
    fn check(&self) -> Result<(), Error> {
        finite(self.min, "extrude min must be finite")?;
        finite(self.max, "extrude max must be finite")?;
        finite(self.scale, "extrude scale must be finite")?;
        Ok(())
    }

    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        invert: bool,
        scale: f64,
        line: bool,
    ) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            invert,
            scale,
            line,
        }
    }
}

/// A property offered in the colour dropdown.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ColourAttrib {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub invert: bool,
}

impl ColourAttrib {
    fn check(&self) -> Result<(), Error> {
        finite(self.min, "colour min must be finite")?;
        finite(self.max, "colour max must be finite")?;
        Ok(())
    }

    pub fn new(name: impl Into<String>, min: f64, max: f64, invert: bool) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            invert,
        }
    }
}

/// Extrude dropdown with its description.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Extrude {
    #[serde(default)]
    pub descr: String,
    #[serde(default)]
    pub attribs: Vec<ExtrudeAttrib>,
}

/// Colour dropdown with its description.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Colour {
    #[serde(default)]
    pub descr: String,
    #[serde(default)]
    pub attribs: Vec<ColourAttrib>,
}

/// Configuration of the viewer.
///
/// Each section is optional and only present in the serialized
/// configuration once something was added to it.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrude: Option<Extrude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from the feature collection.
    ///
    /// Returns `None` if the collection has no configuration yet.
    pub fn from_collection(fc: &FeatureCollection) -> Result<Option<Self>, Error> {
        match fc
            .foreign_members
            .as_ref()
            .and_then(|members| members.get(VIEWER_MEMBER))
        {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Writes the configuration into the feature collection, replacing any
    /// previous one. Other foreign members are kept.
    pub fn attach(&self, mut fc: FeatureCollection) -> Result<FeatureCollection, Error> {
        let value = serde_json::to_value(self)?;
        fc.foreign_members
            .get_or_insert_with(JsonObject::new)
            .insert(VIEWER_MEMBER.to_string(), value);
        Ok(fc)
    }

    /// Adds a property to display.
    pub fn add_attrib_display(mut self, name: impl Into<String>) -> Self {
        self.select.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Adds the extrude dropdown, replacing an existing one with its entries.
    pub fn add_extrude(mut self, descr: impl Into<String>) -> Self {
        self.extrude = Some(Extrude {
            descr: descr.into(),
            attribs: Vec::new(),
        });
        self
    }

    /// Adds an entry to the extrude dropdown, which is created without
    /// description if missing.
    ///
    /// Returns an [`Error::InvalidArgument`] if a bound or the scale is not
    /// finite, since JSON has no representation for it.
    pub fn add_extrude_entry(mut self, attrib: ExtrudeAttrib) -> Result<Self, Error> {
        attrib.check()?;
        self.extrude
            .get_or_insert_with(Extrude::default)
            .attribs
            .push(attrib);
        Ok(self)
    }

    /// Adds the colour dropdown, replacing an existing one with its entries.
    pub fn add_colour(mut self, descr: impl Into<String>) -> Self {
        self.colour = Some(Colour {
            descr: descr.into(),
            attribs: Vec::new(),
        });
        self
    }

    /// Adds an entry to the colour dropdown, which is created without
    /// description if missing.
    ///
    /// Returns an [`Error::InvalidArgument`] if a bound is not finite.
    pub fn add_colour_entry(mut self, attrib: ColourAttrib) -> Result<Self, Error> {
        attrib.check()?;
        self.colour
            .get_or_insert_with(Colour::default)
            .attribs
            .push(attrib);
        Ok(self)
    }

    /// Adds a filter.
    ///
    /// Returns an [`Error::InvalidArgument`] if the value of a numeric filter
    /// is not finite.
    pub fn add_filter(mut self, filter: Filter) -> Result<Self, Error> {
        if let Filter::Numeric { value, .. } = &filter {
            finite(*value, "filter value must be finite")?;
        }
        trace!("adding filter on property {}", filter.name());
        self.filters.get_or_insert_with(Vec::new).push(filter);
        Ok(self)
    }

    /// Adds a categorical filter with the relation `none`, `==` or `!=`.
    pub fn add_filter_cat(
        self,
        descr: impl Into<String>,
        name: impl Into<String>,
        relation: &str,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        self.add_filter(Filter::category(descr, name, relation, value)?)
    }

    /// Adds a numeric filter with the relation `>`, `<` or `==`.
    pub fn add_filter_num(
        self,
        descr: impl Into<String>,
        name: impl Into<String>,
        relation: &str,
        value: f64,
    ) -> Result<Self, Error> {
        self.add_filter(Filter::numeric(descr, name, relation, value)?)
    }
}

/// Returns the `value` if it is finite, otherwise an invalid argument
/// described by `arg`.
pub(crate) fn finite(value: f64, arg: &'static str) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(arg))
    }
}

/// Applies `f` to the configuration of the feature collection and writes the
/// result back.
fn annotate<F>(fc: FeatureCollection, f: F) -> Result<FeatureCollection, Error>
where
    F: FnOnce(ViewerConfig) -> Result<ViewerConfig, Error>,
{
    let config = match ViewerConfig::from_collection(&fc)? {
        Some(config) => config,
        None => {
            trace!("feature collection has no viewer configuration yet");
            ViewerConfig::new()
        }
    };

    let config = f(config)?;
    debug!(
        "annotated feature collection: select={}, extrude={}, colour={}, filters={}",
        config.select.as_ref().map_or(0, Vec::len),
        config.extrude.as_ref().map_or(0, |e| e.attribs.len()),
        config.colour.as_ref().map_or(0, |c| c.attribs.len()),
        config.filters.as_ref().map_or(0, Vec::len),
    );

    config.attach(fc)
}

/// Adds an attribute display option.
pub fn add_attrib_display(fc: FeatureCollection, name: &str) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| Ok(config.add_attrib_display(name)))
}

/// Adds an extrude dropdown.
pub fn add_extrude(fc: FeatureCollection, descr: &str) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| Ok(config.add_extrude(descr)))
}

/// Adds an entry to the extrude dropdown.
pub fn add_extrude_entry(
    fc: FeatureCollection,
    attrib: ExtrudeAttrib,
) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| config.add_extrude_entry(attrib))
}

/// Adds a colour dropdown.
pub fn add_colour(fc: FeatureCollection, descr: &str) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| Ok(config.add_colour(descr)))
}

/// Adds an entry to the colour dropdown.
pub fn add_colour_entry(
    fc: FeatureCollection,
    attrib: ColourAttrib,
) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| config.add_colour_entry(attrib))
}

/// Adds a categorical filter.
pub fn add_filter_cat(
    fc: FeatureCollection,
    descr: &str,
    name: &str,
    relation: &str,
    value: &str,
) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| config.add_filter_cat(descr, name, relation, value))
}

/// Adds a numeric filter.
pub fn add_filter_num(
    fc: FeatureCollection,
    descr: &str,
    name: &str,
    relation: &str,
    value: f64,
) -> Result<FeatureCollection, Error> {
    annotate(fc, |config| config.add_filter_num(descr, name, relation, value))
}
