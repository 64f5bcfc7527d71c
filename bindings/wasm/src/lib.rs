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

//! JavaScript bindings of geoviz.

use geojson::{Feature, FeatureCollection};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod viewer;

pub use viewer::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Calculates all internal angles of a line or polygon feature in degrees.
#[wasm_bindgen(js_name = anglesInternal)]
pub fn angles_internal(feature: JsValue) -> Result<Vec<f64>, JsError> {
    if feature.is_undefined() || feature.is_null() {
        return Err(geoviz::Error::InvalidArgument("feature must be defined").into());
    }

    let feature: Feature = serde_wasm_bindgen::from_value(feature)?;
    Ok(geoviz::calc::internal_angles(&feature)?)
}

fn collection_from_js(fc: JsValue) -> Result<FeatureCollection, JsError> {
    if fc.is_undefined() || fc.is_null() {
        return Err(geoviz::Error::InvalidArgument("feature collection must be defined").into());
    }

    Ok(serde_wasm_bindgen::from_value(fc)?)
}

fn collection_to_js(fc: &FeatureCollection) -> Result<JsValue, JsError> {
    // plain objects instead of ES maps for the foreign members
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(fc.serialize(&serializer)?)
}
