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

use geoviz::viewer::{self, ColourAttrib, ExtrudeAttrib};
use wasm_bindgen::prelude::*;

use crate::{collection_from_js, collection_to_js};

#[wasm_bindgen(js_name = addAttribDisplay)]
pub fn add_attrib_display(fc: JsValue, name: String) -> Result<JsValue, JsError> {
    let fc = viewer::add_attrib_display(collection_from_js(fc)?, &name)?;
    collection_to_js(&fc)
}

#[wasm_bindgen(js_name = addExtrude)]
pub fn add_extrude(fc: JsValue, descr: String) -> Result<JsValue, JsError> {
    let fc = viewer::add_extrude(collection_from_js(fc)?, &descr)?;
    collection_to_js(&fc)
}

#[wasm_bindgen(js_name = addExtrudeEntry)]
pub fn add_extrude_entry(
    fc: JsValue,
    name: String,
    min: f64,
    max: f64,
    invert: bool,
    scale: f64,
    line: bool,
) -> Result<JsValue, JsError> {
    let attrib = ExtrudeAttrib::new(name, min, max, invert, scale, line);
    let fc = viewer::add_extrude_entry(collection_from_js(fc)?, attrib)?;
    collection_to_js(&fc)
}

#[wasm_bindgen(js_name = addColour)]
pub fn add_colour(fc: JsValue, descr: String) -> Result<JsValue, JsError> {
    let fc = viewer::add_colour(collection_from_js(fc)?, &descr)?;
    collection_to_js(&fc)
}

#[wasm_bindgen(js_name = addColourEntry)]
pub fn add_colour_entry(
    fc: JsValue,
    name: String,
    min: f64,
    max: f64,
    invert: bool,
) -> Result<JsValue, JsError> {
    let attrib = ColourAttrib::new(name, min, max, invert);
    let fc = viewer::add_colour_entry(collection_from_js(fc)?, attrib)?;
    collection_to_js(&fc)
}

#[wasm_bindgen(js_name = addFilterCat)]
pub fn add_filter_cat(
    fc: JsValue,
    descr: String,
    name: String,
    relation: String,
    value: String,
) -> Result<JsValue, JsError> {
    let fc = viewer::add_filter_cat(collection_from_js(fc)?, &descr, &name, &relation, &value)?;
    collection_to_js(&fc)
}

#[wasm_bindgen(js_name = addFilterNum)]
pub fn add_filter_num(
    fc: JsValue,
    descr: String,
    name: String,
    relation: String,
    value: f64,
) -> Result<JsValue, JsError> {
    let fc = viewer::add_filter_num(collection_from_js(fc)?, &descr, &name, &relation, value)?;
    collection_to_js(&fc)
}
