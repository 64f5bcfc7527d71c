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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Relation of a categorical filter.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CategoryRelation {
    None = 0,
    Equal = 1,
    NotEqual = 2,
}

/// Relation of a numeric filter.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumericRelation {
    Greater = 0,
    Less = 1,
    Equal = 2,
}

impl FromStr for CategoryRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            _ => Err(Error::UnknownRelation {
                kind: "categorical",
                relation: s.to_string(),
            }),
        }
    }
}

impl FromStr for NumericRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Self::Greater),
            "<" => Ok(Self::Less),
            "==" => Ok(Self::Equal),
            _ => Err(Error::UnknownRelation {
                kind: "numeric",
                relation: s.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for CategoryRelation {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::None),
            1 => Ok(Self::Equal),
            2 => Ok(Self::NotEqual),
            _ => Err(Error::UnknownRelation {
                kind: "categorical",
                relation: id.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for NumericRelation {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Greater),
            1 => Ok(Self::Less),
            2 => Ok(Self::Equal),
            _ => Err(Error::UnknownRelation {
                kind: "numeric",
                relation: id.to_string(),
            }),
        }
    }
}

impl Display for CategoryRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
        }
    }
}

impl Display for NumericRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greater => write!(f, ">"),
            Self::Less => write!(f, "<"),
            Self::Equal => write!(f, "=="),
        }
    }
}

/// A filter the viewer offers on a feature property.
///
/// On the wire the relation is the integer id of the relation and the value
/// is either a string (categorical) or a number (numeric):
///
/// ```json
/// { "descr": "Usage", "name": "use", "relation": 1, "value": "residential" }
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(into = "FilterRecord", try_from = "FilterRecord")]
pub enum Filter {
    Category {
        descr: String,
        name: String,
        relation: CategoryRelation,
        value: String,
    },
    Numeric {
        descr: String,
        name: String,
        relation: NumericRelation,
        value: f64,
    },
}

impl Filter {
    /// Creates a categorical filter parsing the `relation` from `none`, `==`
    /// or `!=`.
    pub fn category(
        descr: impl Into<String>,
        name: impl Into<String>,
        relation: &str,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        Ok(Self::Category {
            descr: descr.into(),
            name: name.into(),
            relation: relation.parse()?,
            value: value.into(),
        })
    }

    /// Creates a numeric filter parsing the `relation` from `>`, `<` or `==`.
    ///
    /// The `value` must be finite.
    pub fn numeric(
        descr: impl Into<String>,
        name: impl Into<String>,
        relation: &str,
        value: f64,
    ) -> Result<Self, Error> {
        Ok(Self::Numeric {
            descr: descr.into(),
            name: name.into(),
            relation: relation.parse()?,
            value: super::finite(value, "filter value must be finite")?,
        })
    }

    /// The name of the filtered property.
    pub fn name(&self) -> &str {
        match self {
            Self::Category { name, .. } | Self::Numeric { name, .. } => name,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum FilterValue {
    Text(String),
    Number(f64),
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct FilterRecord {
    descr: String,
    name: String,
    relation: u8,
    value: FilterValue,
}

impl From<Filter> for FilterRecord {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Category {
                descr,
                name,
                relation,
                value,
            } => Self {
                descr,
                name,
                relation: relation as u8,
                value: FilterValue::Text(value),
            },
            Filter::Numeric {
                descr,
                name,
                relation,
                value,
            } => Self {
                descr,
                name,
                relation: relation as u8,
                value: FilterValue::Number(value),
            },
        }
    }
}

impl TryFrom<FilterRecord> for Filter {
    type Error = Error;

    fn try_from(record: FilterRecord) -> Result<Self, Self::Error> {
        match record.value {
            FilterValue::Text(value) => Ok(Self::Category {
                descr: record.descr,
                name: record.name,
                relation: CategoryRelation::try_from(record.relation)?,
                value,
            }),
            FilterValue::Number(value) => Ok(Self::Numeric {
                descr: record.descr,
                name: record.name,
                relation: NumericRelation::try_from(record.relation)?,
                value,
            }),
        }
    }
}
