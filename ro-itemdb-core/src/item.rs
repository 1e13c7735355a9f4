use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::property::Property;

/// A single normalized property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl PropValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

pub type Props = BTreeMap<Property, PropValue>;

/// A processed item description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Description {
    /// HTML rendering: color spans and `<br />` line breaks.
    pub text: String,
    /// Properties parsed from the plain (marker-free) text.
    pub props: Props,
}

/// An item joined from the name, resource, description, illustration and
/// prefix tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    /// Display name with underscores replaced by spaces.
    pub name: String,
    pub desc: Option<Description>,
    /// Raw resource name (sprite and collection bitmaps).
    pub res: Option<String>,
    /// Raw card illustration name.
    pub ilus: Option<String>,
    /// Card prefix, passed through verbatim.
    pub prefix: Option<String>,
}

impl Item {
    pub fn props(&self) -> Option<&Props> {
        self.desc.as_ref().map(|d| &d.props)
    }
}
