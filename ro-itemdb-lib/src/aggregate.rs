//! Joining the source tables into items and serializing the database.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use ro_itemdb_core::{Item, PropValue, Property, Props};
use ro_itemdb_tables::{Table, parse_table_file};

use crate::description::process_description;
use crate::error::ItemDbError;
use crate::fname::generate_filename;
use crate::layout::DataLayout;
use crate::props::PropertyNormalizer;

/// The five id-keyed tables an item is assembled from.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub names: Table,
    pub resources: Table,
    pub descriptions: Table,
    pub illustrations: Table,
    pub prefixes: Table,
}

impl SourceTables {
    /// Read all five tables. A missing or unreadable table is fatal.
    pub fn load(layout: &DataLayout) -> Result<Self, ItemDbError> {
        let files = layout.tables();
        let load = |file: &Path| parse_table_file(&layout.table_path(file));

        let tables = Self {
            names: load(&files.names)?,
            resources: load(&files.resources)?,
            descriptions: load(&files.descriptions)?,
            illustrations: load(&files.illustrations)?,
            prefixes: load(&files.prefixes)?,
        };

        log::info!(
            "Loaded tables: {} names, {} resources, {} descriptions, {} illustrations, {} prefixes",
            tables.names.len(),
            tables.resources.len(),
            tables.descriptions.len(),
            tables.illustrations.len(),
            tables.prefixes.len(),
        );
        Ok(tables)
    }
}

fn lookup(table: &Table, id: u32) -> Option<&str> {
    table.get(&id).map(String::as_str).filter(|s| !s.is_empty())
}

/// Build one item per name-table entry. Ids missing from the name table
/// are dropped; missing or empty values in the other tables become `None`,
/// except prefixes, which are kept verbatim.
pub fn build_items(tables: &SourceTables, normalizer: &PropertyNormalizer) -> BTreeMap<u32, Item> {
    tables
        .names
        .iter()
        .map(|(&id, name)| {
            let item = Item {
                id,
                name: name.replace('_', " "),
                desc: process_description(lookup(&tables.descriptions, id), normalizer),
                res: lookup(&tables.resources, id).map(String::from),
                ilus: lookup(&tables.illustrations, id).map(String::from),
                prefix: tables.prefixes.get(&id).cloned(),
            };
            (id, item)
        })
        .collect()
}

/// Parse a numeric property, falling back to zero. Non-finite values
/// (`NaN`, `inf`) count as unparsable since JSON cannot carry them.
pub fn coerce_number(value: &str) -> f64 {
    value
        .trim()
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .unwrap_or_else(|| {
            log::debug!("Non-numeric value {value:?}, using 0");
            0.0
        })
}

/// Convert numeric properties to numbers. Everything else is kept as is.
pub fn coerce_props(props: &Props) -> Props {
    props
        .iter()
        .map(|(&prop, value)| {
            let value = match value {
                PropValue::Text(s) if prop.is_numeric() => PropValue::Number(coerce_number(s)),
                PropValue::List(_) if prop.is_numeric() => PropValue::Number(0.0),
                other => other.clone(),
            };
            (prop, value)
        })
        .collect()
}

/// An item as written to the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u32,
    pub name: String,
    /// Filename token of the raw resource name.
    pub res: Option<String>,
    /// Description HTML, empty when the item has no description.
    pub text: String,
    pub props: Props,
    /// Filename token of the raw illustration name.
    pub ilus: Option<String>,
    pub prefix: Option<String>,
}

impl ItemRecord {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            res: item.res.as_deref().map(generate_filename),
            text: item.desc.as_ref().map(|d| d.text.clone()).unwrap_or_default(),
            props: item.props().map(coerce_props).unwrap_or_default(),
            ilus: item.ilus.as_deref().map(generate_filename),
            prefix: item.prefix.clone(),
        }
    }
}

/// Every distinct value seen for each indexed property.
pub type Metaprops = BTreeMap<Property, BTreeSet<String>>;

/// Collect the observed values of the indexed properties across all items.
pub fn build_metaprops<'a>(items: impl IntoIterator<Item = &'a Item>) -> Metaprops {
    let mut metaprops = Metaprops::new();

    for props in items.into_iter().filter_map(Item::props) {
        for (prop, value) in props {
            if !prop.is_metaprop() {
                continue;
            }
            let values = metaprops.entry(*prop).or_default();
            match value {
                PropValue::Text(s) => {
                    values.insert(s.clone());
                }
                PropValue::List(list) => values.extend(list.iter().cloned()),
                PropValue::Number(n) => {
                    values.insert(n.to_string());
                }
            }
        }
    }

    metaprops
}

/// The complete output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub metaprops: Metaprops,
    pub items: BTreeMap<u32, ItemRecord>,
}

impl Database {
    pub fn build(items: &BTreeMap<u32, Item>) -> Self {
        Self {
            metaprops: build_metaprops(items.values()),
            items: items
                .iter()
                .map(|(&id, item)| (id, ItemRecord::from_item(item)))
                .collect(),
        }
    }

    pub fn write(&self, path: &Path, pretty: bool) -> Result<(), ItemDbError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(path)?);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self, ItemDbError> {
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
